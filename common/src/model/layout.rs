//! # Layout Catalog
//!
//! Named grid layouts a dashboard can be arranged in. A layout is a list of
//! rows, and `structure[i]` is the number of block slots in row `i`.
//!
//! Built-in entries are authored so that `structure` sums to `total_blocks`
//! and has `rows` entries. `LayoutDefinition::check` states that rule as code;
//! the catalog test suite runs it over every shipped layout.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

/// Identifier of a layout shape. Wire form is kebab-case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LayoutId {
    Single,
    SideBySide,
    TwoThenOne,
    OneThenTwo,
    ThreeRows,
    GridTwoByTwo,
    ThreeThenOne,
}

/// One named arrangement of blocks into rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDefinition {
    pub id: LayoutId,
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub total_blocks: usize,
    /// Slot count of each row, top to bottom.
    pub structure: &'static [usize],
    /// Path of the illustrative preview asset.
    pub preview: &'static str,
}

/// A layout whose `structure` disagrees with its declared counts.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutError {
    #[error("layout has no rows")]
    EmptyStructure,

    #[error("row {row} has no slots")]
    EmptyRow { row: usize },

    #[error("layout declares {rows} rows but its structure has {structure_len}")]
    RowCountMismatch { rows: usize, structure_len: usize },

    #[error("layout declares {total_blocks} blocks but its rows hold {slot_sum}")]
    SlotCountMismatch { total_blocks: usize, slot_sum: usize },
}

impl LayoutDefinition {
    /// Verifies the structure rule: a non-empty list of positive slot counts,
    /// one per row, summing to `total_blocks`.
    pub fn check(&self) -> Result<(), LayoutError> {
        if self.structure.is_empty() {
            return Err(LayoutError::EmptyStructure);
        }
        if let Some(row) = self.structure.iter().position(|&slots| slots == 0) {
            return Err(LayoutError::EmptyRow { row });
        }
        if self.structure.len() != self.rows {
            return Err(LayoutError::RowCountMismatch {
                rows: self.rows,
                structure_len: self.structure.len(),
            });
        }
        let slot_sum: usize = self.structure.iter().sum();
        if slot_sum != self.total_blocks {
            return Err(LayoutError::SlotCountMismatch {
                total_blocks: self.total_blocks,
                slot_sum,
            });
        }
        Ok(())
    }
}

static LAYOUTS: [LayoutDefinition; 7] = [
    LayoutDefinition {
        id: LayoutId::Single,
        name: "Single",
        description: "One full-width block.",
        rows: 1,
        total_blocks: 1,
        structure: &[1],
        preview: "/assets/layouts/single.svg",
    },
    LayoutDefinition {
        id: LayoutId::SideBySide,
        name: "Side by side",
        description: "Two blocks sharing one row.",
        rows: 1,
        total_blocks: 2,
        structure: &[2],
        preview: "/assets/layouts/side-by-side.svg",
    },
    LayoutDefinition {
        id: LayoutId::TwoThenOne,
        name: "Two then one",
        description: "Two blocks, then one full-width block.",
        rows: 2,
        total_blocks: 3,
        structure: &[2, 1],
        preview: "/assets/layouts/two-then-one.svg",
    },
    LayoutDefinition {
        id: LayoutId::OneThenTwo,
        name: "One then two",
        description: "One full-width block, then two blocks.",
        rows: 2,
        total_blocks: 3,
        structure: &[1, 2],
        preview: "/assets/layouts/one-then-two.svg",
    },
    LayoutDefinition {
        id: LayoutId::ThreeRows,
        name: "Three rows",
        description: "Three full-width blocks stacked.",
        rows: 3,
        total_blocks: 3,
        structure: &[1, 1, 1],
        preview: "/assets/layouts/three-rows.svg",
    },
    LayoutDefinition {
        id: LayoutId::GridTwoByTwo,
        name: "Grid",
        description: "Two rows of two blocks.",
        rows: 2,
        total_blocks: 4,
        structure: &[2, 2],
        preview: "/assets/layouts/grid-two-by-two.svg",
    },
    LayoutDefinition {
        id: LayoutId::ThreeThenOne,
        name: "Three then one",
        description: "Three blocks, then one full-width block.",
        rows: 2,
        total_blocks: 4,
        structure: &[3, 1],
        preview: "/assets/layouts/three-then-one.svg",
    },
];

/// Read-only access to the layout catalog.
pub struct LayoutCatalog;

impl LayoutCatalog {
    /// Every layout, in declaration order.
    pub fn all() -> &'static [LayoutDefinition] {
        &LAYOUTS
    }

    pub fn get(id: LayoutId) -> Option<&'static LayoutDefinition> {
        LAYOUTS.iter().find(|layout| layout.id == id)
    }

    /// Looks up a layout by its wire identifier.
    pub fn find(raw: &str) -> Option<&'static LayoutDefinition> {
        raw.parse::<LayoutId>().ok().and_then(Self::get)
    }
}
