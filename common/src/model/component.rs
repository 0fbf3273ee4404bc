//! # Component Registry
//!
//! Static catalog of the visualization blocks a user can place on a dashboard.
//! Each `ComponentId` variant has exactly one `ComponentMetadata` entry in
//! `COMPONENTS`; the catalog is never mutated after the process starts.
//!
//! The picker UI consumes `ComponentRegistry::list_by_category`, which groups
//! the catalog by category while keeping declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Identifier of a selectable block kind.
///
/// The wire form is kebab-case (`pie-chart`, `recent-list`, ...). Parsing any
/// other string fails, which is how unknown references are detected.
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
pub enum ComponentId {
    PieChart,
    BarChart,
    LineChart,
    RecentList,
    WalletsList,
    TopExpensesList,
    BalanceSummary,
}

/// Grouping label shown in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr)]
pub enum ComponentCategory {
    Charts,
    Lists,
    Summary,
}

/// Describes one selectable visualization block kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub id: ComponentId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ComponentCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Path of the static preview asset.
    pub preview_image: &'static str,
}

/// Components sharing one category, in registry declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentGroup {
    pub category: ComponentCategory,
    pub components: Vec<&'static ComponentMetadata>,
}

static COMPONENTS: [ComponentMetadata; 7] = [
    ComponentMetadata {
        id: ComponentId::PieChart,
        name: "Expenses by category",
        description: "Pie chart splitting the period's expenses by category.",
        category: ComponentCategory::Charts,
        icon: Some("chart-pie"),
        preview_image: "/assets/previews/pie-chart.png",
    },
    ComponentMetadata {
        id: ComponentId::RecentList,
        name: "Recent transactions",
        description: "The latest transactions across every wallet.",
        category: ComponentCategory::Lists,
        icon: Some("list"),
        preview_image: "/assets/previews/recent-list.png",
    },
    ComponentMetadata {
        id: ComponentId::BarChart,
        name: "Income vs. expenses",
        description: "Bar chart comparing income and expenses per month.",
        category: ComponentCategory::Charts,
        icon: Some("chart-bar"),
        preview_image: "/assets/previews/bar-chart.png",
    },
    ComponentMetadata {
        id: ComponentId::LineChart,
        name: "Balance over time",
        description: "Line chart of the total balance through the period.",
        category: ComponentCategory::Charts,
        icon: Some("chart-line"),
        preview_image: "/assets/previews/line-chart.png",
    },
    ComponentMetadata {
        id: ComponentId::WalletsList,
        name: "Wallets",
        description: "Every wallet with its current balance.",
        category: ComponentCategory::Lists,
        icon: Some("wallet"),
        preview_image: "/assets/previews/wallets-list.png",
    },
    ComponentMetadata {
        id: ComponentId::TopExpensesList,
        name: "Top expenses",
        description: "The largest expenses of the period.",
        category: ComponentCategory::Lists,
        icon: None,
        preview_image: "/assets/previews/top-expenses-list.png",
    },
    ComponentMetadata {
        id: ComponentId::BalanceSummary,
        name: "Balance summary",
        description: "Total balance, income and expenses at a glance.",
        category: ComponentCategory::Summary,
        icon: Some("scale"),
        preview_image: "/assets/previews/balance-summary.png",
    },
];

/// Read-only access to the component catalog.
pub struct ComponentRegistry;

impl ComponentRegistry {
    /// Every entry, in declaration order.
    pub fn all() -> &'static [ComponentMetadata] {
        &COMPONENTS
    }

    pub fn get(id: ComponentId) -> Option<&'static ComponentMetadata> {
        COMPONENTS.iter().find(|meta| meta.id == id)
    }

    /// Looks up a component by its wire identifier. Returns `None` for
    /// identifiers outside the enumeration.
    pub fn find(raw: &str) -> Option<&'static ComponentMetadata> {
        raw.parse::<ComponentId>().ok().and_then(Self::get)
    }

    /// Groups the catalog by category. Categories appear in the order they
    /// are first seen; entries keep declaration order inside each group.
    pub fn list_by_category() -> Vec<ComponentGroup> {
        let mut groups: IndexMap<ComponentCategory, Vec<&'static ComponentMetadata>> =
            IndexMap::new();
        for meta in &COMPONENTS {
            groups.entry(meta.category).or_default().push(meta);
        }
        groups
            .into_iter()
            .map(|(category, components)| ComponentGroup {
                category,
                components,
            })
            .collect()
    }
}
