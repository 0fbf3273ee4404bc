use common::{
    place_blocks, validate, BlockDraft, ComponentId, LayoutCatalog, LayoutId, TemplateBlock,
    TemplateError,
};
use pretty_assertions::assert_eq;

fn block(id: &str, component_id: ComponentId) -> TemplateBlock {
    TemplateBlock {
        id: id.to_string(),
        component_id,
    }
}

#[test]
fn two_then_one_places_a_b_then_c() {
    let layout = LayoutCatalog::get(LayoutId::TwoThenOne).expect("layout");
    let a = block("a", ComponentId::PieChart);
    let b = block("b", ComponentId::BarChart);
    let c = block("c", ComponentId::RecentList);
    let blocks = vec![a.clone(), b.clone(), c.clone()];

    let rows = place_blocks(&blocks, layout);

    assert_eq!(rows, vec![&[a, b][..], &[c][..]]);
}

#[test]
fn placement_never_reorders() {
    let layout = LayoutCatalog::get(LayoutId::ThreeThenOne).expect("layout");
    let blocks = vec![
        block("4", ComponentId::RecentList),
        block("3", ComponentId::PieChart),
        block("2", ComponentId::BalanceSummary),
        block("1", ComponentId::BarChart),
    ];

    let ids: Vec<Vec<&str>> = place_blocks(&blocks, layout)
        .iter()
        .map(|row| row.iter().map(|b| b.id.as_str()).collect())
        .collect();

    assert_eq!(ids, vec![vec!["4", "3", "2"], vec!["1"]]);
}

#[test]
fn too_few_blocks_is_a_count_mismatch() {
    let blocks = vec![
        BlockDraft::with_id("a", "pie-chart"),
        BlockDraft::with_id("b", "bar-chart"),
    ];
    assert_eq!(
        validate(&blocks, "two-then-one"),
        Err(TemplateError::BlockCountMismatch {
            layout: LayoutId::TwoThenOne,
            expected: 3,
            actual: 2,
        })
    );
}

#[test]
fn unknown_component_names_its_position() {
    let blocks = vec![BlockDraft::new("doesNotExist")];
    for layout in LayoutCatalog::all() {
        assert_eq!(
            validate(&blocks, layout.id.as_ref()),
            Err(TemplateError::UnknownComponent {
                position: 0,
                component_id: "doesNotExist".to_string(),
            })
        );
    }
}

#[test]
fn duplicate_block_ids_are_rejected() {
    let blocks = vec![
        BlockDraft::with_id("x", "pie-chart"),
        BlockDraft::with_id("x", "bar-chart"),
    ];
    assert_eq!(
        validate(&blocks, "side-by-side"),
        Err(TemplateError::DuplicateBlockId {
            block_id: "x".to_string(),
            first: 0,
            duplicate: 1,
        })
    );
}

#[test]
fn unknown_layout_is_reported_first() {
    assert_eq!(
        validate(&[], "bento"),
        Err(TemplateError::UnknownLayout {
            layout: "bento".to_string()
        })
    );
}

#[test]
fn validation_is_deterministic() {
    let inputs = [
        (
            vec![
                BlockDraft::with_id("a", "pie-chart"),
                BlockDraft::with_id("b", "line-chart"),
                BlockDraft::with_id("c", "wallets-list"),
            ],
            "one-then-two",
        ),
        (vec![BlockDraft::with_id("a", "pie-chart")], "grid-two-by-two"),
        (vec![BlockDraft::with_id("a", "nope")], "single"),
    ];
    for (blocks, layout) in &inputs {
        assert_eq!(validate(blocks, layout), validate(blocks, layout));
    }
}

#[test]
fn error_messages_are_actionable() {
    let err = validate(&[BlockDraft::with_id("a", "pie-chart")], "two-then-one")
        .expect_err("count mismatch");
    assert_eq!(
        err.to_string(),
        "layout `two-then-one` needs 3 blocks but 1 were given"
    );
}

#[test]
fn errors_serialize_as_tagged_diagnostics() {
    let err = TemplateError::UnknownComponent {
        position: 2,
        component_id: "radar".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&err).expect("json"),
        serde_json::json!({"kind": "unknown_component", "position": 2, "component_id": "radar"})
    );
}
