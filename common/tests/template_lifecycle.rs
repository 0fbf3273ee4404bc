use common::{
    BlockDraft, ComponentId, LayoutId, Template, TemplateError, TemplatePatch, TemplateRecord,
};
use pretty_assertions::assert_eq;

fn three_blocks() -> Vec<BlockDraft> {
    vec![
        BlockDraft::with_id("a", "pie-chart"),
        BlockDraft::with_id("b", "bar-chart"),
        BlockDraft::with_id("c", "recent-list"),
    ]
}

fn monthly_overview() -> Template {
    Template::create(
        "Monthly overview",
        &three_blocks(),
        "two-then-one",
        Some("user-1".to_string()),
    )
    .expect("valid template")
}

#[test]
fn create_assigns_identity_and_starts_live() {
    let first = monthly_overview();
    let second = monthly_overview();

    assert_ne!(first.id(), second.id());
    assert_eq!(first.name(), "Monthly overview");
    assert_eq!(first.layout(), LayoutId::TwoThenOne);
    assert_eq!(first.user_id(), Some("user-1"));
    assert!(!first.is_deleted());
    assert_eq!(first.blocks().len(), 3);
}

#[test]
fn create_without_owner_is_shared() {
    let template = Template::create(
        "Shared",
        &[BlockDraft::from(ComponentId::BalanceSummary)],
        "single",
        None,
    )
    .expect("valid");
    assert_eq!(template.blocks()[0].component_id, ComponentId::BalanceSummary);
    assert_eq!(template.user_id(), None);
}

#[test]
fn create_rejects_blank_names() {
    assert_eq!(
        Template::create("   ", &three_blocks(), "two-then-one", None),
        Err(TemplateError::EmptyName)
    );
}

#[test]
fn create_runs_the_validator() {
    assert_eq!(
        Template::create("Broken", &three_blocks(), "grid-two-by-two", None),
        Err(TemplateError::BlockCountMismatch {
            layout: LayoutId::GridTwoByTwo,
            expected: 4,
            actual: 3,
        })
    );
}

#[test]
fn layout_only_update_is_checked_against_existing_blocks() {
    let template = monthly_overview();
    let before = template.clone();

    let result = template.update(TemplatePatch {
        layout: Some("grid-two-by-two".to_string()),
        ..TemplatePatch::default()
    });

    assert_eq!(
        result,
        Err(TemplateError::BlockCountMismatch {
            layout: LayoutId::GridTwoByTwo,
            expected: 4,
            actual: 3,
        })
    );
    assert_eq!(template, before);
    assert_eq!(template.layout(), LayoutId::TwoThenOne);
    assert_eq!(template.blocks().len(), 3);
}

#[test]
fn layout_and_blocks_change_together() {
    let template = monthly_overview();
    let mut blocks = three_blocks();
    blocks.push(BlockDraft::with_id("d", "wallets-list"));

    let updated = template
        .update(TemplatePatch {
            blocks: Some(blocks),
            layout: Some("grid-two-by-two".to_string()),
            ..TemplatePatch::default()
        })
        .expect("consistent patch");

    assert_eq!(updated.layout(), LayoutId::GridTwoByTwo);
    assert_eq!(updated.blocks().len(), 4);
    assert_eq!(updated.id(), template.id());
    assert_eq!(updated.created_at(), template.created_at());
    assert_eq!(updated.user_id(), template.user_id());
}

#[test]
fn layout_swap_with_same_slot_count_keeps_blocks() {
    let template = monthly_overview();
    let updated = template
        .update(TemplatePatch {
            layout: Some("three-rows".to_string()),
            ..TemplatePatch::default()
        })
        .expect("same slot count");

    assert_eq!(updated.blocks(), template.blocks());
    let row_lengths: Vec<usize> = updated.rows().iter().map(|row| row.len()).collect();
    assert_eq!(row_lengths, vec![1, 1, 1]);
}

#[test]
fn rename_only_update_keeps_everything_else() {
    let template = monthly_overview();
    let updated = template
        .update(TemplatePatch {
            name: Some("Household".to_string()),
            ..TemplatePatch::default()
        })
        .expect("rename");

    assert_eq!(updated.name(), "Household");
    assert_eq!(updated.blocks(), template.blocks());
    assert_eq!(updated.layout(), template.layout());
}

#[test]
fn empty_patch_yields_an_equal_copy() {
    let template = monthly_overview();
    assert_eq!(template.update(TemplatePatch::default()), Ok(template.clone()));
}

#[test]
fn blocks_update_rejects_duplicates() {
    let template = monthly_overview();
    let result = template.update(TemplatePatch {
        blocks: Some(vec![
            BlockDraft::with_id("a", "pie-chart"),
            BlockDraft::with_id("b", "bar-chart"),
            BlockDraft::with_id("a", "line-chart"),
        ]),
        ..TemplatePatch::default()
    });
    assert_eq!(
        result,
        Err(TemplateError::DuplicateBlockId {
            block_id: "a".to_string(),
            first: 0,
            duplicate: 2,
        })
    );
}

#[test]
fn soft_delete_is_idempotent() {
    let once = monthly_overview().soft_delete();
    let twice = once.clone().soft_delete();

    assert!(once.is_deleted());
    assert_eq!(once, twice);
}

#[test]
fn rows_follow_the_layout_structure() {
    let template = monthly_overview();
    let rows: Vec<Vec<ComponentId>> = template
        .rows()
        .iter()
        .map(|row| row.iter().map(|b| b.component_id).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec![ComponentId::PieChart, ComponentId::BarChart],
            vec![ComponentId::RecentList],
        ]
    );
}

#[test]
fn json_round_trip_revalidates() {
    let template = monthly_overview().soft_delete();
    let json = serde_json::to_string(&template).expect("serialize");
    let decoded: Template = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, template);
}

#[test]
fn inconsistent_records_cannot_be_restored() {
    let mut record = TemplateRecord::from(monthly_overview());
    record.layout = "single".to_string();

    assert_eq!(
        Template::restore(record.clone()),
        Err(TemplateError::BlockCountMismatch {
            layout: LayoutId::Single,
            expected: 1,
            actual: 3,
        })
    );

    let json = serde_json::to_string(&record).expect("serialize");
    assert!(serde_json::from_str::<Template>(&json).is_err());
}
