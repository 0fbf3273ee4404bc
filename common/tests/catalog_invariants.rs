use common::{
    ComponentCategory, ComponentId, ComponentRegistry, LayoutCatalog, LayoutId,
};
use pretty_assertions::assert_eq;
use strum::IntoEnumIterator;

#[test]
fn every_shipped_layout_satisfies_the_structure_rule() {
    for layout in LayoutCatalog::all() {
        assert_eq!(layout.check(), Ok(()), "layout {}", layout.id);
        assert_eq!(layout.structure.iter().sum::<usize>(), layout.total_blocks);
        assert_eq!(layout.structure.len(), layout.rows);
    }
}

#[test]
fn every_layout_id_has_exactly_one_definition() {
    for id in LayoutId::iter() {
        let matches = LayoutCatalog::all().iter().filter(|l| l.id == id).count();
        assert_eq!(matches, 1, "layout {id}");
        assert_eq!(LayoutCatalog::get(id).map(|l| l.id), Some(id));
    }
}

#[test]
fn layout_lookup_by_wire_id() {
    let layout = LayoutCatalog::find("two-then-one").expect("known layout");
    assert_eq!(layout.structure, &[2usize, 1]);
    assert_eq!(layout.total_blocks, 3);
    assert!(LayoutCatalog::find("TwoThenOne").is_none());
    assert!(LayoutCatalog::find("").is_none());
}

#[test]
fn component_get_returns_matching_metadata() {
    for id in ComponentId::iter() {
        let meta = ComponentRegistry::get(id).expect("every id is registered");
        assert_eq!(meta.id, id);
        assert_eq!(ComponentRegistry::find(id.as_ref()).map(|m| m.id), Some(id));
    }
}

#[test]
fn component_find_rejects_ids_outside_the_enumeration() {
    for raw in ["doesNotExist", "pie_chart", "Pie-Chart", " pie-chart", ""] {
        assert!(ComponentRegistry::find(raw).is_none(), "{raw:?}");
    }
}

#[test]
fn list_by_category_keeps_first_seen_and_declaration_order() {
    let groups = ComponentRegistry::list_by_category();
    let shape: Vec<(ComponentCategory, Vec<ComponentId>)> = groups
        .iter()
        .map(|g| (g.category, g.components.iter().map(|m| m.id).collect()))
        .collect();

    assert_eq!(
        shape,
        vec![
            (
                ComponentCategory::Charts,
                vec![
                    ComponentId::PieChart,
                    ComponentId::BarChart,
                    ComponentId::LineChart
                ]
            ),
            (
                ComponentCategory::Lists,
                vec![
                    ComponentId::RecentList,
                    ComponentId::WalletsList,
                    ComponentId::TopExpensesList
                ]
            ),
            (ComponentCategory::Summary, vec![ComponentId::BalanceSummary]),
        ]
    );
}

#[test]
fn list_by_category_is_deterministic_and_complete() {
    let first = ComponentRegistry::list_by_category();
    assert_eq!(first, ComponentRegistry::list_by_category());

    let total: usize = first.iter().map(|g| g.components.len()).sum();
    assert_eq!(total, ComponentRegistry::all().len());
}

#[test]
fn catalog_serializes_with_wire_ids() {
    let json = serde_json::to_value(LayoutCatalog::get(LayoutId::GridTwoByTwo)).expect("json");
    assert_eq!(json["id"], "grid-two-by-two");
    assert_eq!(json["totalBlocks"], 4);
    assert_eq!(json["structure"], serde_json::json!([2, 2]));

    let json = serde_json::to_value(ComponentRegistry::get(ComponentId::RecentList)).expect("json");
    assert_eq!(json["id"], "recent-list");
    assert_eq!(json["category"], "Lists");
}
