use domain::{IndicatorDirection, IndicatorNode, IndicatorSystem};
use eval_catalog::{CatalogError, IndicatorCatalog, Selection, check_coverage};

const CATALOG: &str = r#"[
  {
    "id": "traction",
    "name": "牵引供电系统",
    "applicableSystems": ["牵引变电所"],
    "minPrimarySelection": 2,
    "tree": [
      {
        "id": "1",
        "name": "运行状态",
        "direction": "positive",
        "children": [
          {
            "id": "1.1",
            "name": "绕组温度",
            "unit": "℃",
            "direction": "negative",
            "rules": [
              { "label": "优", "range": [null, 60], "score": 95 },
              { "label": "良", "range": [60, 80], "score": 75 }
            ]
          },
          { "id": "1.2", "name": "负载率", "direction": "interval" }
        ]
      },
      {
        "id": "2",
        "name": "绝缘性能",
        "direction": "positive",
        "children": [
          { "id": "2.1", "name": "绝缘电阻", "direction": "positive" },
          { "id": "2.2", "name": "介损", "direction": "negative" }
        ]
      }
    ]
  },
  {
    "id": "empty",
    "name": "空体系"
  }
]"#;

fn catalog() -> IndicatorCatalog {
    IndicatorCatalog::from_json(CATALOG).expect("catalog")
}

#[test]
fn parses_systems_with_defaults() {
    let catalog = catalog();
    assert_eq!(catalog.systems().len(), 2);

    let empty = catalog.system("empty").expect("empty system");
    assert_eq!(empty.min_primary_selection, 1);
    assert!(empty.tree.is_empty());

    let traction = catalog.system("traction").expect("traction");
    assert_eq!(traction.min_primary_selection, 2);
    assert_eq!(traction.tree[0].children[0].rules.len(), 2);
}

#[test]
fn indicator_map_covers_all_levels() {
    let catalog = catalog();
    let map = catalog.indicator_map("traction");
    assert_eq!(map.len(), 6);
    assert_eq!(map["2.2"].name, "介损");
    assert!(catalog.indicator_map("missing").is_empty());
}

#[test]
fn resolve_keeps_order_and_drops_unknown() {
    let catalog = catalog();
    let ids = vec!["2.1".to_string(), "9.9".to_string(), "1.1".to_string()];
    let resolved = catalog.resolve("traction", &ids);
    let resolved_ids: Vec<&str> = resolved.iter().map(|node| node.id.as_str()).collect();
    assert_eq!(resolved_ids, vec!["2.1", "1.1"]);
}

#[test]
fn invalid_json_is_reported() {
    let err = IndicatorCatalog::from_json("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = IndicatorCatalog::load(std::path::Path::new("/nonexistent/catalog.json"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}

#[test]
fn selection_toggle_and_dedupe() {
    let mut selection = Selection::new(vec![
        "1.1".to_string(),
        "2.1".to_string(),
        "1.1".to_string(),
    ]);
    assert_eq!(selection.ids(), ["1.1", "2.1"]);

    selection.toggle("1.2", true);
    selection.toggle("1.2", true);
    selection.toggle("1.1", false);
    assert_eq!(selection.ids(), ["2.1", "1.2"]);
}

#[test]
fn switching_system_keeps_available_ids() {
    let catalog = catalog();
    let traction = catalog.system("traction").expect("traction");

    let mut selection = Selection::new(vec!["2.2".to_string(), "7.1".to_string()]);
    selection.retain_available(traction);
    assert_eq!(selection.ids(), ["2.2"]);
}

#[test]
fn switching_system_falls_back_to_first_three() {
    let catalog = catalog();
    let traction = catalog.system("traction").expect("traction");

    let mut selection = Selection::new(vec!["7.1".to_string()]);
    selection.retain_available(traction);
    assert_eq!(selection.ids(), ["1.1", "1.2", "2.1"]);
}

#[test]
fn coverage_counts_primary_groups() {
    let catalog = catalog();
    let traction = catalog.system("traction");

    let same_group = catalog.resolve("traction", &["1.1".to_string(), "1.2".to_string()]);
    let report = check_coverage(traction, &same_group);
    assert_eq!(report.distinct_groups, 1);
    assert_eq!(report.required, 2);
    assert!(!report.satisfied);

    let spread = catalog.resolve("traction", &["1.1".to_string(), "2.1".to_string()]);
    assert!(check_coverage(traction, &spread).satisfied);
}

#[test]
fn coverage_without_system_requires_one_group() {
    let node = IndicatorNode::leaf("3.1", "外观", IndicatorDirection::Positive, vec![]);
    let report = check_coverage(None, &[&node]);
    assert_eq!(report.required, 1);
    assert!(report.satisfied);

    let empty = check_coverage(None::<&IndicatorSystem>, &[]);
    assert!(!empty.satisfied);
}
