use rust_decimal_macros::dec;
use std::time::{Duration, Instant};

use seller_econ_core::catalog::{
    defaults::default_products, import_records, install_external, load_catalog, search, Catalog,
    BundledSource, ImportFormat, MemoryStore, NoBundledData, ProductRecord, ProductStore,
    SearchDebouncer, SheetRow, StoreKey, Warehouse,
};
use seller_econ_core::SellerEconError;

/// Bundled data stub with a configurable pair of artefacts.
#[derive(Default)]
struct StubSource {
    list: Option<Vec<ProductRecord>>,
    rows: Option<Vec<SheetRow>>,
}

impl BundledSource for StubSource {
    fn product_list(&self) -> Option<Vec<ProductRecord>> {
        self.list.clone()
    }

    fn sheet_rows(&self) -> Option<Vec<SheetRow>> {
        self.rows.clone()
    }
}

fn record(name: &str, commission: rust_decimal::Decimal) -> ProductRecord {
    ProductRecord::new(name, commission, Warehouse::Fbo, "")
}

// ===========================================================================
// Loader precedence
// ===========================================================================

#[test]
fn test_bundled_list_wins_and_is_persisted() {
    let store = MemoryStore::new();
    let source = StubSource {
        list: Some(vec![record("Самовар", dec!(12))]),
        rows: Some(vec![SheetRow::Cells(vec![
            "x".into(),
            "Чайник".into(),
            "14".into(),
        ])]),
    };

    let catalog = load_catalog(&store, &source);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].name, "Самовар");

    // The winning source replaced the external layer.
    let external = store.read(StoreKey::External).unwrap().unwrap();
    assert_eq!(external[0].name, "Самовар");
}

#[test]
fn test_bundled_sheet_is_normalized_when_no_list() {
    let store = MemoryStore::new();
    let source = StubSource {
        list: None,
        rows: Some(vec![
            SheetRow::Cells(vec!["x".into(), "Чайник".into(), "14".into()]),
            SheetRow::Cells(vec!["x".into(), "".into(), "9".into()]),
        ]),
    };

    let catalog = load_catalog(&store, &source);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].name, "Чайник");
    assert_eq!(catalog.records()[0].commission_percent, dec!(14));
    assert!(store.read(StoreKey::External).unwrap().is_some());
}

#[test]
fn test_persisted_external_layer_is_third() {
    let store = MemoryStore::new();
    store
        .write(StoreKey::External, &[record("Самовар", dec!(12))])
        .unwrap();
    store
        .write(StoreKey::UserAdded, &[record("Термокружка", dec!(18))])
        .unwrap();

    let catalog = load_catalog(&store, &NoBundledData);
    // External replacement shadows both defaults and user additions.
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].name, "Самовар");
}

#[test]
fn test_user_additions_merge_after_defaults() {
    let store = MemoryStore::new();
    store
        .write(StoreKey::UserAdded, &[record("Термокружка", dec!(18))])
        .unwrap();

    let catalog = load_catalog(&store, &NoBundledData);
    let defaults = default_products();
    assert_eq!(catalog.len(), defaults.len() + 1);
    assert_eq!(catalog.records()[0].name, defaults[0].name);
    assert_eq!(catalog.records()[defaults.len()].name, "Термокружка");
}

#[test]
fn test_defaults_are_the_terminal_fallback() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);
    assert_eq!(catalog.len(), default_products().len());
}

#[test]
fn test_load_is_idempotent_without_writes() {
    let store = MemoryStore::new();
    store
        .write(StoreKey::UserAdded, &[record("Термокружка", dec!(18))])
        .unwrap();

    let first = load_catalog(&store, &NoBundledData);
    let second = load_catalog(&store, &NoBundledData);
    assert_eq!(first, second);
}

#[test]
fn test_empty_bundled_list_falls_through() {
    let store = MemoryStore::new();
    let source = StubSource {
        list: Some(Vec::new()),
        rows: None,
    };
    let catalog = load_catalog(&store, &source);
    assert_eq!(catalog.len(), default_products().len());
}

// ===========================================================================
// add_record
// ===========================================================================

#[test]
fn test_add_then_search_finds_the_record() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    let added = catalog
        .add_record(&store, record("Термокружка стальная", dec!(18)))
        .unwrap();
    assert!(added);

    let catalog = load_catalog(&store, &NoBundledData);
    let hits = search(&catalog, "термокружка");
    assert!(hits.iter().any(|p| p.name == "Термокружка стальная"));
}

#[test]
fn test_add_rejects_case_insensitive_duplicates() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    assert!(catalog
        .add_record(&store, record("Термокружка", dec!(18)))
        .unwrap());
    assert!(!catalog
        .add_record(&store, record("ТЕРМОКРУЖКА", dec!(20)))
        .unwrap());
}

#[test]
fn test_add_rejects_names_already_in_defaults() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);
    assert!(!catalog
        .add_record(&store, record("футболка мужская", dec!(10)))
        .unwrap());
}

#[test]
fn test_add_checks_the_layer_even_when_shadowed() {
    // An external replacement hides user additions from the snapshot, but
    // the persisted layer still rejects a same-name insert.
    let store = MemoryStore::new();
    store
        .write(StoreKey::UserAdded, &[record("Термокружка", dec!(18))])
        .unwrap();
    store
        .write(StoreKey::External, &[record("Самовар", dec!(12))])
        .unwrap();

    let catalog = load_catalog(&store, &NoBundledData);
    assert!(!catalog
        .add_record(&store, record("термокружка", dec!(20)))
        .unwrap());
}

// ===========================================================================
// import_records
// ===========================================================================

#[test]
fn test_json_import_partial_success() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    let payload = r#"[
        {"name": "Самовар", "commission": 12.5, "warehouse": "ФБО"},
        {"name": "х", "commission": 10},
        {"name": "Гиря", "commission": 0},
        {"name": "Гиря 16 кг", "commission": 150},
        {"name": "Футболка мужская", "commission": 15.5}
    ]"#;

    let outcome = import_records(&catalog, &store, payload, ImportFormat::Json).unwrap();
    // Short name, zero commission, out-of-range commission, and the
    // duplicate of a default each count as rejected.
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].name, "Самовар");
    assert_eq!(outcome.rejected, 4);

    let layer = store.read(StoreKey::UserAdded).unwrap().unwrap();
    assert_eq!(layer.len(), 1);
}

#[test]
fn test_json_import_with_localized_field_names() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    let payload =
        r#"[{"Название": "Самовар", "Комиссия": "12.5", "Склад": "ФБС", "Категория": "Кухня"}]"#;
    let outcome = import_records(&catalog, &store, payload, ImportFormat::Json).unwrap();
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].warehouse, Warehouse::Fbs);
    assert_eq!(outcome.accepted[0].category, "Кухня");
}

#[test]
fn test_malformed_json_import_is_an_error() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    let err = import_records(&catalog, &store, "{not json", ImportFormat::Json).unwrap_err();
    match err {
        SellerEconError::MalformedImport(msg) => assert!(msg.contains("JSON")),
        other => panic!("Expected MalformedImport, got {other:?}"),
    }
}

#[test]
fn test_delimited_import_validates_fields() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    let payload = "\
Самовар,12.5,ФБО,Кухня
Гиря 16 кг,abc,ФБО
Коврик туристический,18,Палатка
Термос походный,16,ФБС
слишком короткая строка
";
    let outcome =
        import_records(&catalog, &store, payload, ImportFormat::DelimitedText).unwrap();
    // Rejected: unparseable commission, unknown warehouse, short line.
    assert_eq!(outcome.rejected, 3);
    let names: Vec<&str> = outcome.accepted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Самовар", "Термос походный"]);
    assert_eq!(outcome.accepted[0].category, "Кухня");
}

#[test]
fn test_duplicates_inside_one_batch_are_rejected() {
    let store = MemoryStore::new();
    let catalog = load_catalog(&store, &NoBundledData);

    let payload = "Самовар,12.5,ФБО\nСАМОВАР,13,ФБО\n";
    let outcome =
        import_records(&catalog, &store, payload, ImportFormat::DelimitedText).unwrap();
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.rejected, 1);
}

// ===========================================================================
// install_external
// ===========================================================================

#[test]
fn test_install_external_replaces_the_layer() {
    let store = MemoryStore::new();
    store
        .write(StoreKey::External, &[record("Старый товар", dec!(10))])
        .unwrap();

    let written = install_external(
        &store,
        vec![record("Самовар", dec!(12)), record("самовар", dec!(13))],
    )
    .unwrap();
    assert_eq!(written, 1);

    let catalog = load_catalog(&store, &NoBundledData);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].commission_percent, dec!(12));
}

// ===========================================================================
// search
// ===========================================================================

fn searchable_catalog() -> Catalog {
    Catalog::new(vec![
        ProductRecord::new("Футболка мужская", dec!(15.5), Warehouse::Fbo, "Одежда"),
        ProductRecord::new("Джинсы женские", dec!(16), Warehouse::Fbo, "Одежда"),
        ProductRecord::new("Чайник электрический", dec!(14), Warehouse::Fbo, "Техника"),
    ])
}

#[test]
fn test_search_is_substring_not_prefix() {
    let catalog = searchable_catalog();
    let hits = search(&catalog, "электр");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Чайник электрический");
}

#[test]
fn test_search_matches_category_too() {
    let catalog = searchable_catalog();
    let hits = search(&catalog, "одежда");
    assert_eq!(hits.len(), 2);
}

#[test]
fn test_search_short_queries_return_empty() {
    let catalog = searchable_catalog();
    assert!(search(&catalog, "ч").is_empty());
    assert!(search(&catalog, " я ").is_empty());
    assert!(search(&catalog, "").is_empty());
}

#[test]
fn test_search_caps_results_and_preserves_order() {
    let records: Vec<ProductRecord> = (1..=15)
        .map(|i| {
            ProductRecord::new(
                &format!("Кружка №{i}"),
                dec!(15),
                Warehouse::Fbo,
                "",
            )
        })
        .collect();
    let catalog = Catalog::new(records);

    let hits = search(&catalog, "кружка");
    assert_eq!(hits.len(), 10);
    assert_eq!(hits[0].name, "Кружка №1");
    assert_eq!(hits[9].name, "Кружка №10");
}

#[test]
fn test_search_uppercase_cyrillic_query() {
    let catalog = searchable_catalog();
    let hits = search(&catalog, "ФУТБОЛКА");
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_debounced_search_takes_the_last_query() {
    let catalog = searchable_catalog();
    let mut debouncer = SearchDebouncer::default();
    let t0 = Instant::now();

    debouncer.submit("джин", t0);
    debouncer.submit("чайник", t0 + Duration::from_millis(120));

    assert_eq!(debouncer.ready(t0 + Duration::from_millis(300)), None);
    let query = debouncer.ready(t0 + Duration::from_millis(450)).unwrap();
    let hits = search(&catalog, &query);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Чайник электрический");
}
