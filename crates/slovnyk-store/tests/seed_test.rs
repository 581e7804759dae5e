// Integration tests for first-run bootstrap
// Initializing an empty store creates the schema and the fixed sample data;
// repeating initialization must not duplicate anything.

use slovnyk_store::SqliteGateway;
use tempfile::TempDir;

fn gateway(dir: &TempDir) -> SqliteGateway {
    SqliteGateway::new(dir.path().join("slovnyk.db"))
}

#[test]
fn test_first_initialization_seeds_sample_data() {
    let dir = TempDir::new().unwrap();
    let gateway = gateway(&dir);
    gateway.initialize().unwrap();

    let dicts = gateway.list_dictionaries().unwrap();
    assert_eq!(dicts.len(), 2);

    let countries = &dicts[0];
    assert_eq!(countries.name, "Країни");
    assert_eq!(countries.code, "COUNTRIES");
    assert_eq!(countries.parent_id, None);
    assert_eq!(countries.description, Some("Список країн.".to_string()));

    let languages = &dicts[1];
    assert_eq!(languages.name, "Мови");
    assert_eq!(languages.code, "LANGUAGES");
    assert_eq!(languages.parent_id, Some(countries.id));

    let country_items = gateway.list_items(countries.id).unwrap();
    let codes_names: Vec<(&str, &str)> = country_items
        .iter()
        .map(|it| (it.code.as_str(), it.name.as_str()))
        .collect();
    assert_eq!(codes_names, vec![("UA", "Україна"), ("PL", "Польща")]);

    let language_items = gateway.list_items(languages.id).unwrap();
    let codes_names: Vec<(&str, &str)> = language_items
        .iter()
        .map(|it| (it.code.as_str(), it.name.as_str()))
        .collect();
    assert_eq!(
        codes_names,
        vec![
            ("UA", "Українська"),
            ("EN", "Англійська"),
            ("JP", "Японська"),
        ]
    );
}

#[test]
fn test_reinitialization_does_not_duplicate() {
    let dir = TempDir::new().unwrap();
    let gateway = gateway(&dir);

    gateway.initialize().unwrap();
    gateway.initialize().unwrap();

    let dicts = gateway.list_dictionaries().unwrap();
    assert_eq!(dicts.len(), 2);

    let total_items: usize = dicts
        .iter()
        .map(|d| gateway.list_items(d.id).unwrap().len())
        .sum();
    assert_eq!(total_items, 5);
}

#[test]
fn test_initialize_survives_user_deleting_seed_rows() {
    let dir = TempDir::new().unwrap();
    let gateway = gateway(&dir);
    gateway.initialize().unwrap();

    // Remove the nested dictionary, then the root; re-init must not resurrect them
    let dicts = gateway.list_dictionaries().unwrap();
    gateway.delete_dictionary(dicts[1].id).unwrap();
    gateway.delete_dictionary(dicts[0].id).unwrap();

    gateway.initialize().unwrap();
    assert!(gateway.list_dictionaries().unwrap().is_empty());
}
