use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let owned: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| owned.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

// =============================================================
// StorageKeys / LibraryConfig defaults
// =============================================================

#[test]
fn storage_keys_match_historical_names() {
    let keys = StorageKeys::default();
    assert_eq!(keys.books, "bookApp_library_v2");
    assert_eq!(keys.categories, "bookApp_categories");
    assert_eq!(keys.theme, "bookApp_theme");
    assert_eq!(keys.legacy_books.as_deref(), Some("bookApp_library"));
}

#[test]
fn library_config_default_categories_in_order() {
    let config = LibraryConfig::default();
    assert_eq!(
        config.default_categories,
        vec!["Fiction", "Non-Fiction", "Sci-Fi", "Biography", "Technology"]
    );
}

#[test]
fn library_config_defaults_to_dark_and_seeding() {
    let config = LibraryConfig::default();
    assert_eq!(config.default_theme, Theme::Dark);
    assert!(config.seed_when_empty);
    assert_eq!(config.placeholder_cover, PLACEHOLDER_COVER_URL);
}

// =============================================================
// ServerConfig
// =============================================================

#[test]
fn server_config_defaults_port() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn server_config_reads_port() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn server_config_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::Invalid {
            key: "PORT",
            value: "eighty".to_owned()
        }
    );
}
