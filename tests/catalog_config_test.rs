use anyhow::Result;
use phone_store::utils::validation::Validate;
use phone_store::{AppError, Application, CatalogConfig, ScriptedConsole};
use tempfile::TempDir;

const TWO_STORE_CATALOG: &str = r#"
[[stores]]
city = "Город A"

[[stores.phones]]
model = "iPhone 14"
price = 999.99
kind = "smartphone"

[[stores.phones]]
model = "Google Pixel 7"
price = 699.99

[[stores]]
city = "Город B"

[[stores.phones]]
model = "Samsung Galaxy S22"
price = 899.99
"#;

#[test]
fn test_catalog_from_file_drives_session() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("stores.toml");
    std::fs::write(&config_path, TWO_STORE_CATALOG)?;

    let catalog = CatalogConfig::from_file(&config_path)?;
    catalog.validate()?;
    assert_eq!(catalog.stores.len(), 2);
    assert_eq!(catalog.stores[1].phones.len(), 1);

    let mut app = Application::new(catalog.into_stores());
    let mut console = ScriptedConsole::new(["2", "1", "5", "0"]);
    app.run(&mut console)?;

    let transcript = console.transcript();
    assert!(transcript.contains("Доступные телефоны в магазине Город B:\nSamsung Galaxy S22: 899.99"));
    assert!(!transcript.contains("iPhone 14: 999.99"));
    Ok(())
}

#[test]
fn test_env_vars_are_substituted() -> Result<()> {
    std::env::set_var("PHONE_STORE_TEST_CITY", "Город E");
    let content = r#"
[[stores]]
city = "${PHONE_STORE_TEST_CITY}"

[[stores.phones]]
model = "iPhone 14"
price = 999.99
"#;

    let catalog = CatalogConfig::from_toml_str(content)?;

    assert_eq!(catalog.stores[0].city, "Город E");
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = CatalogConfig::from_file(temp_dir.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, AppError::IoError(_)));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = CatalogConfig::from_toml_str("[[stores]]\ncity = ").unwrap_err();

    assert!(matches!(err, AppError::ConfigParseError(_)));
}

#[test]
fn test_unknown_phone_kind_is_rejected() {
    let content = r#"
[[stores]]
city = "Город A"

[[stores.phones]]
model = "Nokia 3310"
price = 49.0
kind = "featurephone"
"#;

    assert!(CatalogConfig::from_toml_str(content).is_err());
}

#[test]
fn test_validation_names_the_offending_field() -> Result<()> {
    let cases = [
        ("stores = []", "stores"),
        (
            "[[stores]]\ncity = \"  \"\n[[stores.phones]]\nmodel = \"iPhone 14\"\nprice = 1.0",
            "stores[0].city",
        ),
        ("[[stores]]\ncity = \"Город A\"\nphones = []", "stores[0].phones"),
        (
            "[[stores]]\ncity = \"Город A\"\n[[stores.phones]]\nmodel = \"\"\nprice = 1.0",
            "stores[0].phones[0].model",
        ),
        (
            "[[stores]]\ncity = \"Город A\"\n[[stores.phones]]\nmodel = \"X\"\nprice = 1.0\n[[stores.phones]]\nmodel = \"X\"\nprice = 2.0",
            "stores[0].phones.model",
        ),
    ];

    for (content, expected_field) in cases {
        let catalog = CatalogConfig::from_toml_str(content)?;
        match catalog.validate() {
            Err(AppError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, expected_field, "catalog: {}", content)
            }
            other => panic!("expected validation error for {}, got {:?}", expected_field, other),
        }
    }
    Ok(())
}
