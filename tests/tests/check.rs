use jsonschema_field::{
    check::{EXTENSION_MISSING, JSON_NOT_SUPPORTED, MUTABLE_DEFAULT, NOT_POSTGRESQL},
    driver::Capability,
    Db, FieldDefault, FieldTy, JsonSchemaField, Level, Model, Router,
};
use serde_json::json;
use tests::LoggingDriver;

fn document(check_schema_in_db: bool) -> Model {
    let data = JsonSchemaField::builder()
        .schema(json!({"type": "object"}))
        .check_schema_in_db(check_schema_in_db)
        .build()
        .unwrap();

    Model::new("Document")
        .field("id", FieldTy::Id)
        .field("data", data)
}

fn db(model: Model, driver: LoggingDriver) -> Db {
    tests::init_tracing();

    tests::models([model])
        .database("default", driver)
        .build()
        .unwrap()
}

fn ids(diagnostics: &[jsonschema_field::Diagnostic]) -> Vec<&'static str> {
    diagnostics.iter().map(|diagnostic| diagnostic.id).collect()
}

#[tokio::test]
async fn postgresql_with_extension() {
    let db = db(document(true), LoggingDriver::postgresql());

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[tokio::test]
async fn postgresql_without_extension() {
    let db = db(document(true), LoggingDriver::new(&Capability::POSTGRESQL));

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert_eq!(ids(&diagnostics), [EXTENSION_MISSING]);
    assert_eq!(diagnostics[0].level, Level::Error);
    assert_eq!(diagnostics[0].obj, "Document");
    assert!(diagnostics[0].hint.is_some());
}

#[tokio::test]
async fn other_extension_installed() {
    let driver = LoggingDriver::new(&Capability::POSTGRESQL).with_extension("pg_trgm", "1.6");
    let db = db(document(true), driver);

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert_eq!(ids(&diagnostics), [EXTENSION_MISSING]);
}

#[tokio::test]
async fn python_mode_skips_extension_check() {
    let db = db(document(false), LoggingDriver::new(&Capability::SQLITE));

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[tokio::test]
async fn database_mode_on_sqlite() {
    let db = db(document(true), LoggingDriver::new(&Capability::SQLITE));

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert_eq!(ids(&diagnostics), [NOT_POSTGRESQL]);
    assert_eq!(diagnostics[0].message, "Database is not PostgreSQL");
}

#[tokio::test]
async fn database_without_json_support() {
    let db = db(document(true), LoggingDriver::new(&Capability::DYNAMODB));

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert_eq!(ids(&diagnostics), [JSON_NOT_SUPPORTED, NOT_POSTGRESQL]);
    assert_eq!(
        diagnostics[0].message,
        "DynamoDB does not support JSONFields."
    );
    assert!(diagnostics.iter().all(|diagnostic| diagnostic.is_serious()));
}

#[tokio::test]
async fn every_requested_database_is_checked() {
    tests::init_tracing();

    let db = tests::models([document(true)])
        .database("default", LoggingDriver::postgresql())
        .database("legacy", LoggingDriver::new(&Capability::MYSQL))
        .database("cache", LoggingDriver::new(&Capability::POSTGRESQL))
        .build()
        .unwrap();

    let diagnostics = db.check(&["default", "legacy", "cache"]).await.unwrap();
    assert_eq!(ids(&diagnostics), [NOT_POSTGRESQL, EXTENSION_MISSING]);

    let diagnostics = db.check(&["default"]).await.unwrap();
    assert!(diagnostics.is_empty());

    let diagnostics = db.check(&[]).await.unwrap();
    assert!(diagnostics.is_empty());
}

#[tokio::test]
async fn router_excludes_database() {
    #[derive(Debug)]
    struct DefaultOnly;

    impl Router for DefaultOnly {
        fn allow_migrate_model(&self, alias: &str, _model: &Model) -> bool {
            alias == "default"
        }
    }

    tests::init_tracing();

    let db = tests::models([document(true)])
        .database("default", LoggingDriver::postgresql())
        .database("legacy", LoggingDriver::new(&Capability::DYNAMODB))
        .router(DefaultOnly)
        .build()
        .unwrap();

    let diagnostics = db.check(&["default", "legacy"]).await.unwrap();
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
}

#[tokio::test]
async fn unknown_database() {
    let db = db(document(true), LoggingDriver::postgresql());

    let err = db.check(&["replica"]).await.unwrap_err();
    assert!(err.is_connection_does_not_exist());
}

#[tokio::test]
async fn shared_default_warns() {
    let data = JsonSchemaField::builder()
        .schema(json!({"type": "object"}))
        .blank(true)
        .default_value(FieldDefault::Value(json!({})))
        .build()
        .unwrap();

    let model = Model::new("Document")
        .field("id", FieldTy::Id)
        .field("data", data);

    let db = db(model, LoggingDriver::postgresql());

    let diagnostics = db.check(&[]).await.unwrap();
    assert_eq!(ids(&diagnostics), [MUTABLE_DEFAULT]);
    assert_eq!(diagnostics[0].level, Level::Warning);
    assert!(!diagnostics[0].is_serious());
}

#[tokio::test]
async fn callable_default_is_quiet() {
    let data = JsonSchemaField::builder()
        .schema(json!({"type": "object"}))
        .blank(true)
        .default_value(FieldDefault::empty_object())
        .build()
        .unwrap();

    let model = Model::new("Document")
        .field("id", FieldTy::Id)
        .field("data", data);

    let db = db(model, LoggingDriver::postgresql());

    assert!(db.check(&["default"]).await.unwrap().is_empty());
}
