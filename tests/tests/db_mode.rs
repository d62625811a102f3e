use jsonschema_field::{
    driver::{operation::Insert, Capability, Operation},
    value::Prepared,
    Db, FieldTy, JsonSchemaField, Model, Router, Row,
};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tests::{DriverOp, LoggingDriver};

fn document() -> Model {
    let data = JsonSchemaField::builder()
        .schema(json!({
            "type": "object",
            "properties": {"name": {"type": "string"}},
            "required": ["name"]
        }))
        .build()
        .unwrap();

    Model::new("Document")
        .field("id", FieldTy::Id)
        .field("title", FieldTy::text())
        .field("data", data)
}

fn setup() -> (Db, Arc<Mutex<Vec<DriverOp>>>) {
    tests::init_tracing();

    let driver = LoggingDriver::postgresql();
    let log = driver.ops_log_handle();
    let db = tests::models([document()])
        .database("default", driver)
        .build()
        .unwrap();

    (db, log)
}

fn last_insert(log: &Mutex<Vec<DriverOp>>) -> Insert {
    log.lock()
        .unwrap()
        .iter()
        .rev()
        .find_map(|op| match &op.operation {
            Operation::Insert(insert) => Some(insert.clone()),
            _ => None,
        })
        .expect("no insert logged")
}

#[tokio::test]
async fn invalid_document_is_left_to_the_database() {
    let (db, log) = setup();

    let id = db
        .create(
            "Document",
            Row::new().set("title", "untitled").set("data", json!({})),
        )
        .await
        .unwrap();

    assert_eq!(id, 1);

    let insert = last_insert(&log);
    assert_eq!(insert.values.len(), 2);
    assert_eq!(insert.values[0].1, Prepared::String("untitled".to_string()));
    assert_eq!(insert.values[1].1, Prepared::Json(json!({})));
    assert!(insert.returning.is_some());
}

#[tokio::test]
async fn ids_are_returned_in_order() {
    let (db, _log) = setup();

    for expect in 1..=3 {
        let id = db
            .create(
                "Document",
                Row::new().set("title", "t").set("data", json!({"name": "x"})),
            )
            .await
            .unwrap();

        assert_eq!(id, expect);
    }
}

#[tokio::test]
async fn text_field_rejects_non_strings() {
    let (db, log) = setup();

    let err = db
        .create(
            "Document",
            Row::new().set("title", 42).set("data", json!({"name": "x"})),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "field `title` of model `Document`: expected text, got 42"
    );
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn explicit_id() {
    let (db, log) = setup();

    db.create(
        "Document",
        Row::new()
            .set("id", 7)
            .set("title", "t")
            .set("data", json!({"name": "x"})),
    )
    .await
    .unwrap();

    assert_eq!(last_insert(&log).values[0].1, Prepared::I64(7));
}

#[tokio::test]
async fn reset_db_recreates_tables() {
    let (db, log) = setup();

    db.reset_db().await.unwrap();

    let log = log.lock().unwrap();
    assert_eq!(log.len(), 2);
    assert!(matches!(
        log[0].operation,
        Operation::DropTable {
            if_exists: true,
            ..
        }
    ));
    assert!(matches!(log[1].operation, Operation::CreateTable(_)));
}

#[derive(Debug)]
struct ArchiveRouter;

impl Router for ArchiveRouter {
    fn allow_migrate_model(&self, alias: &str, _model: &Model) -> bool {
        alias == "archive"
    }

    fn db_for_write(&self, _model: &Model) -> Option<String> {
        Some("archive".to_string())
    }
}

#[tokio::test]
async fn router_picks_the_write_database() {
    tests::init_tracing();

    let default = LoggingDriver::postgresql();
    let archive = LoggingDriver::postgresql();
    let default_log = default.ops_log_handle();
    let archive_log = archive.ops_log_handle();

    let db = tests::models([document()])
        .database("default", default)
        .database("archive", archive)
        .router(ArchiveRouter)
        .build()
        .unwrap();

    db.reset_db().await.unwrap();
    db.create(
        "Document",
        Row::new().set("title", "t").set("data", json!({"name": "x"})),
    )
    .await
    .unwrap();

    assert!(default_log.lock().unwrap().is_empty());
    assert_eq!(archive_log.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn write_to_unregistered_alias() {
    #[derive(Debug)]
    struct Missing;

    impl Router for Missing {
        fn db_for_write(&self, _model: &Model) -> Option<String> {
            Some("replica".to_string())
        }
    }

    let db = tests::models([document()])
        .database("default", LoggingDriver::new(&Capability::POSTGRESQL))
        .router(Missing)
        .build()
        .unwrap();

    let err = db
        .create(
            "Document",
            Row::new().set("title", "t").set("data", json!({"name": "x"})),
        )
        .await
        .unwrap_err();

    assert!(err.is_connection_does_not_exist());
}

#[test]
fn build_without_database() {
    let err = tests::models([document()]).build().unwrap_err();

    assert!(err.is_improperly_configured());
}
