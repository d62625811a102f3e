use jsonschema_field::{
    driver::{operation::Insert, Operation},
    value::Prepared,
    Db, FieldDefault, FieldTy, JsonSchemaField, Model, RawSql, Row,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tests::{DriverOp, LoggingDriver};

fn person_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "optional": {"type": "number"}
        },
        "required": ["name"]
    })
}

fn document(field: JsonSchemaField) -> Model {
    Model::new("Document")
        .field("id", FieldTy::Id)
        .field("data", field)
}

fn python_field() -> JsonSchemaField {
    JsonSchemaField::builder()
        .schema(person_schema())
        .check_schema_in_db(false)
        .build()
        .unwrap()
}

fn setup(model: Model, driver: LoggingDriver) -> (Db, Arc<Mutex<Vec<DriverOp>>>) {
    tests::init_tracing();

    let log = driver.ops_log_handle();
    let db = tests::models([model])
        .database("default", driver)
        .build()
        .unwrap();

    (db, log)
}

fn inserts(log: &Mutex<Vec<DriverOp>>) -> Vec<Insert> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|op| match &op.operation {
            Operation::Insert(insert) => Some(insert.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn object_required() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    let id = db
        .create("Document", Row::new().set("data", json!({"name": "hello"})))
        .await
        .unwrap();

    assert_eq!(id, 1);

    let inserts = inserts(&log);
    assert_eq!(inserts.len(), 1);
    assert_eq!(
        inserts[0].values[0].1,
        Prepared::Json(json!({"name": "hello"}))
    );
}

#[tokio::test]
async fn object_optional() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    db.create(
        "Document",
        Row::new().set("data", json!({"name": "hello", "optional": 1})),
    )
    .await
    .unwrap();

    assert_eq!(inserts(&log).len(), 1);
}

#[tokio::test]
async fn object_missing_never_reaches_database() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    let err = db
        .create("Document", Row::new().set("data", json!({})))
        .await
        .unwrap_err();

    assert!(err.is_validation(), "{err}");
    assert_eq!(err.validation_code(), Some("schema_mismatch"));
    assert!(err.to_string().starts_with("field `data` of model `Document`"));
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn object_mistyped_never_reaches_database() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    let err = db
        .create(
            "Document",
            Row::new().set("data", json!({"name": "hello", "optional": "string"})),
        )
        .await
        .unwrap_err();

    assert_eq!(err.validation_code(), Some("schema_mismatch"));
    assert_eq!(
        err.validation_value(),
        Some(&json!({"name": "hello", "optional": "string"}))
    );
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn typed_rows_are_serialized() {
    #[derive(serde::Serialize)]
    struct Person {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        optional: Option<f64>,
    }

    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    db.create(
        "Document",
        Row::new().set(
            "data",
            Person {
                name: "hello".to_string(),
                optional: None,
            },
        ),
    )
    .await
    .unwrap();

    db.create(
        "Document",
        Row::new().set(
            "data",
            Person {
                name: "hello".to_string(),
                optional: Some(1.5),
            },
        ),
    )
    .await
    .unwrap();

    let inserts = inserts(&log);
    assert_eq!(inserts[0].values[0].1, Prepared::Json(json!({"name": "hello"})));
    assert_eq!(
        inserts[1].values[0].1,
        Prepared::Json(json!({"name": "hello", "optional": 1.5}))
    );
}

#[tokio::test]
async fn non_finite_floats_never_reach_database() {
    let field = JsonSchemaField::builder()
        .schema(json!({
            "type": "object",
            "properties": {"score": {"type": "number"}},
            "required": ["score"]
        }))
        .check_schema_in_db(false)
        .nullable(true)
        .build()
        .unwrap();

    let (db, log) = setup(document(field), LoggingDriver::postgresql());

    let err = db
        .create("Document", Row::new().set("data", f64::NAN))
        .await
        .unwrap_err();
    assert!(err.is_serialization(), "{err}");

    let err = db
        .create(
            "Document",
            Row::new().set("data", std::collections::HashMap::from([("score", f64::INFINITY)])),
        )
        .await
        .unwrap_err();
    assert!(err.is_serialization(), "{err}");

    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unset_field_takes_callable_default() {
    let field = JsonSchemaField::builder()
        .schema(json!({"type": "object"}))
        .check_schema_in_db(false)
        .blank(true)
        .default_value(FieldDefault::empty_object())
        .build()
        .unwrap();

    let (db, log) = setup(document(field), LoggingDriver::postgresql());

    db.create("Document", Row::new()).await.unwrap();

    assert_eq!(inserts(&log)[0].values[0].1, Prepared::Json(json!({})));
}

#[tokio::test]
async fn unset_field_without_default_is_null() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    let err = db.create("Document", Row::new()).await.unwrap_err();

    assert!(err.is_validation());
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn nullable_field_accepts_null() {
    let field = JsonSchemaField::builder()
        .schema(person_schema())
        .check_schema_in_db(false)
        .nullable(true)
        .build()
        .unwrap();

    let (db, log) = setup(document(field), LoggingDriver::postgresql());

    db.create("Document", Row::new().set("data", Value::Null))
        .await
        .unwrap();

    assert_eq!(inserts(&log)[0].values[0].1, Prepared::Null);
}

#[tokio::test]
async fn raw_sql_is_not_validated() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    db.create(
        "Document",
        Row::new().set_expr("data", RawSql::new(r#"'{"name": "sql"}'::jsonb"#)),
    )
    .await
    .unwrap();

    assert_eq!(
        inserts(&log)[0].values[0].1,
        Prepared::Expr(RawSql::new(r#"'{"name": "sql"}'::jsonb"#).into())
    );
}

#[tokio::test]
async fn text_fallback_without_native_json() {
    let driver = LoggingDriver::new(&jsonschema_field::driver::Capability::SQLITE);
    let (db, log) = setup(document(python_field()), driver);

    db.create("Document", Row::new().set("data", json!({"name": "hello"})))
        .await
        .unwrap();

    assert_eq!(
        inserts(&log)[0].values[0].1,
        Prepared::JsonText(r#"{"name":"hello"}"#.to_string())
    );
}

#[tokio::test]
async fn unknown_field() {
    let (db, log) = setup(document(python_field()), LoggingDriver::postgresql());

    let err = db
        .create("Document", Row::new().set("payload", json!({"name": "hello"})))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "model `Document` has no field `payload`");
    assert!(log.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_model() {
    let (db, _log) = setup(document(python_field()), LoggingDriver::postgresql());

    let err = db.create("Person", Row::new()).await.unwrap_err();
    assert_eq!(err.to_string(), "unknown model `Person`");
}
