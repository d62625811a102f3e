mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

use crate::{Result, Row};

use jsonschema_field_core::{
    check::{Context, Diagnostic, Router},
    driver::{operation, Capability, Driver},
    err,
    schema::{Field, FieldTy, Model, TableId},
    value::{Input, Prepared},
    Error, JsonSchemaField, Schema,
};

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// The alias used when the router does not pick a database.
pub const DEFAULT_DB_ALIAS: &str = "default";

/// A handle to the registered models and the databases storing them.
///
/// Cloning is cheap; clones share the same connections.
#[derive(Debug, Clone)]
pub struct Db {
    schema: Arc<Schema>,
    connections: Arc<IndexMap<String, Arc<dyn Driver>>>,
    router: Arc<dyn Router>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Aliases of the registered databases, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> + '_ {
        self.connections.keys().map(String::as_str)
    }

    /// The driver registered as `alias`.
    pub fn connection(&self, alias: &str) -> Result<&Arc<dyn Driver>> {
        self.connections
            .get(alias)
            .ok_or_else(|| Error::connection_does_not_exist(alias))
    }

    /// Runs the configuration checks of every JSON schema field against the
    /// databases `databases`.
    pub async fn check(&self, databases: &[&str]) -> Result<Vec<Diagnostic>> {
        let cx = Context::new(&self.connections, &*self.router);
        let mut diagnostics = vec![];

        for model in self.schema.models() {
            for (_, field) in model.json_schema_fields() {
                diagnostics.extend(field.check(model, databases, &cx).await?);
            }
        }

        Ok(diagnostics)
    }

    /// Drops and recreates every table on every database the router allows it
    /// on.
    pub async fn reset_db(&self) -> Result<()> {
        for (alias, driver) in self.connections.iter() {
            let tables = self
                .schema
                .models()
                .filter(|model| self.router.allow_migrate_model(alias, model))
                .map(|model| TableId(model.id.0))
                .collect::<Vec<_>>();

            debug!(alias = %alias, tables = tables.len(), "resetting database");
            driver.reset_db(&self.schema, &tables).await?;
        }

        Ok(())
    }

    /// Creates a row of the model named `model` and returns its id.
    ///
    /// Fields validated in process are checked before anything is sent to
    /// the database. Fields validated in the database are only checked by
    /// its check constraint, which reports a mismatch as an integrity
    /// violation.
    pub async fn create(&self, model: &str, mut row: Row) -> Result<i64> {
        let model = self
            .schema
            .model_by_name(model)
            .ok_or_else(|| err!("unknown model `{model}`"))?;

        if let Some(name) = row.field_names().find(|name| model.field_by_name(name).is_none()) {
            return Err(err!("model `{}` has no field `{name}`", model.name));
        }

        let alias = self
            .router
            .db_for_write(model)
            .unwrap_or_else(|| DEFAULT_DB_ALIAS.to_string());
        let driver = self.connection(&alias)?;
        let capability = driver.capability();

        let table = self.schema.table_for(model.id);
        let mut values = vec![];

        for (index, field) in model.fields.iter().enumerate() {
            let input = match row.take(&field.name) {
                Some(input) => Some(input.map_err(|err| err.context(field_context(model, field)))?),
                None => default_for(field),
            };

            let Some(input) = input else {
                continue;
            };

            let prepared = prepare(field, input, capability)
                .map_err(|err| err.context(field_context(model, field)))?;

            values.push((table.columns[index].id, prepared));
        }

        let op = operation::Insert {
            table: table.id,
            values,
            returning: table.primary_key_column().map(|column| column.id),
        };

        debug!(model = %model.name, alias = %alias, "creating row");

        driver
            .exec(&self.schema, op.into())
            .await?
            .rows
            .into_id()
    }
}

/// The value a field takes when the row leaves it unset. `None` leaves the
/// column out of the statement.
fn default_for(field: &Field) -> Option<Input> {
    match &field.ty {
        FieldTy::Id => None,
        FieldTy::Text { .. } => None,
        FieldTy::JsonSchema(json) => Some(Input::Value(
            json.default()
                .map(|default| default.resolve())
                .unwrap_or(Value::Null),
        )),
    }
}

fn prepare(field: &Field, input: Input, capability: &Capability) -> Result<Prepared> {
    match &field.ty {
        FieldTy::Id => match input {
            Input::Value(Value::Number(n)) => n
                .as_i64()
                .map(Prepared::I64)
                .ok_or_else(|| err!("expected an integer id, got {n}")),
            Input::Value(value) => Err(err!("expected an integer id, got {value}")),
            Input::Expr(expr) => Ok(Prepared::Expr(expr)),
        },
        FieldTy::Text { .. } => match input {
            Input::Value(Value::String(s)) => Ok(Prepared::String(s)),
            Input::Value(Value::Null) => Ok(Prepared::Null),
            Input::Value(value) => Err(err!("expected text, got {value}")),
            Input::Expr(expr) => Ok(Prepared::Expr(expr)),
        },
        FieldTy::JsonSchema(json) => prepare_json(json, input, capability),
    }
}

fn prepare_json(json: &JsonSchemaField, input: Input, capability: &Capability) -> Result<Prepared> {
    if !json.check_schema_in_db() {
        if let Some(document) = input.as_document() {
            json.validate(document)?;
        }
    }

    json.prepare_value(input, capability)
}

fn field_context(model: &Model, field: &Field) -> Error {
    err!("field `{}` of model `{}`", field.name, model.name)
}
