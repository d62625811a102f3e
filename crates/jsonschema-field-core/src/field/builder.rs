use super::{compile, FieldDefault, JsonSchemaField};
use crate::{Error, Result};

use serde_json::Value;
use std::sync::Arc;

/// Configures a [`JsonSchemaField`].
#[derive(Debug, Clone)]
pub struct Builder {
    schema: Option<Value>,
    check_schema_in_db: bool,
    nullable: bool,
    blank: bool,
    default: Option<FieldDefault>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            schema: None,
            check_schema_in_db: true,
            nullable: false,
            blank: false,
            default: None,
        }
    }
}

impl Builder {
    /// The JSON Schema document values must match. Required.
    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// When `true` (the default), the schema is enforced by a `pg_jsonschema`
    /// check constraint. When `false`, values are validated in process
    /// before they are written.
    pub fn check_schema_in_db(mut self, check_schema_in_db: bool) -> Self {
        self.check_schema_in_db = check_schema_in_db;
        self
    }

    /// Allows SQL `NULL`.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Allows empty documents (`""`, `[]`, `{}`).
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// The value used when a row does not set the field.
    pub fn default_value(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self
    }

    pub fn build(self) -> Result<JsonSchemaField> {
        let schema = match self.schema {
            None | Some(Value::Null) => {
                return Err(Error::improperly_configured(
                    "JSONSchemaField requires a schema",
                ))
            }
            Some(Value::Object(map)) if map.is_empty() => {
                return Err(Error::improperly_configured(
                    "JSONSchemaField schema must not be empty",
                ))
            }
            Some(schema) => schema,
        };

        let validator = compile(&schema)?;

        Ok(JsonSchemaField {
            schema: Arc::new(schema),
            check_schema_in_db: self.check_schema_in_db,
            nullable: self.nullable,
            blank: self.blank,
            default: self.default,
            validator: Arc::new(validator),
        })
    }
}
