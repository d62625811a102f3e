use super::{Builder, JsonSchemaField};
use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The arguments a field was built with, in a form that can be written to a
/// migration file and read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deconstructed {
    /// Identifies the field type.
    pub path: String,

    pub kwargs: Map<String, Value>,
}

impl JsonSchemaField {
    pub const PATH: &'static str = "jsonschema_field::JsonSchemaField";

    /// Returns the arguments needed to build an equal field.
    ///
    /// `schema` and `check_schema_in_db` are always present; `null` and
    /// `blank` only when they differ from their defaults. The default value
    /// is not emitted.
    pub fn deconstruct(&self) -> Deconstructed {
        let mut kwargs = Map::new();
        kwargs.insert("schema".to_string(), (*self.schema).clone());
        kwargs.insert(
            "check_schema_in_db".to_string(),
            Value::Bool(self.check_schema_in_db),
        );

        if self.nullable {
            kwargs.insert("null".to_string(), Value::Bool(true));
        }

        if self.blank {
            kwargs.insert("blank".to_string(), Value::Bool(true));
        }

        Deconstructed {
            path: Self::PATH.to_string(),
            kwargs,
        }
    }

    /// Builds a field from dynamically typed arguments.
    ///
    /// Fails with a configuration error when `schema` is missing or empty,
    /// when a flag is not a boolean, or when an argument is unknown.
    pub fn from_args(kwargs: &Map<String, Value>) -> Result<JsonSchemaField> {
        let mut builder = Builder::default();

        for (name, value) in kwargs {
            builder = match name.as_str() {
                "schema" => builder.schema(value.clone()),
                "check_schema_in_db" => builder.check_schema_in_db(expect_bool(name, value)?),
                "null" => builder.nullable(expect_bool(name, value)?),
                "blank" => builder.blank(expect_bool(name, value)?),
                _ => {
                    return Err(Error::improperly_configured(format!(
                        "JSONSchemaField got an unexpected argument `{name}`"
                    )))
                }
            };
        }

        builder.build()
    }
}

impl Deconstructed {
    /// Rebuilds the field these arguments describe.
    pub fn reconstruct(&self) -> Result<JsonSchemaField> {
        if self.path != JsonSchemaField::PATH {
            return Err(Error::improperly_configured(format!(
                "cannot reconstruct `{}` as a JSONSchemaField",
                self.path
            )));
        }

        JsonSchemaField::from_args(&self.kwargs)
    }
}

fn expect_bool(name: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        Error::improperly_configured(format!(
            "JSONSchemaField `{name}` must be a boolean, got {value}"
        ))
    })
}
