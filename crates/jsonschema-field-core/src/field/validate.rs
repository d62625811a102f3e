use super::JsonSchemaField;
use crate::{Error, Result};

use serde_json::Value;

impl JsonSchemaField {
    /// Validates a value before it is written.
    ///
    /// The value is checked against the schema first, then against the rules
    /// shared by every JSON column: no `null` unless the field is nullable,
    /// no empty document unless it is blank. A `null` on a nullable field is
    /// accepted without consulting the schema.
    pub fn validate(&self, value: &Value) -> Result<()> {
        if value.is_null() && self.nullable {
            return Ok(());
        }

        self.validate_schema(value)?;

        if value.is_null() {
            return Err(Error::validation(
                "null",
                value.clone(),
                vec!["This field cannot be null.".to_string()],
            ));
        }

        if !self.blank && is_empty_value(value) {
            return Err(Error::validation(
                "blank",
                value.clone(),
                vec!["This field cannot be blank.".to_string()],
            ));
        }

        Ok(())
    }

    /// Runs the compiled validator alone.
    pub fn validate_schema(&self, value: &Value) -> Result<()> {
        let messages = self
            .validator
            .iter_errors(value)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(Error::validation("schema_mismatch", value.clone(), messages))
        }
    }

    /// Parses a stored document. SQL `NULL` reads as `null`.
    pub fn from_db_value(&self, text: Option<&str>) -> Result<Value> {
        let Some(text) = text else {
            return Ok(Value::Null);
        };

        serde_json::from_str(text).map_err(|err| {
            Error::validation(
                "invalid",
                Value::String(text.to_string()),
                vec![format!("Value must be valid JSON: {err}")],
            )
        })
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
