use super::JsonSchemaField;
use crate::{
    driver::Capability,
    value::{to_json, Expr, FieldKind, Input, Prepared},
    Error, Result,
};

use serde::Serialize;

impl JsonSchemaField {
    /// Converts a value about to be written into what the driver binds.
    ///
    /// A literal bound to a JSON field is unwrapped and encoded. Any other
    /// expression passes through untouched, so SQL defaults are not encoded a
    /// second time. Plain values are encoded through the driver's native JSON
    /// adapter when it has one, or as JSON text otherwise. A JSON `null`
    /// becomes SQL `NULL`. NaN and infinite floats are a serialization
    /// error.
    pub fn prepare_value<T: Serialize>(
        &self,
        input: Input<T>,
        capability: &Capability,
    ) -> Result<Prepared> {
        match input {
            Input::Expr(Expr::Literal(literal)) if literal.output == FieldKind::Json => {
                encode(&literal.value, capability)
            }
            Input::Expr(expr) => Ok(Prepared::Expr(expr)),
            Input::Value(value) => encode(&value, capability),
        }
    }
}

fn encode<T: Serialize + ?Sized>(value: &T, capability: &Capability) -> Result<Prepared> {
    let value = to_json(value)?;

    if value.is_null() {
        return Ok(Prepared::Null);
    }

    if capability.native_json {
        Ok(Prepared::Json(value))
    } else {
        serde_json::to_string(&value)
            .map(Prepared::JsonText)
            .map_err(Error::serialization)
    }
}
