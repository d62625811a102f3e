use crate::{
    value::{to_json, Input},
    Expr, Result,
};

use indexmap::IndexMap;
use serde::Serialize;

/// Field values for a row about to be created, keyed by field name.
///
/// Fields that are not set take their default. Values are serialized when
/// they are set; a serialization failure is reported when the row is
/// written.
#[derive(Debug, Clone, Default)]
pub struct Row {
    values: IndexMap<String, Result<Input>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field to a plain value.
    pub fn set(mut self, field: impl Into<String>, value: impl Serialize) -> Self {
        let value = to_json(&value).map(Input::Value);

        self.values.insert(field.into(), value);
        self
    }

    /// Sets a field to an expression, e.g. raw SQL.
    pub fn set_expr(mut self, field: impl Into<String>, expr: impl Into<Expr>) -> Self {
        self.values.insert(field.into(), Ok(Input::Expr(expr.into())));
        self
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub(crate) fn take(&mut self, field: &str) -> Option<Result<Input>> {
        self.values.shift_remove(field)
    }

    pub(crate) fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }
}
