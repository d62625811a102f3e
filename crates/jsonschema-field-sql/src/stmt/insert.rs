use super::*;

use jsonschema_field_core::{driver::operation, value::Prepared, Schema};

/// A single-row `INSERT`.
#[derive(Debug, Clone)]
pub struct Insert {
    pub table: Name,

    /// Column names, in the order of `values`
    pub columns: Vec<String>,

    pub values: Vec<Prepared>,

    /// Column returned after the insert.
    pub returning: Option<String>,
}

impl Statement {
    /// Builds the `INSERT` for a prepared row.
    pub fn insert(schema: &Schema, op: &operation::Insert) -> Self {
        let table = schema.table(op.table);

        let (columns, values) = op
            .values
            .iter()
            .map(|(id, value)| (table.column(*id).name.clone(), value.clone()))
            .unzip();

        Insert {
            table: Name::from(&table.name),
            columns,
            values,
            returning: op.returning.map(|id| table.column(id).name.clone()),
        }
        .into()
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
