use super::*;

use jsonschema_field_core::{driver::StorageTypes, schema::Table, Result};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions, including their check constraints
    pub columns: Vec<ColumnDef>,
}

impl Statement {
    /// Creates a table with the storage types of the target database.
    ///
    /// Fails when a column's kind has no storage type on that database.
    pub fn create_table(table: &Table, storage_types: &StorageTypes) -> Result<Self> {
        let columns = table
            .columns
            .iter()
            .map(|column| ColumnDef::from_schema(column, storage_types))
            .collect::<Result<_>>()?;

        Ok(CreateTable {
            name: Name::from(&table.name),
            columns,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
