use super::{TableId, Type};
use crate::value::FieldKind;

use serde_json::Value;
use std::{fmt, sync::Arc};

#[derive(Debug, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the schema.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// The kind of field stored in the column.
    pub kind: FieldKind,

    /// The database storage type of the column. When `None`, the driver's
    /// default storage type for `kind` is used.
    pub storage_ty: Option<Type>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    /// Database-side check applied to every written value.
    pub check: Option<ColumnCheck>,
}

/// A check constraint attached to a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnCheck {
    /// `jsonb_matches_schema(<schema>, <column>)`, provided by the
    /// `pg_jsonschema` extension.
    JsonbMatchesSchema(Arc<Value>),
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl Column {
    /// The storage type of the column on a database with the given storage
    /// types.
    pub fn storage_ty(&self, db: &crate::driver::StorageTypes) -> crate::Result<Type> {
        Type::from_app(self.kind, self.storage_ty.as_ref(), db)
    }
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
