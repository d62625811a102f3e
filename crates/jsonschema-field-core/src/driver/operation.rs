mod insert;
pub use insert::Insert;

use crate::schema::TableId;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Create a table, including any JSON schema check constraints.
    CreateTable(TableId),

    /// Drop a table.
    DropTable { table: TableId, if_exists: bool },

    /// Insert a single row.
    Insert(Insert),
}

impl Operation {
    pub fn drop_table(table: TableId) -> Self {
        Self::DropTable {
            table,
            if_exists: false,
        }
    }

    pub fn drop_table_if_exists(table: TableId) -> Self {
        Self::DropTable {
            table,
            if_exists: true,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert(_))
    }
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
