mod column_def;
pub use column_def::ColumnDef;

mod create_table;
pub use create_table::CreateTable;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod name;
pub use name::Name;

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    DropTable(DropTable),
    Insert(Insert),
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(_))
    }

    /// Returns true when executing the statement yields rows.
    pub fn returns_rows(&self) -> bool {
        matches!(self, Statement::Insert(insert) if insert.returning.is_some())
    }
}
