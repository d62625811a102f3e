use crate::{
    schema::{ColumnId, TableId},
    value::Prepared,
};

#[derive(Debug, Clone)]
pub struct Insert {
    /// The table receiving the row.
    pub table: TableId,

    /// Column values, already prepared for the driver.
    pub values: Vec<(ColumnId, Prepared)>,

    /// Column to return, usually the auto-incremented primary key.
    pub returning: Option<ColumnId>,
}
