mod column;
pub use column::{Column, ColumnCheck, ColumnId};

mod table;
pub use table::{Table, TableId};

mod ty;
pub use ty::Type;
