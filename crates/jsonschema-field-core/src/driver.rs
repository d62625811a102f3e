mod capability;
pub use capability::{Capability, StorageTypes, Vendor};

mod extension;
pub use extension::Extension;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, schema::TableId, Result, Schema};

use std::{fmt::Debug, sync::Arc};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the database behind the driver. Configuration checks and
    /// value preparation read it.
    fn capability(&self) -> &'static Capability;

    /// Looks up an extension in the database's extension catalog.
    ///
    /// Returns `None` when the extension is unknown or not installed.
    /// Databases without an extension mechanism always return `None`.
    async fn installed_extension(&self, name: &str) -> Result<Option<Extension>>;

    /// Execute a database operation
    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> Result<Response>;

    /// Drops and recreates the given tables.
    async fn reset_db(&self, schema: &Arc<Schema>, tables: &[TableId]) -> Result<()> {
        for &table in tables {
            self.exec(schema, Operation::drop_table_if_exists(table)).await?;
            self.exec(schema, Operation::CreateTable(table)).await?;
        }

        Ok(())
    }
}
