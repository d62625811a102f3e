mod builder;
pub use builder::Builder;

pub mod db;
pub use db::{Column, ColumnCheck, ColumnId, Table, TableId};

mod model;
pub use model::{Field, FieldTy, Model, ModelId};

mod verify;

use crate::Result;

/// Registered models together with the tables that store them.
///
/// Models and tables are index-aligned: the model with id `ModelId(n)` is
/// stored in the table with id `TableId(n)`.
#[derive(Debug)]
pub struct Schema {
    pub models: Vec<Model>,
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Builds a schema from models, with no table name prefix.
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Schema> {
        let mut builder = Builder::new();
        for model in models {
            builder.model(model);
        }
        builder.build()
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.iter()
    }

    /// Looks up a model by name.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    #[track_caller]
    pub fn model(&self, id: ModelId) -> &Model {
        &self.models[id.0]
    }

    /// The table storing the given model.
    #[track_caller]
    pub fn table_for(&self, id: ModelId) -> &Table {
        &self.tables[id.0]
    }

    #[track_caller]
    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.0]
    }

    #[track_caller]
    pub fn column(&self, id: ColumnId) -> &Column {
        self.table(id.table).column(id)
    }
}
