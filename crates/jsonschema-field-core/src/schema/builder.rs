use super::{
    db::{self, Column, ColumnCheck, ColumnId, Table, TableId},
    FieldTy, Model, ModelId, Result, Schema,
};
use crate::value::FieldKind;

use tracing::debug;

#[derive(Debug, Default)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,

    /// Models, in registration order
    models: Vec<Model>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn model(&mut self, model: Model) -> &mut Self {
        self.models.push(model);
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let mut models = self.models.clone();

        for (index, model) in models.iter_mut().enumerate() {
            model.id = ModelId(index);
        }

        let tables = models
            .iter()
            .map(|model| self.build_table(model))
            .collect();

        let schema = Schema { models, tables };
        schema.verify()?;

        debug!(
            models = schema.models.len(),
            prefix = ?self.table_name_prefix,
            "built schema"
        );

        Ok(schema)
    }

    fn build_table(&self, model: &Model) -> Table {
        let id = TableId(model.id.0);

        let name = match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{}", model.table_name()),
            None => model.table_name(),
        };

        let columns = model
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let id = ColumnId { table: id, index };

                match &field.ty {
                    FieldTy::Id => Column {
                        id,
                        name: field.name.clone(),
                        kind: FieldKind::Id,
                        storage_ty: Some(db::Type::Integer(8)),
                        nullable: false,
                        primary_key: true,
                        auto_increment: true,
                        check: None,
                    },
                    FieldTy::Text { nullable } => Column {
                        id,
                        name: field.name.clone(),
                        kind: FieldKind::Text,
                        storage_ty: None,
                        nullable: *nullable,
                        primary_key: false,
                        auto_increment: false,
                        check: None,
                    },
                    FieldTy::JsonSchema(json) => Column {
                        id,
                        name: field.name.clone(),
                        kind: FieldKind::Json,
                        storage_ty: None,
                        nullable: json.nullable(),
                        primary_key: false,
                        auto_increment: false,
                        check: json
                            .check_schema_in_db()
                            .then(|| ColumnCheck::JsonbMatchesSchema(json.schema_arc())),
                    },
                }
            })
            .collect();

        Table { id, name, columns }
    }
}
