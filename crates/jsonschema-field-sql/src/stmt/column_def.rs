use jsonschema_field_core::{
    driver,
    schema::{db, Column, ColumnCheck},
    Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,
    pub not_null: bool,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub check: Option<ColumnCheck>,
}

impl ColumnDef {
    pub(crate) fn from_schema(
        column: &Column,
        storage_types: &driver::StorageTypes,
    ) -> Result<ColumnDef> {
        let ty = column.storage_ty(storage_types)?;

        Ok(ColumnDef {
            name: column.name.clone(),
            ty,
            not_null: !column.nullable,
            primary_key: column.primary_key,
            auto_increment: column.auto_increment,
            check: column.check.clone(),
        })
    }
}
