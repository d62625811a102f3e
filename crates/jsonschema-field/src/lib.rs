pub mod db;
pub use db::Db;

mod row;
pub use row::Row;

pub use jsonschema_field_core::{
    check::{self, AllowAll, Diagnostic, Level, Router},
    driver::{self, Driver},
    field::{self, FieldDefault},
    schema::{self, FieldTy, Model},
    value::{self, Expr, Input, Literal, RawSql},
    Error, JsonSchemaField, Result,
};
