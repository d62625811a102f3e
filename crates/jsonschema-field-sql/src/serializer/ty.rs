use super::{Flavor, Params, ToSql};

use jsonschema_field_core::schema::db;

/// A column's storage type, as written in a column definition.
pub(super) struct ColumnType<'a> {
    pub(super) ty: &'a db::Type,
    pub(super) auto_increment: bool,
}

impl ToSql for ColumnType<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use db::Type::*;

        match (f.serializer.flavor, self.ty) {
            // Serial types imply the sequence default
            (Flavor::Postgresql, Integer(8)) if self.auto_increment => fmt!(f, "BIGSERIAL"),
            (Flavor::Postgresql, Integer(4)) if self.auto_increment => fmt!(f, "SERIAL"),
            (Flavor::Postgresql, Integer(2)) if self.auto_increment => fmt!(f, "SMALLSERIAL"),
            (Flavor::Sqlite, Integer(_)) => fmt!(f, "INTEGER"),
            (_, Integer(8)) => fmt!(f, "BIGINT"),
            (_, Integer(4)) => fmt!(f, "INTEGER"),
            (_, Integer(2)) => fmt!(f, "SMALLINT"),
            (_, Integer(n)) => panic!("unsupported integer width; bytes={n}"),
            (_, Text) => fmt!(f, "TEXT"),
            (_, VarChar(size)) => {
                fmt!(f, "VARCHAR(");
                f.dst.push_str(&size.to_string());
                fmt!(f, ")");
            }
            (_, Json) => fmt!(f, "JSON"),
            (Flavor::Postgresql, Jsonb) => fmt!(f, "JSONB"),
            (_, Jsonb) => panic!("JSONB columns are only supported by PostgreSQL"),
        }
    }
}
