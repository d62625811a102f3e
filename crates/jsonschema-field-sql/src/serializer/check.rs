use super::{Ident, Params, Quoted, ToSql};

use jsonschema_field_core::schema::ColumnCheck;

/// A column check constraint, bound to the column it checks.
pub(super) struct Check<'a> {
    pub(super) column: &'a str,
    pub(super) check: &'a ColumnCheck,
}

impl ToSql for Check<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.check {
            ColumnCheck::JsonbMatchesSchema(schema) => {
                assert!(
                    f.serializer.is_postgresql(),
                    "jsonb_matches_schema check constraints require PostgreSQL"
                );

                let schema = schema.to_string();

                fmt!(
                    f, "CHECK (jsonb_matches_schema(", Quoted(&schema), "::json, ", Ident(self.column), "))"
                );
            }
        }
    }
}
