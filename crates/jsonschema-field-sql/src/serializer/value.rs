use super::{Params, ToSql};

use jsonschema_field_core::value::{Expr, FieldKind, Prepared};
use serde_json::Value;

impl ToSql for &Prepared {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Prepared::Null => fmt!(f, "NULL"),
            Prepared::Expr(Expr::Raw(sql)) => fmt!(f, sql.as_str()),
            Prepared::Expr(Expr::Literal(literal)) => {
                // Bound by the kind of the column receiving it
                let value = match (&literal.value, literal.output) {
                    (Value::Null, _) => Prepared::Null,
                    (Value::Number(n), FieldKind::Id) if n.is_i64() => {
                        Prepared::I64(n.as_i64().unwrap_or_default())
                    }
                    (Value::String(s), FieldKind::Id | FieldKind::Text) => {
                        Prepared::String(s.clone())
                    }
                    (value, FieldKind::Id | FieldKind::Text) => Prepared::String(value.to_string()),
                    (value, FieldKind::Json) if f.serializer.is_postgresql() => {
                        Prepared::Json(value.clone())
                    }
                    (value, FieldKind::Json) => Prepared::JsonText(value.to_string()),
                };

                value.to_sql(f);
            }
            Prepared::JsonText(_) if f.serializer.is_postgresql() => {
                // Bound as text, then parsed by the database
                let placeholder = f.params.push(self);
                fmt!(f, placeholder, "::text::jsonb");
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
    }
}
