use jsonschema_field_core::value::Prepared;
use postgres::types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use postgres_types::Json;

#[derive(Debug)]
pub struct Value(pub(crate) Prepared);

impl From<Prepared> for Value {
    fn from(value: Prepared) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> std::result::Result<IsNull, Box<dyn std::error::Error + Sync + Send>>
    where
        Self: Sized,
    {
        match &self.0 {
            Prepared::Null => Ok(IsNull::Yes),
            Prepared::I64(value) => match *ty {
                Type::INT2 => i16::try_from(*value)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*value)?.to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            Prepared::String(value) => value.to_sql(ty, out),
            Prepared::Json(value) => Json(value).to_sql(ty, out),
            // Cast to JSONB by the statement
            Prepared::JsonText(value) => value.to_sql(ty, out),
            Prepared::Expr(expr) => {
                Err(format!("expressions are rendered into the statement, not bound; expr={expr:?}").into())
            }
        }
    }

    accepts!(INT2, INT4, INT8, TEXT, VARCHAR, JSON, JSONB);
    to_sql_checked!();
}
