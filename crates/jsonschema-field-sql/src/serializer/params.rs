use super::{Flavor, Formatter, ToSql};

use jsonschema_field_core::value::Prepared;

pub trait Params {
    fn push(&mut self, param: &Prepared) -> Placeholder;
}

/// The 1-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Prepared> {
    fn push(&mut self, value: &Prepared) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
            Flavor::Sqlite => {
                f.dst.push('?');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}
