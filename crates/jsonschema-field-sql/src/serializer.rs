#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::{Ident, Quoted};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod check;
mod column_def;
mod name;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use tracing::debug;

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Renders `stmt`, pushing bound values onto `params`.
    ///
    /// # Panics
    ///
    /// Panics when the statement uses a feature the flavor lacks: check
    /// constraints outside PostgreSQL, or `RETURNING` on MySQL.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');

        debug!(flavor = ?self.flavor, sql = %ret, "serialized statement");
        ret
    }

    fn is_postgresql(&self) -> bool {
        matches!(self.flavor, Flavor::Postgresql)
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
