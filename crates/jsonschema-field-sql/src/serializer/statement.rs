use super::{Comma, Ident, Params, ToSql};

use crate::stmt;

struct Columns<'a>(&'a [stmt::ColumnDef]);

impl ToSql for Columns<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        for (index, column) in self.0.iter().enumerate() {
            fmt!(f, "\n    ", column);
            if index < self.0.len() - 1 {
                fmt!(f, ",");
            }
        }

        fmt!(f, "\n");
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = Columns(&self.columns);

        fmt!(f, "CREATE TABLE ", &self.name, " (", columns, ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        fmt!(f, "DROP TABLE ", if_exists, &self.name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let returning = self
            .returning
            .as_ref()
            .map(|returning| (" RETURNING ", Ident(returning)));

        if returning.is_some() && f.serializer.is_mysql() {
            panic!("MySQL does not support the RETURNING clause with INSERT statements; returning={:?}", self.returning);
        }

        if self.columns.is_empty() {
            fmt!(f, "INSERT INTO ", &self.table, " DEFAULT VALUES", returning);
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(
            f, "INSERT INTO ", &self.table, " (", columns, ") VALUES (", values, ")", returning
        );
    }
}

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
        }
    }
}
