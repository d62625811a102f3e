use super::{check::Check, ty::ColumnType, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let ty = ColumnType {
            ty: &self.ty,
            auto_increment: self.auto_increment,
        };

        fmt!(f, name, " ", ty);

        if self.primary_key {
            fmt!(f, " PRIMARY KEY");

            if self.auto_increment {
                if f.serializer.is_sqlite() {
                    fmt!(f, " AUTOINCREMENT");
                } else if f.serializer.is_mysql() {
                    fmt!(f, " AUTO_INCREMENT");
                }
            }
        } else if self.not_null {
            fmt!(f, " NOT NULL");
        }

        if let Some(check) = &self.check {
            fmt!(f, " ", Check { column: &self.name, check });
        }
    }
}
