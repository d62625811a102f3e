use crate::{driver, value::FieldKind, Result};

/// Database-level storage types representing how values are stored in the
/// target database.
///
/// Columns record the application-level [`FieldKind`] they hold. The mapping
/// from a kind to a `db::Type` happens at the driver boundary, using the
/// driver's [`driver::StorageTypes`]:
///
/// ```text
/// FieldKind::Id    →  db::Type::Integer(8)
/// FieldKind::Text  →  db::Type::Text         (default for most databases)
///                  →  db::Type::VarChar(191) (MySQL)
/// FieldKind::Json  →  db::Type::Jsonb        (PostgreSQL)
///                  →  db::Type::Json         (MySQL)
///                  →  db::Type::Text         (SQLite)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// A signed integer of `n` bytes
    Integer(u8),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// JSON stored as text, validated on write
    Json,

    /// Binary JSON, decomposed on write
    Jsonb,
}

impl Type {
    /// Maps an application-level kind to a database-level storage type.
    pub fn from_app(
        kind: FieldKind,
        hint: Option<&Type>,
        db: &driver::StorageTypes,
    ) -> Result<Type> {
        match hint {
            Some(ty) => Ok(*ty),
            None => match kind {
                FieldKind::Id => Ok(Type::Integer(8)),
                FieldKind::Text => Ok(db.default_string_type),
                FieldKind::Json => db.json.ok_or_else(|| {
                    crate::Error::improperly_configured(
                        "JSON columns are not supported by this database",
                    )
                }),
            },
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Type::Json | Type::Jsonb)
    }
}
