use super::Serializer;

use jsonschema_field_core::driver::{Capability, Vendor};

#[derive(Debug, Clone, Copy)]
pub(super) enum Flavor {
    Postgresql,
    Sqlite,
    Mysql,
}

impl Serializer {
    /// # Panics
    ///
    /// Serializing a `jsonb_matches_schema` check constraint panics; only
    /// PostgreSQL has the function.
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    /// # Panics
    ///
    /// Serializing a `jsonb_matches_schema` check constraint panics, as does
    /// an `INSERT` with a `RETURNING` column.
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    /// The serializer for a driver's SQL dialect. Returns `None` for
    /// databases that do not speak SQL.
    pub fn for_capability(capability: &Capability) -> Option<Serializer> {
        match capability.vendor {
            Vendor::Postgresql => Some(Self::postgresql()),
            Vendor::Sqlite => Some(Self::sqlite()),
            Vendor::Mysql => Some(Self::mysql()),
            Vendor::DynamoDb => None,
        }
    }
}
