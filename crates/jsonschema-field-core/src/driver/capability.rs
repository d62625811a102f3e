use crate::schema::db;

#[derive(Debug)]
pub struct Capability {
    /// The database family.
    pub vendor: Vendor,

    /// Human-readable name used in diagnostics.
    pub display_name: &'static str,

    /// When true, the database uses a SQL-based query language.
    pub sql: bool,

    /// When true, the database can store values in a JSON column.
    pub supports_json_field: bool,

    /// When true, the driver binds `serde_json::Value` parameters directly.
    /// Otherwise JSON values are encoded as text before they reach the
    /// driver.
    pub native_json: bool,

    /// Column storage types supported by the database
    pub storage_types: StorageTypes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    Postgresql,
    Sqlite,
    Mysql,
    DynamoDb,
}

#[derive(Debug)]
pub struct StorageTypes {
    /// The default storage type for a string.
    pub default_string_type: db::Type,

    /// The storage type for JSON documents, when JSON is supported.
    pub json: Option<db::Type>,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        vendor: Vendor::Sqlite,
        display_name: "SQLite",
        sql: true,
        supports_json_field: true,
        native_json: false,
        storage_types: StorageTypes::SQLITE,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        vendor: Vendor::Postgresql,
        display_name: "PostgreSQL",
        native_json: true,
        storage_types: StorageTypes::POSTGRESQL,
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        vendor: Vendor::Mysql,
        display_name: "MySQL",
        storage_types: StorageTypes::MYSQL,
        ..Self::SQLITE
    };

    /// DynamoDB capabilities
    pub const DYNAMODB: Self = Self {
        vendor: Vendor::DynamoDb,
        display_name: "DynamoDB",
        sql: false,
        supports_json_field: false,
        native_json: false,
        storage_types: StorageTypes::DYNAMODB,
    };

    pub fn is_postgresql(&self) -> bool {
        self.vendor == Vendor::Postgresql
    }
}

impl StorageTypes {
    /// SQLite storage types
    pub const SQLITE: StorageTypes = StorageTypes {
        default_string_type: db::Type::Text,

        // SQLite has no JSON column type. The JSON1 functions operate on
        // TEXT values.
        json: Some(db::Type::Text),
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        default_string_type: db::Type::Text,

        // `jsonb_matches_schema` operates on JSONB, so that is what the
        // column must be.
        json: Some(db::Type::Jsonb),
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        default_string_type: db::Type::VarChar(191),
        json: Some(db::Type::Json),
    };

    pub const DYNAMODB: StorageTypes = StorageTypes {
        default_string_type: db::Type::Text,
        json: None,
    };
}
