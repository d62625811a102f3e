pub mod extension;
pub use extension::{EXTENSION_LOOKUP, PG_JSONSCHEMA_EXISTS, PG_JSONSCHEMA_LOOKUP};

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
