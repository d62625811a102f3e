pub mod check;
pub use check::{Diagnostic, Level, Router};

pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError};

pub mod field;
pub use field::JsonSchemaField;

pub mod schema;
pub use schema::Schema;

pub mod value;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
