mod args;
pub use args::Deconstructed;

mod builder;
pub use builder::Builder;

mod check;
pub use check::PG_JSONSCHEMA;

mod default;
pub use default::FieldDefault;

mod prep;

mod validate;

use crate::{Error, Result};

use jsonschema::Validator;
use serde_json::Value;
use std::{fmt, sync::Arc};

/// A JSON document column whose values must match a JSON Schema.
///
/// The schema is meta-validated and compiled when the field is built. Where
/// the schema is enforced depends on `check_schema_in_db`:
///
/// | `check_schema_in_db` | enforced by | a mismatch surfaces as |
/// |---|---|---|
/// | `true` (default) | a `pg_jsonschema` check constraint | an integrity violation when the row is written |
/// | `false` | the compiled [`Validator`] | a validation error before the row is written |
#[derive(Clone)]
pub struct JsonSchemaField {
    schema: Arc<Value>,
    check_schema_in_db: bool,
    nullable: bool,
    blank: bool,
    default: Option<FieldDefault>,
    validator: Arc<Validator>,
}

impl JsonSchemaField {
    /// Name of the generic column handler the field builds on.
    pub const INTERNAL_TYPE: &'static str = "JSONField";

    pub const DESCRIPTION: &'static str = "A JSON object with JSON Schema";

    /// Creates a field validated in the database, with default options.
    pub fn new(schema: Value) -> Result<Self> {
        Self::builder().schema(schema).build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    pub(crate) fn schema_arc(&self) -> Arc<Value> {
        self.schema.clone()
    }

    pub fn check_schema_in_db(&self) -> bool {
        self.check_schema_in_db
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn blank(&self) -> bool {
        self.blank
    }

    pub fn default(&self) -> Option<&FieldDefault> {
        self.default.as_ref()
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn internal_type(&self) -> &'static str {
        Self::INTERNAL_TYPE
    }

    pub fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }
}

/// Meta-validates `schema` and compiles it.
fn compile(schema: &Value) -> Result<Validator> {
    jsonschema::meta::validate(schema)
        .map_err(|err| Error::invalid_schema(format!("schema must be valid JSON Schema: {err}")))?;

    jsonschema::validator_for(schema)
        .map_err(|err| Error::invalid_schema(format!("schema must be valid JSON Schema: {err}")))
}

impl fmt::Debug for JsonSchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaField")
            .field("schema", &self.schema)
            .field("check_schema_in_db", &self.check_schema_in_db)
            .field("nullable", &self.nullable)
            .field("blank", &self.blank)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

/// Fields are equal when they were configured with the same arguments. The
/// default is not compared.
impl PartialEq for JsonSchemaField {
    fn eq(&self, other: &Self) -> bool {
        self.schema == other.schema
            && self.check_schema_in_db == other.check_schema_in_db
            && self.nullable == other.nullable
            && self.blank == other.blank
    }
}
