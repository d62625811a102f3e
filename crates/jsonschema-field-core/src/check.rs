//! Configuration checks: diagnostics gathered at startup or migration time.
//!
//! Checks never fail a model definition. Each problem is reported as a
//! [`Diagnostic`] and it is up to the caller to decide what to do with
//! serious ones.

use crate::{schema::Model, Driver, Error, Result};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// The target database does not support JSON columns.
pub const JSON_NOT_SUPPORTED: &str = "fields.E180";

/// A JSON field's default is a shared value instead of a callable.
pub const MUTABLE_DEFAULT: &str = "fields.W340";

/// In-database schema checking was requested on a database that is not
/// PostgreSQL.
pub const NOT_POSTGRESQL: &str = "django_pg_jsonschema.NOT_PG";

/// In-database schema checking was requested but `pg_jsonschema` is not
/// installed.
pub const EXTENSION_MISSING: &str = "django_pg_jsonschema.NO_EXTENSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// A problem found by a configuration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,

    /// Stable identifier, e.g. `fields.E180`
    pub id: &'static str,

    pub message: String,

    /// Name of the model owning the checked field
    pub obj: String,

    pub hint: Option<String>,
}

/// Decides which databases a model lives on.
pub trait Router: fmt::Debug + Send + Sync + 'static {
    /// Returns `false` when the model's table should not be created on the
    /// database registered as `alias`. Checks skip such databases.
    fn allow_migrate_model(&self, alias: &str, model: &Model) -> bool {
        let _ = (alias, model);
        true
    }

    /// The alias new rows of `model` are written to. `None` selects the
    /// default alias.
    fn db_for_write(&self, model: &Model) -> Option<String> {
        let _ = model;
        None
    }
}

/// Routes every model to every database.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl Router for AllowAll {}

/// Everything a field check needs to know about the environment.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub connections: &'a IndexMap<String, Arc<dyn Driver>>,
    pub router: &'a dyn Router,
}

impl Diagnostic {
    pub fn error(id: &'static str, message: impl Into<String>, obj: &Model) -> Self {
        Self::new(Level::Error, id, message, obj)
    }

    pub fn warning(id: &'static str, message: impl Into<String>, obj: &Model) -> Self {
        Self::new(Level::Warning, id, message, obj)
    }

    fn new(level: Level, id: &'static str, message: impl Into<String>, obj: &Model) -> Self {
        Self {
            level,
            id,
            message: message.into(),
            obj: obj.name.clone(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Errors and criticals are serious; warnings and below are not.
    pub fn is_serious(&self) -> bool {
        self.level >= Level::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ({}) {}", self.obj, self.id, self.message)?;

        if let Some(hint) = &self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }

        Ok(())
    }
}

impl<'a> Context<'a> {
    pub fn new(
        connections: &'a IndexMap<String, Arc<dyn Driver>>,
        router: &'a dyn Router,
    ) -> Self {
        Self {
            connections,
            router,
        }
    }

    /// The driver registered as `alias`.
    pub fn connection(&self, alias: &str) -> Result<&'a Arc<dyn Driver>> {
        self.connections
            .get(alias)
            .ok_or_else(|| Error::connection_does_not_exist(alias))
    }
}
