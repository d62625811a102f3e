use super::JsonSchemaField;
use crate::{
    check::{self, Context, Diagnostic},
    schema::Model,
    Result,
};

use tracing::debug;

/// Extension providing `jsonb_matches_schema`.
pub const PG_JSONSCHEMA: &str = "pg_jsonschema";

impl JsonSchemaField {
    /// Checks that the databases `databases` can store this field.
    ///
    /// Problems are returned as diagnostics and never abort the check. An
    /// unknown alias or a failing catalog query is returned as an error.
    pub async fn check(
        &self,
        model: &Model,
        databases: &[&str],
        cx: &Context<'_>,
    ) -> Result<Vec<Diagnostic>> {
        let mut errors = self.check_default(model);

        for &db in databases {
            errors.extend(self.check_json_supported(db, model, cx)?);

            if self.check_schema_in_db {
                errors.extend(self.check_jsonschema_supported(db, model, cx).await?);
            }
        }

        debug!(model = %model.name, found = errors.len(), "checked JSON schema field");
        Ok(errors)
    }

    fn check_default(&self, model: &Model) -> Vec<Diagnostic> {
        match &self.default {
            Some(default) if !default.is_callable() && !default.resolve().is_null() => {
                vec![Diagnostic::warning(
                    check::MUTABLE_DEFAULT,
                    "JSONSchemaField default should be a callable instead of an instance \
                     so that it's not shared between all field instances.",
                    model,
                )
                .with_hint(
                    "Use a callable instead, e.g., use `FieldDefault::empty_object()` \
                     instead of `FieldDefault::Value(json!({}))`.",
                )]
            }
            _ => vec![],
        }
    }

    fn check_json_supported(
        &self,
        db: &str,
        model: &Model,
        cx: &Context<'_>,
    ) -> Result<Option<Diagnostic>> {
        // Check if the model needs migration for this database
        if !cx.router.allow_migrate_model(db, model) {
            return Ok(None);
        }

        let capability = cx.connection(db)?.capability();

        if !capability.supports_json_field {
            return Ok(Some(Diagnostic::error(
                check::JSON_NOT_SUPPORTED,
                format!("{} does not support JSONFields.", capability.display_name),
                model,
            )));
        }

        Ok(None)
    }

    async fn check_jsonschema_supported(
        &self,
        db: &str,
        model: &Model,
        cx: &Context<'_>,
    ) -> Result<Option<Diagnostic>> {
        if !cx.router.allow_migrate_model(db, model) {
            return Ok(None);
        }

        let connection = cx.connection(db)?;

        // Only PostgreSQL has the extension
        if !connection.capability().is_postgresql() {
            return Ok(Some(Diagnostic::error(
                check::NOT_POSTGRESQL,
                "Database is not PostgreSQL",
                model,
            )));
        }

        match connection.installed_extension(PG_JSONSCHEMA).await? {
            Some(extension) if extension.is_installed() => {
                debug!(
                    db,
                    version = ?extension.installed_version,
                    "pg_jsonschema is installed"
                );
                Ok(None)
            }
            _ => Ok(Some(
                Diagnostic::error(
                    check::EXTENSION_MISSING,
                    format!("The {PG_JSONSCHEMA} extension is not installed on database `{db}`"),
                    model,
                )
                .with_hint(format!(
                    "Run `CREATE EXTENSION {PG_JSONSCHEMA};` or build the field with \
                     `check_schema_in_db(false)`."
                )),
            )),
        }
    }
}
