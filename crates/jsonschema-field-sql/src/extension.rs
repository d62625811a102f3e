//! Catalog queries for the `pg_jsonschema` extension.

/// Returns the default and installed versions of `pg_jsonschema`. No row is
/// returned when the extension is not installed.
pub const PG_JSONSCHEMA_LOOKUP: &str = "
    SELECT default_version, installed_version
    FROM pg_available_extensions
    WHERE name = 'pg_jsonschema'
    AND installed_version IS NOT NULL;
";

/// Returns a single boolean: whether `pg_jsonschema` is installed.
pub const PG_JSONSCHEMA_EXISTS: &str = "
    SELECT EXISTS(
        SELECT 1
        FROM pg_available_extensions
        WHERE name = 'pg_jsonschema'
        AND installed_version IS NOT NULL
    );
";

/// Looks up any extension by name. Takes the name as `$1`.
pub const EXTENSION_LOOKUP: &str = "
    SELECT name, default_version, installed_version
    FROM pg_available_extensions
    WHERE name = $1
    AND installed_version IS NOT NULL;
";
