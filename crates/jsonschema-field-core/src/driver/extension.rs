/// A row of the database extension catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    pub name: String,

    /// The version that `CREATE EXTENSION` installs by default.
    pub default_version: Option<String>,

    /// The version installed in the current database, if any.
    pub installed_version: Option<String>,
}

impl Extension {
    pub fn is_installed(&self) -> bool {
        self.installed_version.is_some()
    }
}
