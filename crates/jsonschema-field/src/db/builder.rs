use super::{connect, Db};
use crate::{AllowAll, Driver, Model, Result, Router};

use jsonschema_field_core::{schema, Error};

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    /// Registered databases, keyed by alias
    connections: IndexMap<String, Arc<dyn Driver>>,

    router: Option<Arc<dyn Router>>,
}

impl Builder {
    pub fn register(&mut self, model: Model) -> &mut Self {
        self.core.model(model);
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    /// Decides which databases models are created on and written to.
    /// Defaults to [`AllowAll`].
    pub fn router(&mut self, router: impl Router) -> &mut Self {
        self.router = Some(Arc::new(router));
        self
    }

    /// Registers a database under `alias`, replacing any database already
    /// registered under it.
    pub fn database(&mut self, alias: &str, driver: impl Driver) -> &mut Self {
        self.connections.insert(alias.to_string(), Arc::new(driver));
        self
    }

    /// Connects to `url`, registers it as the default database and builds
    /// the handle.
    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let driver = connect(url).await?;
        self.connections
            .insert(super::DEFAULT_DB_ALIAS.to_string(), driver);
        self.build()
    }

    pub fn build(&mut self) -> Result<Db> {
        if self.connections.is_empty() {
            return Err(Error::improperly_configured("no database registered"));
        }

        let schema = self.core.build()?;

        let router: Arc<dyn Router> = match &self.router {
            Some(router) => router.clone(),
            None => Arc::new(AllowAll),
        };

        Ok(Db {
            schema: Arc::new(schema),
            connections: Arc::new(self.connections.clone()),
            router,
        })
    }
}
