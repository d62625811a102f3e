use jsonschema_field_core::{
    async_trait,
    driver::{Capability, Driver, Extension, Operation, Response},
    Result, Schema,
};

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc, Mutex,
};

#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Response,
}

/// A driver that records every operation it executes.
///
/// Wrapping a real driver forwards operations to it. Without one, the
/// driver answers on its own: inserts return increasing ids and every other
/// operation returns a zero count.
#[derive(Debug)]
pub struct LoggingDriver {
    capability: &'static Capability,

    /// Answer to extension lookups when there is no inner driver
    extensions: Vec<Extension>,

    inner: Option<Box<dyn Driver>>,

    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,

    next_id: AtomicI64,
}

impl LoggingDriver {
    /// A standalone driver reporting `capability`.
    pub fn new(capability: &'static Capability) -> Self {
        Self {
            capability,
            extensions: vec![],
            inner: None,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// A standalone PostgreSQL driver with `pg_jsonschema` installed.
    pub fn postgresql() -> Self {
        Self::new(&Capability::POSTGRESQL).with_extension("pg_jsonschema", "0.3.3")
    }

    /// Logs the operations of `driver`.
    pub fn wrap(driver: impl Driver) -> Self {
        let mut logging = Self::new(driver.capability());
        logging.inner = Some(Box::new(driver));
        logging
    }

    /// Reports `name` as installed at `version`.
    pub fn with_extension(mut self, name: &str, version: &str) -> Self {
        self.extensions.push(Extension {
            name: name.to_string(),
            default_version: Some(version.to_string()),
            installed_version: Some(version.to_string()),
        });
        self
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }

    fn log(&self, operation: Operation, response: &Response) {
        self.ops_log
            .lock()
            .expect("failed to acquire ops log lock")
            .push(DriverOp {
                operation,
                response: response.clone(),
            });
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn capability(&self) -> &'static Capability {
        self.capability
    }

    async fn installed_extension(&self, name: &str) -> Result<Option<Extension>> {
        match &self.inner {
            Some(inner) => inner.installed_extension(name).await,
            None => Ok(self
                .extensions
                .iter()
                .find(|extension| extension.name == name)
                .cloned()),
        }
    }

    async fn exec(&self, schema: &Arc<Schema>, operation: Operation) -> Result<Response> {
        let operation_clone = operation.clone();

        let response = match &self.inner {
            Some(inner) => inner.exec(schema, operation).await?,
            None if operation.is_insert() => {
                Response::ids(vec![self.next_id.fetch_add(1, Ordering::Relaxed)])
            }
            None => Response::count(0),
        };

        self.log(operation_clone, &response);
        Ok(response)
    }
}
