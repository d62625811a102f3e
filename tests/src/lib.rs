mod isolation;
pub mod logging_driver;
pub use logging_driver::{DriverOp, LoggingDriver};
mod run;
pub use run::DbTest;

use jsonschema_field::{db::Builder, Db, Model, Result};
use jsonschema_field_core::driver::Capability;

use std::sync::Once;

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Connects and recreates the tables of every registered model.
    async fn setup(&self, builder: Builder) -> Db {
        let db = self.connect(builder).await.unwrap();
        db.reset_db().await.unwrap();
        db
    }

    async fn connect(&self, builder: Builder) -> Result<Db>;

    fn capability(&self) -> &'static Capability;

    /// Drops the tables created by this setup, identified by its table
    /// prefix.
    async fn cleanup_my_tables(&self) -> Result<()>;
}

/// Builds a `Db` builder with the given models registered.
pub fn models(models: impl IntoIterator<Item = Model>) -> Builder {
    let mut builder = Db::builder();
    for model in models {
        builder.register(model);
    }
    builder
}

/// Installs a `tracing` subscriber filtered by `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Defines a test per database backend for each listed async function. Each
/// function receives the backend's [`Setup`].
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        #[cfg(feature = "postgresql")]
        mod postgresql {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    let mut test = $crate::DbTest::new(
                        $crate::db::postgresql::SetupPostgreSQL::new()
                    );

                    test.run_test(|setup| async move {
                        super::$f(setup).await;
                    });
                }
            )*
        }
    };
}
