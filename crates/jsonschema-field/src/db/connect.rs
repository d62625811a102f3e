use crate::{Driver, Error, Result};

use std::sync::Arc;
use url::Url;

/// Connects to the database at `url`, picking the driver from the URL
/// scheme.
pub async fn connect(url: &str) -> Result<Arc<dyn Driver>> {
    let url = Url::parse(url).map_err(|err| Error::invalid_connection_url(err.to_string()))?;

    match url.scheme() {
        "postgresql" => connect_postgresql(&url).await,
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "postgresql")]
async fn connect_postgresql(url: &Url) -> Result<Arc<dyn Driver>> {
    let driver = jsonschema_field_driver_postgresql::PostgreSQL::connect(url.as_str()).await?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "postgresql"))]
async fn connect_postgresql(_url: &Url) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url(
        "`postgresql` feature not enabled",
    ))
}
