//! MongoDB connection management.
//!
//! `MongoConnection` wraps the database handle; the driver owns the pool.

use std::sync::Arc;
use std::time::Duration;

use configs::DatabaseConfig;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::info;

pub struct MongoConnection {
    database: Database,
}

impl MongoConnection {
    /// Connect and ping so a bad URI or unreachable server fails at startup
    /// rather than on the first request.
    pub async fn new(uri: &str, db_name: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);
        let client = Client::with_options(options)?;
        let database = client.database(db_name);

        database.run_command(doc! { "ping": 1 }).await?;
        info!(db = %db_name, "connected to mongodb");

        Ok(Self { database })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }
}

/// `cfg.url` is used as given; an unset url is rejected by
/// `DatabaseConfig::validate` before startup gets here.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<Arc<MongoConnection>> {
    let conn = MongoConnection::new(&cfg.url, &cfg.name, Duration::from_secs(cfg.connect_timeout_secs)).await?;
    Ok(Arc::new(conn))
}
