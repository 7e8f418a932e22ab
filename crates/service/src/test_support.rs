#![cfg(test)]
use std::sync::Arc;

use configs::DatabaseConfig;
use models::db::{connect_with_config, MongoConnection};
use tokio::sync::OnceCell;

// Reachability is checked once per test process; later callers reuse the outcome.
static REACHABLE: OnceCell<bool> = OnceCell::const_new();

/// Connection to the test database, configured from `MONGODB_URI`.
pub async fn get_connection() -> Result<Arc<MongoConnection>, anyhow::Error> {
    let url = std::env::var("MONGODB_URI").map_err(|_| anyhow::anyhow!("MONGODB_URI missing"))?;
    let cfg = DatabaseConfig {
        url,
        name: "groups_service_test".into(),
        connect_timeout_secs: 2,
        ..DatabaseConfig::default()
    };
    let reachable = *REACHABLE
        .get_or_init(|| async { connect_with_config(&cfg).await.is_ok() })
        .await;
    if !reachable {
        return Err(anyhow::anyhow!("mongodb unreachable"));
    }
    connect_with_config(&cfg).await
}
