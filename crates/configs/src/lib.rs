use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// Optional prefix the group routes are mounted under, e.g. `/groups-service`.
    #[serde(default)]
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4), base_path: String::new() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Mongodb,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_db_name")]
    pub name: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            url: String::new(),
            name: default_db_name(),
            collection: default_collection(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_db_name() -> String { "groups_service".into() }
fn default_collection() -> String { "groups".into() }
fn default_connect_timeout() -> u64 { 3 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Build a config purely from environment variables, used when no config file exists.
    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        if let Ok(backend) = std::env::var("STORAGE_BACKEND") {
            if backend.eq_ignore_ascii_case("memory") {
                cfg.database.backend = StorageBackend::Memory;
            }
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // the URL may come from MONGODB_URI instead of the file
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        let trimmed = self.base_path.trim().trim_end_matches('/');
        if !trimmed.is_empty() && !trimmed.starts_with('/') {
            return Err(anyhow!("server.base_path must start with '/'"));
        }
        self.base_path = trimmed.to_string();
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("MONGODB_URI") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == StorageBackend::Memory {
            return Ok(());
        }
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or the MONGODB_URI env var"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.url must start with mongodb:// or mongodb+srv://"));
        }
        if self.name.trim().is_empty() || self.collection.trim().is_empty() {
            return Err(anyhow!("database.name and database.collection must not be empty"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(anyhow!("database.connect_timeout_secs must be a positive number of seconds"));
        }
        Ok(())
    }
}
