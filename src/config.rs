//! Process configuration read from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use crate::store::{FileStore, GraphStore, MemoryStore, RestKvStore, DEFAULT_GRAPH_KEY};

const DEFAULT_PORT: u16 = 3000;

/// Which persistence backend to run against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Redis-over-REST service (`KV_REST_API_URL` + `KV_REST_API_TOKEN`)
    RestKv { url: String, token: String },
    /// JSON file under a directory (`MEMORY_FILE_PATH`)
    File { root: PathBuf },
    /// Process memory; nothing survives a restart
    Memory,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub graph_key: String,
    pub addr: SocketAddr,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. Unparseable `HOST`/`PORT` fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let backend = match (var("KV_REST_API_URL"), var("KV_REST_API_TOKEN")) {
            (Some(url), Some(token)) => Backend::RestKv { url, token },
            _ => match var("MEMORY_FILE_PATH") {
                Some(root) => Backend::File { root: root.into() },
                None => Backend::Memory,
            },
        };

        let host = var("HOST")
            .and_then(|h| h.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        let port = var("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            backend,
            graph_key: var("GRAPH_KEY").unwrap_or_else(|| DEFAULT_GRAPH_KEY.to_string()),
            addr: SocketAddr::new(host, port),
        }
    }

    /// Instantiate the configured store
    pub fn build_store(&self) -> Arc<dyn GraphStore> {
        match &self.backend {
            Backend::RestKv { url, token } => Arc::new(RestKvStore::new(url.clone(), token.clone())),
            Backend::File { root } => Arc::new(FileStore::new(root.clone())),
            Backend::Memory => Arc::new(MemoryStore::new()),
        }
    }
}
