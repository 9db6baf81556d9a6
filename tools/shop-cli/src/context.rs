//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_auth::AuthSession;
use shop_cache::Cache;
use shop_commerce::cart::CartStore;
use shop_commerce::catalog::Catalog;

use crate::config::{CliConfig, StoreBackend};
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, Path::new(path));
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(&config_path) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding persisted session state.
    pub fn data_dir(&self) -> PathBuf {
        match &self.config.store.data_dir {
            Some(dir) => self.resolve_path(dir),
            None => dirs_path().join("shop").join("store"),
        }
    }

    /// Open the key-value cache backing the cart and sign-in state.
    pub fn open_cache(&self) -> Result<Cache> {
        match self.config.store.backend {
            StoreBackend::File => {
                let dir = self.data_dir();
                tracing::debug!(dir = %dir.display(), "opening file store");
                Cache::open_dir(&dir)
                    .with_context(|| format!("Failed to open store at {}", dir.display()))
            }
            StoreBackend::Memory => {
                self.output
                    .debug("Using in-memory store; nothing will be kept after this command");
                Ok(Cache::in_memory())
            }
        }
    }

    /// The product catalog: the configured JSON file or the built-in seed.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                Catalog::load(&path)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Ok(Catalog::seed()),
        }
    }

    /// Open the persisted cart.
    pub fn cart_store(&self, cache: &Cache) -> CartStore {
        CartStore::open(cache.clone())
    }

    /// Open the persisted sign-in session.
    pub fn auth_session(&self, cache: &Cache) -> AuthSession {
        AuthSession::open(cache.clone()).with_latency(self.config.auth.latency())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        return home_dir().join(rest);
    }
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    home_dir().join(".local").join("share")
}
