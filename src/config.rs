use anyhow::{anyhow, Result};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{DEFAULT_CONTAINER_ID, DEFAULT_TITLE};
use crate::services::explorer::DEFAULT_EXPLORER_BASE_URL;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub explorer: ExplorerConfig,
    pub gallery: GalleryConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExplorerConfig {
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GalleryConfig {
    pub container_id: String,
    /// HTML page hosting the container; the built-in page is used when unset.
    #[serde(default)]
    pub template_path: Option<String>,
    /// Heading and document title of the built-in page.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            explorer: ExplorerConfig {
                base_url: DEFAULT_EXPLORER_BASE_URL.to_string(),
            },
            gallery: GalleryConfig {
                container_id: DEFAULT_CONTAINER_ID.to_string(),
                template_path: None,
                title: default_title(),
            },
            cors: CorsConfig {
                allowed_origins: vec!["http://localhost:3000".to_string()],
                allowed_methods: vec!["GET".to_string()],
                allowed_headers: vec!["Accept".to_string(), "Content-Type".to_string()],
            },
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow!("Invalid explorer base URL '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "Explorer base URL must be http or https, got '{}'",
                url.scheme()
            ));
        }
        Ok(())
    }
}

impl GalleryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.container_id.trim().is_empty() {
            return Err(anyhow!("Gallery container id not configured"));
        }
        if self.container_id.contains(|c: char| c == '"' || c == '\\') {
            return Err(anyhow!(
                "Gallery container id '{}' contains a quote or backslash",
                self.container_id
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        info!("Loading config from file");
        let config = match Self::load_from_file("config/config.toml") {
            Ok(config) => {
                info!("Config loaded from file");
                config
            }
            Err(e) => {
                error!("Failed to load config from file: {}", e);
                info!("Falling back to environment variables or defaults");
                Self::from_env()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(host) = std::env::var("SERVER_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                config.server.port = port_num;
            }
        }

        if let Ok(base_url) = std::env::var("EXPLORER_BASE_URL") {
            config.explorer.base_url = base_url;
        }

        if let Ok(template) = std::env::var("GALLERY_TEMPLATE") {
            config.gallery.template_path = Some(template);
        }

        if let Ok(title) = std::env::var("GALLERY_TITLE") {
            config.gallery.title = title;
        }

        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.cors.allowed_origins =
                origins.split(',').map(|s| s.trim().to_string()).collect();
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        self.explorer.validate()?;
        self.gallery.validate()?;
        Ok(())
    }
}
