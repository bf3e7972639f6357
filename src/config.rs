use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{PitwallError, Result};

pub const API_BASE_ENV: &str = "PITWALL_API_BASE";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageKeys,
    pub assets: AssetConfig,
}

/// Where the analysis backend lives and which paths it serves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub sentiment_path: String,
    pub summary_path: String,
    pub qa_path: String,
    pub health_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            sentiment_path: "/ai/sentiment".to_string(),
            summary_path: "/ai/summary".to_string(),
            qa_path: "/ai/qa".to_string(),
            health_path: "/health".to_string(),
        }
    }
}

impl ApiConfig {
    /// Build the absolute URL for an endpoint path.
    ///
    /// The path is appended to the base verbatim, so a base of
    /// `http://host/api` and a path of `/ai/qa` give `http://host/api/ai/qa`.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        Url::parse(&joined).map_err(|_| PitwallError::InvalidUrl(joined))
    }
}

/// Names of the two persisted preference slots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    pub team_key: String,
    pub team_name: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            team_key: "favoriteTeamKey".to_string(),
            team_name: "favoriteTeamName".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding `<team>.png`, relative to the dashboard pages.
    pub logo_dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            logo_dir: "../assets/img/teams".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml(path: PathBuf, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PitwallError::ConfigParse { path, source: e })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace the API base with an explicit value if one was supplied.
    pub fn with_api_base(mut self, base: Option<String>) -> Self {
        if let Some(base) = base.filter(|b| !b.trim().is_empty()) {
            self.api.base_url = base;
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        let config = if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).map_err(|e| PitwallError::ConfigRead {
                    path: config_path.clone(),
                    source: e,
                })?;
            Self::from_toml(config_path, &contents)?
        } else {
            Config::default()
        };

        // Env var takes precedence over the config file
        Ok(config.with_api_base(std::env::var(API_BASE_ENV).ok()))
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "pitwall")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(PitwallError::NoConfigDir)
    }

    /// File backing the favorite-team slots for the command line front end.
    pub fn store_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "pitwall")
            .map(|dirs| dirs.data_dir().join("storage.json"))
            .ok_or(PitwallError::NoConfigDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_contract() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000/api");
        assert_eq!(config.storage.team_key, "favoriteTeamKey");
        assert_eq!(config.storage.team_name, "favoriteTeamName");
        assert_eq!(
            config.api.endpoint(&config.api.sentiment_path).unwrap().as_str(),
            "http://127.0.0.1:8000/api/ai/sentiment"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let api = ApiConfig {
            base_url: "http://localhost:9000/api/".into(),
            ..ApiConfig::default()
        };
        assert_eq!(
            api.endpoint("/ai/qa").unwrap().as_str(),
            "http://localhost:9000/api/ai/qa"
        );
    }

    #[test]
    fn test_endpoint_rejects_garbage_base() {
        let api = ApiConfig {
            base_url: "not a url".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            api.endpoint("/ai/qa"),
            Err(PitwallError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_toml(
            PathBuf::from("config.toml"),
            "[api]\nbase_url = \"http://10.0.0.2:8000/api\"\n",
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.2:8000/api");
        assert_eq!(config.api.summary_path, "/ai/summary");
        assert_eq!(config.storage, StorageKeys::default());
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let err = Config::from_toml(PathBuf::from("/tmp/pitwall.toml"), "api = 3").unwrap_err();
        assert!(err.to_string().contains("/tmp/pitwall.toml"));
    }

    #[test]
    fn test_written_file_parses_back() {
        let config = Config {
            api: ApiConfig {
                base_url: "http://10.0.0.2:8000/api".into(),
                ..ApiConfig::default()
            },
            assets: AssetConfig {
                logo_dir: r#"C:\dash\assets\img\"teams""#.into(),
            },
            ..Config::default()
        };

        let contents = config.to_toml().unwrap();
        let parsed = Config::from_toml(PathBuf::from("config.toml"), &contents).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.assets.logo_dir, r#"C:\dash\assets\img\"teams""#);
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let config = Config::default().with_api_base(Some("  ".into()));
        assert_eq!(config.api.base_url, ApiConfig::default().base_url);

        let config = Config::default().with_api_base(Some("http://example.com".into()));
        assert_eq!(config.api.base_url, "http://example.com");
    }
}
