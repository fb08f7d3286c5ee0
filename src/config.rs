use std::{env, fmt};

use anyhow::{Context, Result};
use tracing::warn;

pub const KAKAO_MAP_API_KEY: &str = "KAKAO_MAP_API_KEY";
pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";
pub const EXCHANGE_API_KEY: &str = "EXCHANGE_API_KEY";
pub const NAVER_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub const NAVER_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";

// left in .env.example; treated as unset
const NAVER_PLACEHOLDER: &str = "your_naver_client_id_here";

#[derive(Debug, Default, Clone)]
pub struct Config {
    pub kakao_map_key: Option<String>,
    pub weather_key: Option<String>,
    pub exchange_key: Option<String>,
    pub naver: Option<NaverCredentials>,
}

#[derive(Clone, PartialEq)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for NaverCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaverCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|x| x.trim().to_string())
                .filter(|x| !x.is_empty())
        };

        let client_id = get(NAVER_CLIENT_ID).filter(|x| x != NAVER_PLACEHOLDER);
        let client_secret = get(NAVER_CLIENT_SECRET);
        let naver = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(NaverCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Self {
            kakao_map_key: get(KAKAO_MAP_API_KEY),
            weather_key: get(WEATHER_API_KEY),
            exchange_key: get(EXCHANGE_API_KEY),
            naver,
        }
    }

    /// The search tool cannot do anything without these.
    pub fn naver(&self) -> Result<NaverCredentials> {
        self.naver.clone().with_context(|| {
            format!("⚠️ Set {NAVER_CLIENT_ID} and {NAVER_CLIENT_SECRET} in your environment or .env file")
        })
    }

    pub fn log_missing(&self) {
        for (name, value) in [
            (KAKAO_MAP_API_KEY, &self.kakao_map_key),
            (WEATHER_API_KEY, &self.weather_key),
            (EXCHANGE_API_KEY, &self.exchange_key),
        ] {
            if value.is_none() {
                warn!("{name} is not set");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn reads_keys() {
        let config = config(&[
            (KAKAO_MAP_API_KEY, "kakao"),
            (WEATHER_API_KEY, " weather "),
            (EXCHANGE_API_KEY, ""),
            (NAVER_CLIENT_ID, "id"),
            (NAVER_CLIENT_SECRET, "secret"),
        ]);
        assert_eq!(config.kakao_map_key.as_deref(), Some("kakao"));
        assert_eq!(config.weather_key.as_deref(), Some("weather"));
        assert_eq!(config.exchange_key, None);
        assert_eq!(
            config.naver().unwrap(),
            NaverCredentials {
                client_id: "id".to_string(),
                client_secret: "secret".to_string()
            }
        );
    }

    #[test]
    fn naver_needs_both_halves() {
        assert!(config(&[(NAVER_CLIENT_ID, "id")]).naver().is_err());
        assert!(config(&[(NAVER_CLIENT_SECRET, "secret")]).naver().is_err());
        assert!(config(&[]).naver().is_err());
    }

    #[test]
    fn placeholder_counts_as_missing() {
        let config = config(&[
            (NAVER_CLIENT_ID, NAVER_PLACEHOLDER),
            (NAVER_CLIENT_SECRET, "secret"),
        ]);
        assert!(config.naver.is_none());
    }

    #[test]
    fn secret_is_not_logged() {
        let credentials = NaverCredentials {
            client_id: "id".to_string(),
            client_secret: "hunter2".to_string(),
        };
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }
}
