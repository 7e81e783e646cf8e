use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Retrieves raw source payloads: remote JSON over HTTP, with a local file
/// pair as the fallback when a side has no configured URL.
pub struct SourceResolver {
    client: Client,
    users_file: PathBuf,
    logs_file: PathBuf,
}

impl SourceResolver {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            users_file: PathBuf::from(&config.users_file),
            logs_file: PathBuf::from(&config.logs_file),
        })
    }

    /// GET a URL and decode the body as JSON. Transport failures, non-2xx
    /// statuses and undecodable bodies all fail the run.
    pub async fn fetch_json(&self, url: &str) -> AppResult<Value> {
        let fetched: Result<Value, reqwest::Error> = async {
            let response = self.client.get(url).send().await?;
            let response = response.error_for_status()?;
            response.json::<Value>().await
        }
        .await;

        match fetched {
            Ok(value) => {
                info!("✓ Fetched source: {}", url);
                Ok(value)
            }
            Err(e) => Err(AppError::SourceFetch {
                url: url.to_string(),
                cause: e.to_string(),
            }),
        }
    }

    /// Load and decode both local fallback files. Either file failing to
    /// read or parse fails the run.
    pub fn load_local_pair(&self) -> AppResult<(Value, Value)> {
        let users = Self::load_file(&self.users_file)?;
        let logs = Self::load_file(&self.logs_file)?;
        info!(
            "✓ Loaded local fallback files: {}, {}",
            self.users_file.display(),
            self.logs_file.display()
        );
        Ok((users, logs))
    }

    fn load_file(path: &PathBuf) -> AppResult<Value> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::LocalFallback(format!("{}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| AppError::LocalFallback(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_for(users_file: &std::path::Path, logs_file: &std::path::Path) -> SourceResolver {
        SourceResolver::new(&Config {
            bind_address: "127.0.0.1:0".to_string(),
            users_file: users_file.to_string_lossy().into_owned(),
            logs_file: logs_file.to_string_lossy().into_owned(),
            fetch_timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_load_local_pair() {
        let dir = std::env::temp_dir().join("validation-server-resolver-ok");
        std::fs::create_dir_all(&dir).unwrap();
        let users_path = dir.join("users.json");
        let logs_path = dir.join("points.json");
        std::fs::write(&users_path, r#"{"users": [{"_id": 1, "points": 3}]}"#).unwrap();
        std::fs::write(&logs_path, r#"{"points_logs": [{"user": 1, "points": 3}]}"#).unwrap();

        let resolver = resolver_for(&users_path, &logs_path);
        let (users, logs) = resolver.load_local_pair().unwrap();
        assert!(users.get("users").is_some());
        assert!(logs.get("points_logs").is_some());
    }

    #[test]
    fn test_missing_file_is_local_fallback_error() {
        let dir = std::env::temp_dir().join("validation-server-resolver-missing");
        std::fs::create_dir_all(&dir).unwrap();
        let users_path = dir.join("users.json");
        std::fs::write(&users_path, r#"{"users": []}"#).unwrap();

        let resolver = resolver_for(&users_path, &dir.join("no-such.json"));
        let err = resolver.load_local_pair().unwrap_err();
        assert!(matches!(err, AppError::LocalFallback(_)));
        assert!(err.to_string().starts_with("Failed to load JSON files:"));
    }

    #[test]
    fn test_unparsable_file_is_local_fallback_error() {
        let dir = std::env::temp_dir().join("validation-server-resolver-bad");
        std::fs::create_dir_all(&dir).unwrap();
        let users_path = dir.join("users.json");
        let logs_path = dir.join("points.json");
        std::fs::write(&users_path, "not json at all").unwrap();
        std::fs::write(&logs_path, r#"{"points_logs": []}"#).unwrap();

        let resolver = resolver_for(&users_path, &logs_path);
        assert!(matches!(
            resolver.load_local_pair().unwrap_err(),
            AppError::LocalFallback(_)
        ));
    }
}
