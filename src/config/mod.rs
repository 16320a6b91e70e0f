// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load and validate configuration from a YAML or JSON file, chosen by
/// extension (anything that is not `.yaml`/`.yml` is parsed as JSON).
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_yaml_config() {
        let dir = std::env::temp_dir().join("health-probe-config-test");
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("config.yaml");
        tokio::fs::write(
            &path,
            "poll:\n  interval_secs: 5\nindicators:\n  - name: db\n    type: random\n",
        )
        .await
        .unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.poll.interval_secs, 5);
        assert_eq!(config.indicators[0].name, "db");
    }

    #[tokio::test]
    async fn missing_file_fails_with_context() {
        let err = load_config("does-not-exist.yaml").await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
