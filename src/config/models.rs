// src/config/models.rs
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub poll: PollConfig,
    pub indicators: Vec<IndicatorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    #[serde(default = "default_poll_interval_secs")]
    pub interval_secs: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_poll_interval_secs(),
            enabled: true,
        }
    }
}

/// One indicator declaration. The name is required and explicit; nothing
/// is ever derived from a type name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: IndicatorKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndicatorKind {
    Random {
        #[serde(default)]
        start: i64,
        #[serde(default = "default_range_end")]
        end: i64,
    },
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.poll.enabled && self.poll.interval_secs == 0 {
            bail!("poll.interval_secs must be greater than zero");
        }

        let mut seen = HashSet::new();
        for indicator in &self.indicators {
            if indicator.name.is_empty() {
                bail!("indicator name must not be empty");
            }
            if !seen.insert(indicator.name.as_str()) {
                bail!("duplicate indicator name: {}", indicator.name);
            }

            match indicator.kind {
                IndicatorKind::Random { start, end } => {
                    if start > end {
                        bail!(
                            "indicator {}: range start {} exceeds end {}",
                            indicator.name,
                            start,
                            end
                        );
                    }
                }
            }
        }
        Ok(())
    }
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_range_end() -> i64 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn random_indicator(name: &str, start: i64, end: i64) -> IndicatorConfig {
        IndicatorConfig {
            name: name.to_string(),
            kind: IndicatorKind::Random { start, end },
        }
    }

    #[test]
    fn valid_config_passes() {
        let config = Config {
            poll: PollConfig::default(),
            indicators: vec![random_indicator("db", 0, 1)],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn duplicate_names_fail_validation() {
        let config = Config {
            poll: PollConfig::default(),
            indicators: vec![
                random_indicator("db", 0, 1),
                random_indicator("db", 0, 1),
            ],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_range_fails_validation() {
        let config = Config {
            poll: PollConfig::default(),
            indicators: vec![random_indicator("db", 2, 1)],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn range_defaults_to_zero_one() {
        let yaml = "indicators:\n  - name: db\n    type: random\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        match config.indicators[0].kind {
            IndicatorKind::Random { start, end } => {
                assert_eq!((start, end), (0, 1));
            }
        }
    }
}
