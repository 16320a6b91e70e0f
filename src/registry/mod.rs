// src/registry/mod.rs
use crate::config::{Config, IndicatorKind};
use crate::health::{HealthIndicator, HealthReport, RandomCheckIndicator};
use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("indicator '{0}' is already registered")]
    DuplicateIndicator(String),
    #[error("indicator name must not be empty")]
    EmptyName,
}

/// Explicit name-to-indicator registry.
///
/// Replaces annotation-driven discovery: every probe is registered under a
/// required name at startup, and monitoring callers poll by name. Shared
/// behind an `Arc` and safe to poll from many tasks at once.
#[derive(Default)]
pub struct HealthRegistry {
    indicators: DashMap<String, Arc<dyn HealthIndicator>>,
}

impl HealthRegistry {
    pub fn new() -> Self {
        Self {
            indicators: DashMap::new(),
        }
    }

    /// Build a registry from config, one indicator per declaration.
    pub fn from_config(config: &Config) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for decl in &config.indicators {
            let indicator: Arc<dyn HealthIndicator> = match decl.kind {
                IndicatorKind::Random { start, end } => {
                    Arc::new(RandomCheckIndicator::new(start, end))
                }
            };
            registry.register(&decl.name, indicator)?;
        }
        Ok(registry)
    }

    pub fn register(
        &self,
        name: &str,
        indicator: Arc<dyn HealthIndicator>,
    ) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        // Entry insert keeps the duplicate check atomic under
        // concurrent registration.
        match self.indicators.entry(name.to_string()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                Err(RegistryError::DuplicateIndicator(name.to_string()))
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(indicator);
                info!(indicator = name, "registered health indicator");
                Ok(())
            }
        }
    }

    /// Invoke one indicator by name. `None` if no probe is registered
    /// under that name.
    pub fn report(&self, name: &str) -> Option<HealthReport> {
        self.indicators.get(name).map(|entry| entry.value().health())
    }

    /// Invoke every registered indicator and collect reports by name.
    /// No status roll-up happens here; merging is the caller's concern.
    pub fn report_all(&self) -> BTreeMap<String, HealthReport> {
        self.indicators
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().health()))
            .collect()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> =
            self.indicators.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}
