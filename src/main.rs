// src/main.rs
use anyhow::Result;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

mod config;
mod health;
mod registry;
mod metrics;

use crate::{
    metrics::{MetricsCollector, MetricsRegistry, Timer},
    registry::HealthRegistry,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("health_probe=debug".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    // Initialize metrics
    let metrics_registry = MetricsRegistry::new()?;
    let metrics = metrics_registry.collector();

    // Build the indicator registry from explicit config entries
    let registry = Arc::new(HealthRegistry::from_config(&config)?);
    info!(
        indicators = registry.len(),
        "Health registry ready: {:?}",
        registry.names()
    );

    if !config.poll.enabled {
        info!("Polling disabled, running a single pass");
        poll_once(&registry, &metrics).await;
    } else {
        run_poll_loop(&config, registry, metrics).await;
    }

    // Final snapshot for operators scraping logs instead of an endpoint
    let snapshot = String::from_utf8_lossy(&metrics_registry.gather()).into_owned();
    info!("Metrics snapshot:\n{}", snapshot);

    Ok(())
}

async fn run_poll_loop(
    config: &config::Config,
    registry: Arc<HealthRegistry>,
    metrics: Arc<MetricsCollector>,
) {
    let mut interval = tokio::time::interval(config.poll.interval());
    info!("Starting poll loop with interval: {:?}", config.poll.interval());

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                poll_once(&registry, &metrics).await;
            }
            _ = &mut shutdown => {
                info!("Poll loop shutting down");
                break;
            }
        }
    }
}

async fn poll_once(registry: &Arc<HealthRegistry>, metrics: &Arc<MetricsCollector>) {
    let mut tasks = Vec::new();

    for name in registry.names() {
        let registry = registry.clone();
        let task = tokio::spawn(async move {
            let timer = Timer::new();
            let report = registry.report(&name);
            (name, report, timer.elapsed())
        });
        tasks.push(task);
    }

    let results = futures::future::join_all(tasks).await;

    let mut up_count = 0;
    let mut down_count = 0;

    for result in results {
        let Ok((name, Some(report), elapsed)) = result else {
            continue;
        };

        metrics.record_report(&name, &report, elapsed);

        if report.is_up() {
            up_count += 1;
            info!(indicator = %name, status = %report.health_status(), "probe ok");
        } else {
            down_count += 1;
            warn!(
                indicator = %name,
                status = %report.health_status(),
                details = ?report.details(),
                "probe reported failure"
            );
        }
    }

    info!("Poll complete: {} up, {} down", up_count, down_count);
}

// Graceful shutdown handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
