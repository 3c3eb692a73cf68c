//! Metrics for store activity.
//!
//! The store records through the `metrics` facade, so nothing is collected
//! until a recorder is installed. [`MetricsRecorder::install`] installs a
//! Prometheus recorder whose output can be rendered on demand.
//!
//! # Example
//!
//! ```rust,no_run
//! use splash_runtime::metrics::MetricsRecorder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let recorder = MetricsRecorder::install()?;
//! // ... drive the store ...
//! if let Some(text) = recorder.render() {
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Duration;
use thiserror::Error;

/// Errors from metrics operations.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to build metrics exporter
    #[error("Failed to build metrics exporter: {0}")]
    Build(String),
    /// Failed to install metrics exporter
    #[error("Failed to install metrics exporter: {0}")]
    Install(String),
}

/// Installed Prometheus recorder.
#[derive(Clone, Default)]
pub struct MetricsRecorder {
    handle: Option<PrometheusHandle>,
}

impl std::fmt::Debug for MetricsRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsRecorder")
            .field("installed", &self.handle.is_some())
            .finish_non_exhaustive()
    }
}

impl MetricsRecorder {
    /// Register metric descriptions and install the global recorder.
    ///
    /// If another recorder is already installed the returned value has no
    /// handle; metrics keep flowing to the existing recorder.
    ///
    /// # Errors
    ///
    /// Returns error if the exporter cannot be built or installed.
    pub fn install() -> Result<Self, MetricsError> {
        describe_metrics();

        let builder = PrometheusBuilder::new()
            .set_buckets_for_metric(
                Matcher::Suffix("duration_seconds".to_string()),
                &[
                    0.000_001, 0.000_005, 0.000_01, 0.000_05, 0.000_1, 0.000_5, 0.001, 0.01,
                ],
            )
            .map_err(|e| MetricsError::Build(e.to_string()))?;

        match builder.install_recorder() {
            Ok(handle) => {
                tracing::info!("Metrics recorder installed");
                Ok(Self {
                    handle: Some(handle),
                })
            },
            Err(e) => {
                let err_msg = e.to_string();
                if err_msg.contains("already initialized") {
                    tracing::warn!("Metrics recorder already initialized, skipping re-initialization");
                    Ok(Self { handle: None })
                } else {
                    Err(MetricsError::Install(err_msg))
                }
            },
        }
    }

    /// Get the metrics handle for rendering.
    #[must_use]
    pub const fn handle(&self) -> Option<&PrometheusHandle> {
        self.handle.as_ref()
    }

    /// Render current metrics in Prometheus text format.
    ///
    /// Returns `None` if this value does not own the installed recorder.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        self.handle.as_ref().map(PrometheusHandle::render)
    }
}

/// Register all metric descriptions.
pub fn describe_metrics() {
    describe_counter!("store.commands.total", "Total number of actions sent to stores");
    describe_counter!(
        "store.shutdown.rejected_actions",
        "Actions rejected because the store was shutting down"
    );
    describe_histogram!(
        "store.reducer.duration_seconds",
        "Time taken to run the reducer for one action"
    );
    describe_histogram!("store.effects.count", "Effects returned per action");
    describe_counter!("store.effects.executed", "Effects executed, labelled by type");
    describe_gauge!("store.state.revision", "Latest state revision");
    describe_counter!(
        "store.history.dropped",
        "Action history entries evicted because the log was full"
    );
}

/// Store metrics recorder.
pub struct StoreMetrics;

impl StoreMetrics {
    /// Record one reduced action.
    pub fn record_reduce(duration: Duration, effect_count: usize, revision: u64) {
        counter!("store.commands.total").increment(1);
        histogram!("store.reducer.duration_seconds").record(duration.as_secs_f64());
        // Note: Precision loss acceptable for metrics (counts < 2^52)
        #[allow(clippy::cast_precision_loss)]
        {
            histogram!("store.effects.count").record(effect_count as f64);
            gauge!("store.state.revision").set(revision as f64);
        }
    }

    /// Record an executed effect of the given kind.
    pub fn record_effect(kind: &'static str) {
        counter!("store.effects.executed", "type" => kind).increment(1);
    }

    /// Record an action rejected during shutdown.
    pub fn record_rejected() {
        counter!("store.shutdown.rejected_actions").increment(1);
    }
}
