//! Section plumbing shared by the three dashboard views
//!
//! Each section owns its widgets and fetch state; everything shared
//! (API client, chart registry, runtime handle) travels in a
//! [`SectionContext`]. Fetches run on the tokio runtime and publish
//! their results through the registry; the UI thread only ever reads.

use std::future::Future;
use std::sync::Arc;

use parking_lot::RwLock;

use pv_core::ChartRegistry;

use crate::spec::ChartSpec;

/// Upper bounds on fetched and drawn data, tuned for chart readability.
#[derive(Debug, Clone)]
pub struct FetchLimits {
    /// Points requested per column for user-created charts.
    pub column_points: usize,
    /// Bin count for user-created histograms.
    pub histogram_bins: usize,
    /// Point budget per numeric gallery card.
    pub gallery_points_numeric: usize,
    /// Category cap per categorical gallery card.
    pub gallery_points_categorical: usize,
    /// Bin count for gallery histograms.
    pub gallery_bins: usize,
    /// Samples kept per RGB/HSV channel histogram.
    pub channel_samples: usize,
    /// Clubs requested for the palette comparison.
    pub comparison_clubs: usize,
}

impl Default for FetchLimits {
    fn default() -> Self {
        Self {
            column_points: 100,
            histogram_bins: 20,
            gallery_points_numeric: 30,
            gallery_points_categorical: 20,
            gallery_bins: 15,
            channel_samples: 50,
            comparison_clubs: 10,
        }
    }
}

/// Lifecycle of one asynchronously fetched value.
#[derive(Debug, Clone, Default)]
pub enum Remote<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Remote<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Remote::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<pv_core::Result<T>> for Remote<T> {
    fn from(result: pv_core::Result<T>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(e) => Remote::Failed(e.user_message()),
        }
    }
}

/// Shared handles passed to every section each frame.
#[derive(Clone)]
pub struct SectionContext {
    pub api: Arc<pv_api::Client>,
    pub registry: Arc<RwLock<ChartRegistry<ChartSpec>>>,
    pub runtime: tokio::runtime::Handle,
    pub egui_ctx: egui::Context,
    pub limits: FetchLimits,
}

impl SectionContext {
    /// Run a fetch on the runtime and repaint once it settles.
    pub fn spawn(&self, task: impl Future<Output = ()> + Send + 'static) {
        let egui_ctx = self.egui_ctx.clone();
        self.runtime.spawn(async move {
            task.await;
            egui_ctx.request_repaint();
        });
    }

    /// Publish a chart into a slot, releasing whatever held it before.
    pub fn publish(&self, slot: &str, spec: ChartSpec) {
        self.registry.write().create(slot, spec);
    }

    /// Drop every slot under a prefix (used when a panel closes).
    pub fn release_charts(&self, prefix: &str) {
        self.registry.write().release_prefix(prefix);
    }
}

/// One dashboard section (CSV, images, text).
pub trait SectionView {
    /// Stable identifier, also the dock-tab key.
    fn id(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn ui(&mut self, ctx: &SectionContext, ui: &mut egui::Ui);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_core::Error;

    #[test]
    fn remote_starts_idle() {
        let state: Remote<u32> = Remote::default();
        assert!(state.is_idle());
        assert!(state.ready().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn remote_from_result() {
        let ok: Remote<u32> = Ok(7).into();
        assert_eq!(ok.ready(), Some(&7));

        let err: Remote<u32> = Err(Error::Backend("file not found".into())).into();
        assert!(err.error().is_some());
    }

    #[test]
    fn default_limits_bound_every_chart() {
        let limits = FetchLimits::default();
        assert_eq!(limits.column_points, 100);
        assert_eq!(limits.histogram_bins, 20);
        assert!(limits.gallery_points_numeric <= limits.column_points);
        assert!(limits.gallery_bins <= limits.histogram_bins);
    }
}
