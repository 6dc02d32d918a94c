//! Per-panel fetch lifecycle with stale-result discard.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::fetch::{FetchResult, PlotFetcher};
use crate::render::{ChartRenderer, Container, RenderedChart};

/// Display state of one gallery panel.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelState {
    Idle,
    Loading,
    Displayed(RenderedChart),
    Failed(String),
}

impl PanelState {
    pub fn is_settled(&self) -> bool {
        matches!(self, PanelState::Displayed(_) | PanelState::Failed(_))
    }
}

/// State machine for a single panel.
///
/// Every fetch is tagged with a generation taken at the time it starts.
/// Changing the plot type bumps the generation, so a result arriving for a
/// superseded fetch can never overwrite the state of a newer one. Unmounting
/// invalidates the generation outright.
#[derive(Debug)]
pub struct Panel {
    plot_type: String,
    state: PanelState,
    generation: u64,
    mounted: bool,
}

impl Panel {
    pub fn new(plot_type: impl Into<String>) -> Self {
        Self {
            plot_type: plot_type.into(),
            state: PanelState::Idle,
            generation: 0,
            mounted: true,
        }
    }

    pub fn plot_type(&self) -> &str {
        &self.plot_type
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Begins a fetch for the current plot type and returns the generation
    /// the caller must present when applying the result.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = PanelState::Loading;
        self.generation
    }

    /// Switches the panel to a new plot type and restarts the lifecycle.
    /// Any in-flight fetch is superseded; its result is dropped on arrival.
    pub fn set_plot_type(&mut self, plot_type: impl Into<String>) -> u64 {
        self.plot_type = plot_type.into();
        self.begin()
    }

    /// Applies a fetch outcome. Results carrying a superseded generation, or
    /// arriving after unmount, are discarded without touching the state.
    pub fn apply(&mut self, generation: u64, result: FetchResult<RenderedChart>) {
        if !self.mounted || generation != self.generation {
            debug!(
                plot_type = %self.plot_type,
                generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return;
        }

        self.state = match result {
            FetchResult::Pending => PanelState::Loading,
            FetchResult::Success(chart) => PanelState::Displayed(chart),
            FetchResult::Failure(reason) => PanelState::Failed(reason),
        };
    }

    /// Re-fits a displayed chart to a resized container, without a new fetch.
    pub fn resize(&mut self, container: Container) {
        if let PanelState::Displayed(chart) = &mut self.state {
            chart.resize(container);
        }
    }

    /// Detaches the panel. The generation is invalidated so no in-flight
    /// result can mutate it afterwards.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation += 1;
    }
}

/// Drives a [`Panel`] on the tokio runtime: one spawned task per fetch, with
/// rendering applied on completion. Panels are independent; there is no
/// cross-panel ordering.
#[derive(Clone)]
pub struct PanelHandle {
    panel: Arc<Mutex<Panel>>,
    fetcher: PlotFetcher,
    renderer: ChartRenderer,
    container: Container,
}

impl PanelHandle {
    /// Mounts a panel and starts its first fetch.
    pub fn mount(fetcher: PlotFetcher, container: Container, plot_type: impl Into<String>) -> Self {
        let mut panel = Panel::new(plot_type);
        let generation = panel.begin();
        let plot_type = panel.plot_type().to_string();

        let handle = Self {
            panel: Arc::new(Mutex::new(panel)),
            fetcher,
            renderer: ChartRenderer,
            container,
        };
        handle.spawn_fetch(generation, plot_type);
        handle
    }

    /// Switches the panel to a new plot type and fetches it.
    pub fn set_plot_type(&self, plot_type: impl Into<String>) {
        let plot_type = plot_type.into();
        let generation = self.panel.lock().set_plot_type(plot_type.clone());
        self.spawn_fetch(generation, plot_type);
    }

    pub fn state(&self) -> PanelState {
        self.panel.lock().state().clone()
    }

    pub fn plot_type(&self) -> String {
        self.panel.lock().plot_type().to_string()
    }

    /// Propagates a container resize to the displayed chart.
    pub fn resize(&mut self, container: Container) {
        self.container = container;
        self.panel.lock().resize(container);
    }

    /// Detaches the panel; any in-flight result is discarded on arrival.
    pub fn unmount(&self) {
        self.panel.lock().unmount();
    }

    fn spawn_fetch(&self, generation: u64, plot_type: String) {
        let panel = Arc::clone(&self.panel);
        let fetcher = self.fetcher.clone();
        let renderer = self.renderer;
        let container = self.container;

        tokio::spawn(async move {
            let result = fetcher
                .fetch(&plot_type)
                .await
                .map(|spec| renderer.render(&spec, container));
            panel.lock().apply(generation, result.into());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chart() -> RenderedChart {
        let spec = serde_json::from_value(json!({ "data": [{ "y": [1] }] })).unwrap();
        ChartRenderer.render(&spec, Container::new(640.0, 480.0))
    }

    #[test]
    fn mount_then_success_displays_the_chart() {
        let mut panel = Panel::new("scatter");
        assert_eq!(*panel.state(), PanelState::Idle);

        let generation = panel.begin();
        assert_eq!(*panel.state(), PanelState::Loading);

        panel.apply(generation, FetchResult::Success(chart()));
        assert!(matches!(panel.state(), PanelState::Displayed(_)));
    }

    #[test]
    fn failure_surfaces_the_reason() {
        let mut panel = Panel::new("density");
        let generation = panel.begin();

        panel.apply(
            generation,
            FetchResult::Failure("HTTP error: 500 Internal Server Error".into()),
        );
        match panel.state() {
            PanelState::Failed(reason) => assert!(reason.contains("500")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn superseded_generation_is_discarded() {
        let mut panel = Panel::new("scatter");
        let first = panel.begin();
        let second = panel.set_plot_type("box");

        // The stale result for "scatter" arrives after the switch to "box".
        panel.apply(first, FetchResult::Success(chart()));
        assert_eq!(*panel.state(), PanelState::Loading);

        panel.apply(second, FetchResult::Success(chart()));
        assert!(matches!(panel.state(), PanelState::Displayed(_)));
        assert_eq!(panel.plot_type(), "box");
    }

    #[test]
    fn stale_result_cannot_regress_a_displayed_panel() {
        let mut panel = Panel::new("scatter");
        let first = panel.begin();
        let second = panel.set_plot_type("box");

        panel.apply(second, FetchResult::Success(chart()));
        panel.apply(first, FetchResult::Failure("HTTP error: 500".into()));

        assert!(matches!(panel.state(), PanelState::Displayed(_)));
    }

    #[test]
    fn unmount_invalidates_in_flight_results() {
        let mut panel = Panel::new("rose");
        let generation = panel.begin();
        panel.unmount();

        panel.apply(generation, FetchResult::Success(chart()));
        assert_eq!(*panel.state(), PanelState::Loading);
        assert!(!panel.is_mounted());
    }

    #[test]
    fn resize_only_touches_a_displayed_chart() {
        let mut panel = Panel::new("heatmap");
        let generation = panel.begin();

        // Resizing while loading is a no-op.
        panel.resize(Container::new(100.0, 100.0));
        assert_eq!(*panel.state(), PanelState::Loading);

        panel.apply(generation, FetchResult::Success(chart()));
        panel.resize(Container::new(320.0, 240.0));
        match panel.state() {
            PanelState::Displayed(chart) => {
                assert_eq!(chart.width, 320.0);
                assert_eq!(chart.height, 240.0);
            }
            other => panic!("expected Displayed, got {other:?}"),
        }
    }
}
