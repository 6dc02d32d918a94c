//! Responsive sizing and default merging for fetched charts.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::chart::ChartSpec;

/// Dimensions of the element a chart is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    pub width: f64,
    pub height: f64,
}

impl Container {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A chart specification resolved against responsive defaults and sized to
/// its container.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderedChart {
    pub data: Vec<Value>,
    pub layout: Map<String, Value>,
    pub config: Map<String, Value>,
    pub width: f64,
    pub height: f64,
}

impl RenderedChart {
    /// Re-fits the chart to a resized container. Series data and merged
    /// options are untouched; no new fetch is needed.
    pub fn resize(&mut self, container: Container) {
        self.width = container.width;
        self.height = container.height;
    }

    pub fn trace_count(&self) -> usize {
        self.data.len()
    }
}

/// Merges chart specifications with responsive display defaults.
///
/// The defaults are overridable: a key the specification already sets is
/// left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChartRenderer;

impl ChartRenderer {
    pub fn render(&self, spec: &ChartSpec, container: Container) -> RenderedChart {
        let mut layout = spec.layout.clone();
        layout
            .entry("autosize".to_string())
            .or_insert(Value::Bool(true));
        layout
            .entry("margin".to_string())
            .or_insert_with(|| json!({ "t": 40, "b": 40, "l": 40, "r": 20 }));

        let mut config = spec.config.clone();
        config
            .entry("responsive".to_string())
            .or_insert(Value::Bool(true));

        RenderedChart {
            data: spec.data.clone(),
            layout,
            config,
            width: container.width,
            height: container.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with(layout: Value, config: Value) -> ChartSpec {
        serde_json::from_value(json!({
            "data": [{ "x": [1], "y": [2] }],
            "layout": layout,
            "config": config,
        }))
        .unwrap()
    }

    #[test]
    fn fills_responsive_defaults_when_absent() {
        let spec = spec_with(json!({}), json!({}));
        let chart = ChartRenderer.render(&spec, Container::new(640.0, 480.0));

        assert_eq!(chart.layout["autosize"], json!(true));
        assert_eq!(chart.layout["margin"], json!({ "t": 40, "b": 40, "l": 40, "r": 20 }));
        assert_eq!(chart.config["responsive"], json!(true));
        assert_eq!(chart.width, 640.0);
        assert_eq!(chart.height, 480.0);
    }

    #[test]
    fn specification_values_win_on_conflicting_keys() {
        let spec = spec_with(
            json!({ "autosize": false, "margin": { "t": 0 } }),
            json!({ "responsive": false }),
        );
        let chart = ChartRenderer.render(&spec, Container::new(100.0, 100.0));

        assert_eq!(chart.layout["autosize"], json!(false));
        assert_eq!(chart.layout["margin"], json!({ "t": 0 }));
        assert_eq!(chart.config["responsive"], json!(false));
    }

    #[test]
    fn resize_changes_dimensions_only() {
        let spec = spec_with(json!({ "title": "Beach Width" }), json!({}));
        let mut chart = ChartRenderer.render(&spec, Container::new(640.0, 480.0));
        let data_before = chart.data.clone();
        let layout_before = chart.layout.clone();

        chart.resize(Container::new(320.0, 240.0));

        assert_eq!(chart.width, 320.0);
        assert_eq!(chart.height, 240.0);
        assert_eq!(chart.data, data_before);
        assert_eq!(chart.layout, layout_before);
    }
}
