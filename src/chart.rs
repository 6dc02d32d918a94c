//! Serialized chart specifications produced by the plot source.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured chart description: series data, layout, and rendering options.
///
/// The gallery does not interpret the contents beyond handing them to the
/// renderer; malformed series data surfaces downstream, not here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Series traces, one value per trace.
    #[serde(default)]
    pub data: Vec<Value>,
    /// Layout options (titles, axes, margins).
    #[serde(default)]
    pub layout: Map<String, Value>,
    /// Rendering options.
    #[serde(default)]
    pub config: Map<String, Value>,
}

impl ChartSpec {
    pub fn trace_count(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layout_and_config_default_to_empty() {
        let spec: ChartSpec =
            serde_json::from_value(json!({ "data": [{ "x": [1, 2], "y": [3, 4] }] })).unwrap();
        assert_eq!(spec.trace_count(), 1);
        assert!(spec.layout.is_empty());
        assert!(spec.config.is_empty());
    }
}
