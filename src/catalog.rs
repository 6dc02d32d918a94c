//! Static taxonomy of the plot types available in the gallery.

use serde::{Deserialize, Serialize};

/// Category value that disables filtering and shows every panel.
pub const ALL_CATEGORY: &str = "All";

/// One plot type the gallery knows how to display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotTypeEntry {
    /// Stable key used to fetch the chart specification.
    pub id: String,
    /// Display name shown above the panel.
    pub label: String,
    /// Grouping key for filtering and section headers.
    pub category: String,
}

impl PlotTypeEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            category: category.into(),
        }
    }
}

/// Ordered, immutable set of plot types.
///
/// Declaration order is display order; category order for the gallery is the
/// order each category is first encountered while walking the entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotCatalog {
    entries: Vec<PlotTypeEntry>,
}

impl PlotCatalog {
    /// Builds a catalog from entries in display order. Ids must be unique.
    pub fn new(entries: Vec<PlotTypeEntry>) -> Self {
        debug_assert!(
            {
                let mut ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
                ids.sort_unstable();
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "plot type ids must be unique"
        );
        Self { entries }
    }

    /// The built-in catalog for the TranSECT coastal-survey dataset.
    pub fn coastal_survey() -> Self {
        Self::new(vec![
            PlotTypeEntry::new("scatter", "Scatter Plot", "Scatter"),
            PlotTypeEntry::new("box", "Box Plot", "Box"),
            PlotTypeEntry::new("litter", "Litter Histogram", "Histogram"),
            PlotTypeEntry::new("beach_width", "Beach Width by Region", "Bar"),
            PlotTypeEntry::new("dunes", "Dunes by Beach (Circular Plot)", "Circular"),
            PlotTypeEntry::new("sediment", "Beaches by Sediment Type", "Bar"),
            PlotTypeEntry::new("dendrogram", "Region Clustering (Dendrogram)", "Clustering"),
            PlotTypeEntry::new("dunes_dendrogram", "Region Clustering (Dunes)", "Clustering"),
            PlotTypeEntry::new(
                "cliff_height_dendrogram",
                "Region Clustering (Cliff Height)",
                "Clustering",
            ),
            PlotTypeEntry::new(
                "vegetation_cover_dendrogram",
                "Region Clustering (Vegetation Cover)",
                "Clustering",
            ),
            PlotTypeEntry::new("density", "Density Map", "Density"),
            PlotTypeEntry::new("time", "Temperature Trends", "Time Series"),
            PlotTypeEntry::new("text", "Beach Characteristics Table", "Table"),
            PlotTypeEntry::new("sediment-distribution", "Sediment Distribution", "Distribution"),
            PlotTypeEntry::new("rose", "Wind Direction Analysis", "Wind Rose"),
            PlotTypeEntry::new("temperature", "Temperature Line Graph", "Temperature Graph"),
            PlotTypeEntry::new("stream", "Stream Graph", "Stream Graph"),
            PlotTypeEntry::new("heatmap", "Beach Profile Heatmap", "Heatmap"),
        ])
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[PlotTypeEntry] {
        &self.entries
    }

    /// Unique category names with [`ALL_CATEGORY`] prepended.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category.clone());
            }
        }
        categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coastal_survey_ids_are_unique() {
        let catalog = PlotCatalog::coastal_survey();
        let mut ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn categories_prepend_all_and_preserve_first_encounter_order() {
        let catalog = PlotCatalog::coastal_survey();
        assert_eq!(
            catalog.categories(),
            vec![
                "All",
                "Scatter",
                "Box",
                "Histogram",
                "Bar",
                "Circular",
                "Clustering",
                "Density",
                "Time Series",
                "Table",
                "Distribution",
                "Wind Rose",
                "Temperature Graph",
                "Stream Graph",
                "Heatmap",
            ]
        );
    }

    #[test]
    fn entry_order_is_stable() {
        let catalog = PlotCatalog::coastal_survey();
        assert_eq!(catalog.len(), 18);
        assert_eq!(catalog.entries()[0].id, "scatter");
        assert_eq!(catalog.entries()[17].id, "heatmap");
    }
}
