//! Filter and layout state for the gallery view.

use serde::Serialize;

use crate::catalog::{ALL_CATEGORY, PlotCatalog, PlotTypeEntry};

/// Gap between grid tracks, in pixels.
pub const GRID_GAP_PX: u32 = 30;

pub const MIN_COLUMNS: u32 = 1;
pub const MAX_COLUMNS: u32 = 5;
pub const DEFAULT_COLUMNS: u32 = 2;

/// A responsive grid definition: `columns` equal-width tracks separated by a
/// fixed gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridTemplate {
    pub columns: u32,
    pub gap_px: u32,
}

impl GridTemplate {
    /// CSS `grid-template-columns` value for this template.
    pub fn css(&self) -> String {
        format!(
            "repeat({n}, calc((100% - ({gap}px * ({n} - 1))) / {n}))",
            n = self.columns,
            gap = self.gap_px
        )
    }
}

/// Entries sharing a category, in catalog declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub entries: Vec<PlotTypeEntry>,
}

/// Owns the gallery's filter and layout state and derives the visible subset
/// of the catalog.
///
/// State is mutated only by the explicit setters below, never by fetch
/// completions; deriving the visible panels is a pure recomputation with no
/// I/O and no failure modes.
#[derive(Clone, Debug)]
pub struct GalleryController {
    catalog: PlotCatalog,
    selected_category: String,
    columns: u32,
}

impl GalleryController {
    pub fn new(catalog: PlotCatalog) -> Self {
        Self {
            catalog,
            selected_category: ALL_CATEGORY.to_string(),
            columns: DEFAULT_COLUMNS,
        }
    }

    pub fn catalog(&self) -> &PlotCatalog {
        &self.catalog
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Replaces the selected category. Any string is accepted; a value that
    /// matches no catalog category simply yields an empty gallery.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    /// Sets the column count, clamped to `[MIN_COLUMNS, MAX_COLUMNS]`.
    pub fn set_columns(&mut self, columns: u32) {
        self.columns = columns.clamp(MIN_COLUMNS, MAX_COLUMNS);
    }

    /// The visible entries, grouped by category.
    ///
    /// Group order follows category first-encounter order in the catalog;
    /// entries within a group keep their declaration order.
    pub fn visible_panels(&self) -> Vec<CategoryGroup> {
        let show_all = self.selected_category == ALL_CATEGORY;
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for entry in self.catalog.entries() {
            if !show_all && entry.category != self.selected_category {
                continue;
            }
            match groups.iter_mut().find(|g| g.category == entry.category) {
                Some(group) => group.entries.push(entry.clone()),
                None => groups.push(CategoryGroup {
                    category: entry.category.clone(),
                    entries: vec![entry.clone()],
                }),
            }
        }

        groups
    }

    pub fn grid_template(&self) -> GridTemplate {
        GridTemplate {
            columns: self.columns,
            gap_px: GRID_GAP_PX,
        }
    }
}
