//! Read-only gallery view model.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use transect_viz::{CategoryGroup, GalleryController};

use crate::AppState;

/// Query parameters for the gallery view
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GalleryQuery {
    /// Category filter; defaults to "All"
    pub category: Option<String>,

    /// Column count, clamped to [1, 5]
    pub columns: Option<u32>,
}

/// View model for the gallery surface
#[derive(Serialize)]
pub struct GalleryView {
    pub categories: Vec<String>,
    pub selected_category: String,
    pub columns: u32,
    pub grid_template: String,
    pub groups: Vec<CategoryGroup>,
}

/// GET /gallery - Gallery composition for the requested filter and layout
pub async fn gallery_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GalleryQuery>,
) -> Json<GalleryView> {
    let mut controller = GalleryController::new(state.catalog.clone());
    if let Some(category) = query.category {
        controller.set_category(category);
    }
    if let Some(columns) = query.columns {
        controller.set_columns(columns);
    }

    Json(GalleryView {
        categories: controller.catalog().categories(),
        selected_category: controller.selected_category().to_string(),
        columns: controller.columns(),
        grid_template: controller.grid_template().css(),
        groups: controller.visible_panels(),
    })
}
