//! Gallery composition and chart retrieval pipeline for the TranSECT
//! coastal-survey visualizer.
//!
//! The crate is organized leaf-first:
//!
//! - [`catalog`]: the static taxonomy of plot types and their categories
//! - [`chart`]: serialized chart specifications produced by the plot source
//! - [`fetch`]: asynchronous retrieval of specifications over HTTP
//! - [`render`]: responsive sizing and default merging for fetched charts
//! - [`gallery`]: filter and layout state deriving the visible panel grid
//! - [`panel`]: the per-panel fetch lifecycle with stale-result discard

pub mod catalog;
pub mod chart;
pub mod fetch;
pub mod gallery;
pub mod panel;
pub mod render;

pub use catalog::{ALL_CATEGORY, PlotCatalog, PlotTypeEntry};
pub use chart::ChartSpec;
pub use fetch::{FetchError, FetchResult, PlotFetcher};
pub use gallery::{CategoryGroup, GalleryController, GridTemplate};
pub use panel::{Panel, PanelHandle, PanelState};
pub use render::{ChartRenderer, Container, RenderedChart};

pub mod prelude {
    pub use crate::catalog::*;
    pub use crate::chart::*;
    pub use crate::fetch::*;
    pub use crate::gallery::*;
    pub use crate::panel::*;
    pub use crate::render::*;
}
