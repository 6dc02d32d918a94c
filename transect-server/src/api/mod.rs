//! HTTP handlers

pub mod gallery;
pub mod images;
