//! Diagnosis code frequency analyzer.
//!
//! Core logic lives in [`data`]; [`render`] formats reports without any UI
//! dependency.  Two surfaces consume the library: the egui desktop shell
//! (`src/main.rs`) and the headless CLI (`src/bin/dxq.rs`).

pub mod app;
pub mod data;
pub mod error;
pub mod render;
pub mod state;
pub mod ui;
