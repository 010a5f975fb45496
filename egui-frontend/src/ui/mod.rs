//! # UI Module
//!
//! egui side of the expense timeline: components, interaction state and the
//! `eframe::App` implementation.

pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod state;

pub use app_state::*;
