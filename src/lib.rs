//! visuals-rs: a data-visualization dashboard page.
//!
//! The page loads a CSV table and a JSON document, keeps a small per-session
//! state, and renders one static and two interactive charts. Every user event
//! reruns the whole page through the pure [`api::render_page`] function; the
//! resulting [`view::PageView`] is handed to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;
pub mod view;

pub use api::{DashboardApp, DashboardConfig};
pub use error::{DashboardError, DashboardResult};
