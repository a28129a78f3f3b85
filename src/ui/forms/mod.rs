//! Form rendering module
//!
//! This module contains UI components for rendering quote forms:
//! - `field_renderer`: Field rendering utilities
//! - `wizard`: The multi-step form screen
//! - `confirmation`: The screen shown after submission

mod confirmation;
mod field_renderer;
mod wizard;

pub use confirmation::draw as draw_confirmation;
pub use wizard::draw as draw_wizard;
