//! Reusable UI components

mod button;

pub use button::{render_button, render_tab_button, BUTTON_HEIGHT};
