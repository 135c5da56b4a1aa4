//! This crate serves as a component library for the Glider web-UI.
//!
//! Components which are generic enough that they could be
//! used in another web-UI belong here rather than in the
//! application crate. Keeping them in a separate crate also
//! helps with incremental compilation.

pub use toggle_slider::{SliderState, ToggleSlider};
pub use util::signal::{ToggleSignal, Toggled};

mod toggle_slider;
mod util;
