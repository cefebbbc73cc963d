//! Map module - interactive HTML rendering of the dataset

pub mod filter;
pub mod gradient;
mod renderer;
mod template;

pub use filter::{visible_subset, FilterOptions, FilterState, Selection, ALL};
pub use gradient::{RentRange, Rgb};
pub use renderer::{
    render_map, MapRenderer, MapSettings, RenderError, DEFAULT_OUTPUT, INITIAL_ZOOM, PARIS_CENTER,
};
