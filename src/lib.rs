//! Gradient-tinted list rendering: a hex color codec, a linear RGB gradient
//! generator, and a decorator that assigns one gradient color per list item.

pub mod app;
pub mod color;
pub mod decorate;
pub mod gradient;
pub mod items;
pub mod palette;
pub mod ready;

pub use color::{ParseColorError, Rgb};
pub use gradient::{generate_gradient, GradientError, GradientSpec};
