pub mod color;
pub mod hue;

pub use color::{sRGB, Hsl};
pub use hue::{adjust_hue, cycle_hue};
