pub mod error;
pub mod generate;
pub mod palette;
pub mod render;
pub mod template;

pub use error::GenerateError;
pub use generate::Generator;
pub use palette::{Palette, Swatch};
pub use template::Template;
