use std::path::Path;

use resvg::{tiny_skia, usvg};

use crate::error::{GenerateError, Result};

// Rasterizes at the size the SVG declares. Text needs fonts, and none are loaded,
// so text elements are skipped.
pub fn save_png(text: &str, out_file: &Path) -> Result<()> {
    let render_error = |reason: String| GenerateError::RenderPng {
        path: out_file.to_path_buf(),
        reason,
    };

    let tree = usvg::Tree::from_str(text, &usvg::Options::default())
        .map_err(|err| render_error(err.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| render_error(format!("bad canvas size {}x{}", size.width(), size.height())))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(out_file)
        .map_err(|err| render_error(err.to_string()))
}
