use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::error::{GenerateError, Result};
use crate::palette::Palette;
use crate::render;
use crate::template::Template;

pub const STEPS: i32 = 360;
pub const DEFAULT_OUT_DIR: &str = "generated";
pub const DEFAULT_PREFIX: &str = "far_nearer";

const PROGRESS_TEMPLATE: &str = "{elapsed_precise} {wide_bar} {percent:>02}% {pos}/{len}";

#[derive(Debug, Clone)]
pub struct Generator {
    pub palette: Palette,
    pub out_dir: PathBuf,
    pub prefix: String,
    pub step: usize,
    pub progress: bool,
    // rasterized copy next to each text file
    pub png: bool,
}

impl Default for Generator {
    fn default() -> Self {
        Generator {
            palette: Palette::far_nearer(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            prefix: DEFAULT_PREFIX.to_string(),
            step: 1,
            progress: false,
            png: false,
        }
    }
}

impl Generator {
    pub fn new<P: Into<PathBuf>>(out_dir: P) -> Generator {
        Generator {
            out_dir: out_dir.into(),
            ..Default::default()
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = i32> {
        (0..STEPS).step_by(self.step.max(1))
    }

    pub fn render_step(&self, template: &Template, step: i32) -> String {
        template.render(&self.palette.replacements_at(step))
    }

    pub fn output_path(&self, step: i32, extension: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}{}.{}", self.prefix, step, extension))
    }

    // The first failure ends the run. Files written before it stay on disk.
    pub fn run(&self, template: &Template) -> Result<Vec<PathBuf>> {
        self.check_template(template);
        create_out_folder(&self.out_dir)?;

        let count = self.steps().count();
        info!(
            template = %template.path().display(),
            out_dir = %self.out_dir.display(),
            count,
            png = self.png,
            "generating"
        );

        let bar = if self.progress {
            ProgressBar::new(count as u64).with_style(
                ProgressStyle::with_template(PROGRESS_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            )
        } else {
            ProgressBar::hidden()
        };

        let extension = template.extension();
        let mut written = Vec::with_capacity(if self.png { count * 2 } else { count });
        for step in self.steps() {
            let out_file = self.output_path(step, extension);
            let result = self.render_step(template, step);
            if let Err(source) = fs::write(&out_file, &result) {
                bar.abandon();
                return Err(GenerateError::WriteOutput {
                    path: out_file,
                    source,
                });
            }
            debug!(step, path = %out_file.display(), "saved");
            written.push(out_file);

            if self.png {
                let png_file = self.output_path(step, "png");
                if let Err(err) = render::save_png(&result, &png_file) {
                    bar.abandon();
                    return Err(err);
                }
                debug!(step, path = %png_file.display(), "rendered");
                written.push(png_file);
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        info!(count = written.len(), out_dir = %self.out_dir.display(), "done");
        Ok(written)
    }

    fn check_template(&self, template: &Template) {
        let tokens = self.palette.tokens();
        for token in template.missing_tokens(&tokens) {
            warn!(token, template = %template.path().display(), "token not found in template");
        }
        for token in template.unknown_tokens(&tokens) {
            warn!(token = %token, template = %template.path().display(), "token will not be replaced");
        }
        for reference in template.references(&tokens) {
            debug!(
                element = %reference.element,
                attribute = %reference.attribute,
                token = %reference.token,
                "token reference"
            );
        }
    }
}

// Succeeds when the folder is already there.
fn create_out_folder(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateOutputDir {
        path: out_dir.to_path_buf(),
        source,
    })
}
