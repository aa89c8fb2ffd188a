use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_TEMPLATE: u8 = 2;
pub const EXIT_OUTPUT_DIR: u8 = 3;
pub const EXIT_WRITE: u8 = 4;
pub const EXIT_RENDER: u8 = 5;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("failed to read template {}: {source}", .path.display())]
    ReadTemplate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render {}: {reason}", .path.display())]
    RenderPng { path: PathBuf, reason: String },
}

impl GenerateError {
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::ReadTemplate { .. } => EXIT_TEMPLATE,
            GenerateError::CreateOutputDir { .. } => EXIT_OUTPUT_DIR,
            GenerateError::WriteOutput { .. } => EXIT_WRITE,
            GenerateError::RenderPng { .. } => EXIT_RENDER,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        match self {
            GenerateError::ReadTemplate { path, .. }
            | GenerateError::CreateOutputDir { path, .. }
            | GenerateError::WriteOutput { path, .. }
            | GenerateError::RenderPng { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    fn not_found() -> Error {
        Error::new(ErrorKind::NotFound, "no such file")
    }

    #[test]
    fn test_exit_codes() {
        let errors = [
            GenerateError::ReadTemplate {
                path: "t.svg".into(),
                source: not_found(),
            },
            GenerateError::CreateOutputDir {
                path: "generated".into(),
                source: not_found(),
            },
            GenerateError::WriteOutput {
                path: "generated/far_nearer0.svg".into(),
                source: not_found(),
            },
            GenerateError::RenderPng {
                path: "generated/far_nearer0.png".into(),
                reason: "SVG data parsing failed".to_string(),
            },
        ];
        let codes: Vec<u8> = errors.iter().map(GenerateError::exit_code).collect();
        assert_eq!(
            vec![EXIT_TEMPLATE, EXIT_OUTPUT_DIR, EXIT_WRITE, EXIT_RENDER],
            codes
        );
        assert!(codes.iter().all(|&c| c != 0));
    }

    #[test]
    fn test_message() {
        let err = GenerateError::WriteOutput {
            path: "generated/far_nearer7.svg".into(),
            source: not_found(),
        };
        let message = err.to_string();
        assert!(message.starts_with("failed to write generated/far_nearer7.svg"));
        assert!(message.ends_with("no such file"));
        assert_eq!(std::path::Path::new("generated/far_nearer7.svg"), err.path());
    }
}
