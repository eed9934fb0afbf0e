//! Invocation settings: where the spec lives and how to read it.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Spec file used when `--spec` and `S4_SPEC` are both absent.
pub const DEFAULT_SPEC_PATH: &str = "s4.yaml";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "s4=warn";

/// Serialization format of a spec file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    /// `.json` files are JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// A spec file location plus the format used to decode it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSource {
    pub path: PathBuf,
    pub format: SpecFormat,
}

impl SpecSource {
    /// An explicit format wins over the one inferred from the extension.
    pub fn resolve(path: impl Into<PathBuf>, format: Option<SpecFormat>) -> Self {
        let path = path.into();
        let format = format.unwrap_or_else(|| SpecFormat::from_path(&path));
        Self { path, format }
    }
}

/// True when `path` names the conventional `s4.yaml`, in any directory.
pub fn is_default_spec_path(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some(DEFAULT_SPEC_PATH)
}

/// Tracing filter directive, taken from `RUST_LOG` when present.
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}
