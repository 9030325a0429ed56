//! Loads scenario vectors from TOML files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::vectors::error::{Result, VectorError};
use crate::vectors::model::VectorFile;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("data")
}

/// Load a vector file from an explicit path
pub fn load_file(path: &Path) -> Result<VectorFile> {
    let text = fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| VectorError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load `src/vectors/data/<name>.toml`
pub fn load_named(name: &str) -> Result<VectorFile> {
    load_file(&data_dir().join(format!("{}.toml", name)))
}
