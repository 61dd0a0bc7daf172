use crate::config::RequestParams;
use crate::error::{ComposerError, Result};
use std::path::Path;

impl RequestParams {
    /// Load request parameters from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|_| ComposerError::ConfigNotFound {
                path: path.as_ref().to_path_buf(),
            })?;

        let params: RequestParams = toml::from_str(&content)?;
        Ok(params)
    }

    /// Load request parameters with validation and enhanced error context
    pub fn load_with_validation<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ComposerError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref).map_err(ComposerError::Io)?;

        let params: RequestParams = toml::from_str(&content).map_err(|e| {
            ComposerError::invalid_params(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        params.validate()?;
        Ok(params)
    }
}
