use std::path::Path;

use log::{info, warn};

use crate::error::ConfigError;
use crate::types::Cfg;

/// Leser inn konfig fra disk (JSON).
/// Mangler fila, brukes default-konfig.
pub fn load_cfg(path: impl AsRef<Path>) -> Result<Cfg, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("config not found at {}, using defaults", path.display());
        return Ok(Cfg::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let de = &mut serde_json::Deserializer::from_str(&contents);
    let cfg: Cfg = serde_path_to_error::deserialize(de).map_err(|e| ConfigError::Parse {
        path: e.path().to_string(),
        message: e.inner().to_string(),
    })?;
    info!("config loaded from {}", path.display());
    Ok(cfg)
}

/// Lagrer konfig til disk (pretty JSON).
pub fn save_cfg(cfg: &Cfg, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    info!("config saved to {}", path.display());
    Ok(())
}
