use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lugat_config::Config;

const CONFIG_FILE: &str = "config.json";

/// Load `config.json` from the working directory, or fall back to defaults
/// with environment overrides
pub fn load_config() -> anyhow::Result<Config> {
    load_config_from(Path::new(CONFIG_FILE))
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::info!("No {} found, using defaults", path.display());
        return Ok(Config::new());
    }

    tracing::info!("Loading config from {}...", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}
