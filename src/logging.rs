use anyhow::Context;
use log4rs::config::{Deserializers, RawConfig};
use log4rs::{init_file, init_raw_config};

pub fn init_logging(log_config: Option<String>) -> anyhow::Result<()> {
    let deserializers = Deserializers::default();
    if let Some(config_path) = log_config {
        init_file(&config_path, deserializers)
            .with_context(|| format!("Failed to parse {config_path}"))?;
    } else {
        init_raw_config(default_config()?)?;
    }
    Ok(())
}

fn default_config() -> anyhow::Result<RawConfig> {
    let config = include_str!("default_logging.yml");
    Ok(serde_yaml::from_str::<RawConfig>(config)?)
}
