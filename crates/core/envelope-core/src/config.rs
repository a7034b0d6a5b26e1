use crate::cost::Provider;
use crate::error::{AppError, AppResult};
use crate::models::UsageParameters;
use crate::units::PayloadUnit;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Keys accepted by [`ConfigManager::get`] and [`ConfigManager::set`].
pub const CONFIG_KEYS: [&str; 12] = [
    "provider",
    "color",
    "defaults.dau",
    "defaults.read_write_ratio",
    "defaults.writes_per_user",
    "defaults.payload_size",
    "defaults.payload_unit",
    "defaults.retention_months",
    "defaults.peak_multiplier",
    "defaults.replication_factor",
    "defaults.compression_ratio",
    "defaults.precision_mode",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_color")]
    pub color: bool,
    /// Assumptions used for every input the command line leaves out.
    #[serde(default)]
    pub defaults: UsageParameters,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            color: default_color(),
            defaults: UsageParameters::default(),
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    pub config: Config,
}

impl ConfigManager {
    pub fn new(base_dir: &Path) -> AppResult<Self> {
        let config_path = base_dir.join("config.toml");
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path).map_err(|e| AppError::Io {
                path: config_path.clone(),
                source: e,
            })?;
            toml::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable {}: {}", config_path.display(), e);
                Config::default()
            })
        } else {
            Config::default()
        };

        // Auto-save default if missing
        if !config_path.exists() {
            if let Err(e) = std::fs::create_dir_all(base_dir)
                .map_err(AppError::IoGeneric)
                .and_then(|_| Self::save_to_path(&config, &config_path))
            {
                log::warn!("Failed to save default config: {}", e);
            }
        }

        log::debug!("Loaded config from {}", config_path.display());
        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn save(&self) -> AppResult<()> {
        Self::save_to_path(&self.config, &self.config_path)
    }

    fn save_to_path(config: &Config, path: &Path) -> AppResult<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| AppError::Config(e.to_string()))?;

        // Write to a sibling temp file, then rename over the target.
        let parent = path.parent().unwrap_or(Path::new("."));
        let temp = tempfile::NamedTempFile::new_in(parent).map_err(AppError::IoGeneric)?;
        std::fs::write(temp.path(), &content).map_err(AppError::IoGeneric)?;
        temp.persist(path)
            .map_err(|e| AppError::IoGeneric(e.error))?;
        Ok(())
    }

    pub fn reset(&mut self) -> AppResult<()> {
        self.config = Config::default();
        self.save()
    }

    /// Reads one setting, rendered the way `set` accepts it.
    pub fn get(&self, key: &str) -> AppResult<String> {
        let d = &self.config.defaults;
        let value = match key {
            "provider" => self.config.provider.to_string(),
            "color" => self.config.color.to_string(),
            "defaults.dau" => d.dau.to_string(),
            "defaults.read_write_ratio" => d.read_write_ratio.to_string(),
            "defaults.writes_per_user" => d.writes_per_user.to_string(),
            "defaults.payload_size" => d.payload_size.to_string(),
            "defaults.payload_unit" => d.payload_unit.to_string(),
            "defaults.retention_months" => d.retention_months.to_string(),
            "defaults.peak_multiplier" => d.peak_multiplier.to_string(),
            "defaults.replication_factor" => d.replication_factor.to_string(),
            "defaults.compression_ratio" => d.compression_ratio.to_string(),
            "defaults.precision_mode" => d.precision_mode.to_string(),
            _ => return Err(AppError::Config(format!("Unknown config key: {}", key))),
        };
        Ok(value)
    }

    /// Updates one setting and persists the file. Default assumptions must
    /// stay within the documented input domain.
    pub fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let mut next = self.config.clone();
        let d = &mut next.defaults;
        match key {
            "provider" => next.provider = value.parse()?,
            "color" => next.color = parse_value(key, value)?,
            "defaults.dau" => d.dau = parse_value(key, value)?,
            "defaults.read_write_ratio" => d.read_write_ratio = parse_value(key, value)?,
            "defaults.writes_per_user" => d.writes_per_user = parse_value(key, value)?,
            "defaults.payload_size" => d.payload_size = parse_value(key, value)?,
            "defaults.payload_unit" => d.payload_unit = value.parse::<PayloadUnit>()?,
            "defaults.retention_months" => d.retention_months = parse_value(key, value)?,
            "defaults.peak_multiplier" => d.peak_multiplier = parse_value(key, value)?,
            "defaults.replication_factor" => d.replication_factor = parse_value(key, value)?,
            "defaults.compression_ratio" => d.compression_ratio = parse_value(key, value)?,
            "defaults.precision_mode" => d.precision_mode = parse_value(key, value)?,
            _ => return Err(AppError::Config(format!("Unknown config key: {}", key))),
        }
        next.defaults.validate()?;

        self.config = next;
        log::debug!("Set {} = {}", key, value);
        self.save()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> AppResult<T>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| AppError::Config(format!("Invalid value for {}: {} ({})", key, value, e)))
}
