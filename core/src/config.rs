use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

/// Field names used to read entities out of a result row.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RowConfig {
    pub id_field: String,
    pub type_field: String,
    pub properties_field: String,
    pub start_field: String,
    pub end_field: String,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            type_field: "type".to_string(),
            properties_field: "properties".to_string(),
            start_field: "start".to_string(),
            end_field: "end".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HydrationConfig {
    /// Empty relationship labels are always accepted; this only controls the warning.
    pub warn_on_empty_type: bool,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            warn_on_empty_type: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub rows: RowConfig,
    pub hydration: HydrationConfig,
}

impl ClientConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Defaults, then `<dir>/default`, then `<dir>/<RUN_MODE>`, then `GRAPHMAP__*` variables.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let dir = dir.as_ref();
        let defaults = ClientConfig::default();

        let builder = Config::builder()
            .set_default("rows.id_field", defaults.rows.id_field)?
            .set_default("rows.type_field", defaults.rows.type_field)?
            .set_default("rows.properties_field", defaults.rows.properties_field)?
            .set_default("rows.start_field", defaults.rows.start_field)?
            .set_default("rows.end_field", defaults.rows.end_field)?
            .set_default(
                "hydration.warn_on_empty_type",
                defaults.hydration.warn_on_empty_type,
            )?
            .add_source(File::from(dir.join("default")).required(false))
            .add_source(File::from(dir.join(&run_mode)).required(false))
            .add_source(Environment::with_prefix("GRAPHMAP").separator("__"));

        builder.build()?.try_deserialize()
    }
}
