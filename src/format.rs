use std::fmt;

use crate::SiteConfiguration;

/// Serialization used when printing a [`SiteConfiguration`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    pub fn render(self, config: &SiteConfiguration) -> anyhow::Result<String> {
        let rendered = match self {
            Self::Yaml => serde_yaml::to_string(config)?.trim_end().to_owned(),
            Self::Json => serde_json::to_string_pretty(config)?,
        };
        Ok(rendered)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}
