//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use agenda_core::{ExportOptions, ScheduleContext};
use agenda_xlsx::Source;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workbook path or http(s) URL.
    pub workbook: String,
    /// Year assumed for day labels without one; the current year when unset.
    pub year: Option<i32>,
    /// File name stem for exported layouts.
    pub export_prefix: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("workbook", &self.workbook)
            .field("year", &self.year)
            .field("export_prefix", &self.export_prefix)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workbook: "schedule.xlsx".to_string(),
            year: None,
            export_prefix: ExportOptions::default().file_prefix,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // AGENDA_WORKBOOK, AGENDA_YEAR, AGENDA_EXPORT_PREFIX
        figment = figment.merge(Env::prefixed("AGENDA_"));

        figment.extract()
    }

    /// Where to read the workbook from.
    pub fn source(&self) -> Source {
        Source::parse(&self.workbook)
    }

    /// Year context for day labels.
    pub fn context(&self) -> ScheduleContext {
        self.year.map_or_else(ScheduleContext::default, ScheduleContext::with_year)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            file_prefix: self.export_prefix.clone(),
        }
    }
}

/// Returns the platform-specific config directory for agenda.
///
/// On Linux: `~/.config/agenda`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("agenda"))
}
