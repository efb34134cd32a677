//! Portal configuration.
//!
//! Stored as TOML in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/edu.gitam.Annual-Report-Portal/
//! - Windows: %APPDATA%/gitam/Annual Report Portal/config/
//! - Linux: ~/.config/annualreportportal/

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use portal_model::{
    AcademicYear, DEFAULT_ACADEMIC_YEARS, DEFAULT_SELECTED_YEAR, PROGRAMS_DATA_YEARS,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;

const APP_QUALIFIER: &str = "edu";
const APP_ORG: &str = "gitam";
const APP_NAME: &str = "Annual Report Portal";
const CONFIG_FILENAME: &str = "portal.toml";

/// Names and contacts printed on generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstitutionConfig {
    pub university: String,
    /// Short brand used in document titles and file names.
    pub short_name: String,
    pub department: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub support_email: String,
}

impl Default for InstitutionConfig {
    fn default() -> Self {
        Self {
            university: "GITAM Deemed to be University".to_string(),
            short_name: "GITAM".to_string(),
            department: "Computer Science and Engineering".to_string(),
            contact_email: "hod_cse@gitam.edu".to_string(),
            contact_phone: "+91-891-2840-2870".to_string(),
            support_email: "support@gitam.edu".to_string(),
        }
    }
}

/// Academic years offered by the portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearsConfig {
    /// Display order of the known years.
    pub academic: Vec<String>,
    /// Year selected at start-up.
    pub default_year: String,
    /// Years for which the programmes section reports data.
    pub programs_years: Vec<String>,
}

impl Default for YearsConfig {
    fn default() -> Self {
        Self {
            academic: DEFAULT_ACADEMIC_YEARS.iter().map(|y| y.to_string()).collect(),
            default_year: DEFAULT_SELECTED_YEAR.to_string(),
            programs_years: PROGRAMS_DATA_YEARS.iter().map(|y| y.to_string()).collect(),
        }
    }
}

impl YearsConfig {
    /// Parsed `academic` list. Each year may appear once.
    pub fn academic_years(&self) -> Result<Vec<AcademicYear>, ConfigError> {
        let years = parse_years(&self.academic)?;
        let mut seen = HashSet::with_capacity(years.len());
        if let Some(repeated) = years.iter().find(|year| !seen.insert(*year)) {
            return Err(ConfigError::DuplicateYear(repeated.to_string()));
        }
        Ok(years)
    }

    pub fn programs_years(&self) -> Result<Vec<AcademicYear>, ConfigError> {
        parse_years(&self.programs_years)
    }

    pub fn default_year(&self) -> Result<AcademicYear, ConfigError> {
        Ok(AcademicYear::new(self.default_year.as_str())?)
    }
}

fn parse_years(labels: &[String]) -> Result<Vec<AcademicYear>, ConfigError> {
    labels
        .iter()
        .map(|label| AcademicYear::new(label.as_str()).map_err(ConfigError::from))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub institution: InstitutionConfig,
    pub years: YearsConfig,
    /// Start the master partition with the school, establishment and HoD
    /// defaults.
    pub seed_master: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            institution: InstitutionConfig::default(),
            years: YearsConfig::default(),
            seed_master: true,
        }
    }
}

/// Path of the configuration file in the platform config folder.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Reads and parses a configuration file, rejecting academic year lists
/// that are malformed or repeat a year.
pub fn read_config(path: &Path) -> Result<PortalConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: PortalConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    config.years.academic_years()?;
    Ok(config)
}

/// Loads the configuration.
///
/// An explicit path must exist and parse. Without one, the platform config
/// file is used when present; a missing or unparseable file falls back to
/// defaults.
pub fn load_config(path: Option<&Path>) -> Result<PortalConfig, ConfigError> {
    if let Some(path) = path {
        let config = read_config(path)?;
        info!("Loaded config from {:?}", path);
        return Ok(config);
    }

    let Some(path) = config_path() else {
        warn!("Could not determine config path, using defaults");
        return Ok(PortalConfig::default());
    };

    match read_config(&path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            Ok(config)
        }
        Err(ConfigError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            info!("No config file found at {:?}, using defaults", path);
            Ok(PortalConfig::default())
        }
        Err(e) => {
            warn!("{e}, using defaults");
            Ok(PortalConfig::default())
        }
    }
}

/// Writes `config` as pretty TOML to `path`, or to the platform config file
/// when no path is given. Creates the parent directory if needed.
pub fn save_config(config: &PortalConfig, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_path().ok_or(ConfigError::NoConfigDir)?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content).map_err(|e| ConfigError::Write {
        path: path.clone(),
        source: e,
    })?;

    info!("Saved config to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializable() {
        let toml = toml::to_string_pretty(&PortalConfig::default());
        assert!(toml.is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: PortalConfig = toml::from_str(
            r#"
            seed_master = false

            [institution]
            department = "Mechanical Engineering"
            "#,
        )
        .unwrap();
        assert!(!config.seed_master);
        assert_eq!(config.institution.department, "Mechanical Engineering");
        assert_eq!(config.institution.short_name, "GITAM");
        assert_eq!(config.years.academic.len(), 7);
    }

    #[test]
    fn test_default_years_parse() {
        let years = YearsConfig::default();
        assert_eq!(years.academic_years().unwrap().len(), 7);
        assert_eq!(years.default_year().unwrap().as_str(), "2024-25");
        assert_eq!(years.programs_years().unwrap().len(), 2);
    }

    #[test]
    fn test_reserved_year_is_rejected() {
        let years = YearsConfig {
            academic: vec!["master".to_string()],
            ..YearsConfig::default()
        };
        assert!(matches!(years.academic_years(), Err(ConfigError::Year(_))));
    }
}
