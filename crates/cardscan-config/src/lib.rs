use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cardscan_core::extract::{ExtractOptions, ExtractRules, KnownValues, RuleList};
use cardscan_core::CountryCode;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "cardscan";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub default_country: CountryCode,
    pub rules: ExtractRules,
    pub guess_identity: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_country: CountryCode::default(),
            rules: ExtractRules::default(),
            guess_identity: true,
        }
    }
}

impl AppConfig {
    pub fn extract_options(&self, known: KnownValues) -> ExtractOptions {
        ExtractOptions {
            rules: self.rules.clone(),
            known,
            guess_identity: self.guess_identity,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid default_country_code value: {0}")]
    InvalidCountryCode(String),
    #[error("invalid {field} entry: tokens cannot be empty")]
    EmptyToken { field: &'static str },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_country_code: Option<String>,
    labels: Option<LabelsFile>,
    address: Option<AddressFile>,
    identity: Option<IdentityFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LabelsFile {
    mobile: Option<Vec<String>>,
    office: Option<Vec<String>>,
    fax: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AddressFile {
    keywords: Option<Vec<String>>,
    denylist: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct IdentityFile {
    guess: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(raw) = parsed.default_country_code {
        config.default_country =
            CountryCode::new(&raw).map_err(|_| ConfigError::InvalidCountryCode(raw.clone()))?;
    }

    if let Some(labels) = parsed.labels {
        extend_rules(&mut config.rules, RuleList::MobileLabels, "labels.mobile", labels.mobile)?;
        extend_rules(&mut config.rules, RuleList::OfficeLabels, "labels.office", labels.office)?;
        extend_rules(&mut config.rules, RuleList::FaxLabels, "labels.fax", labels.fax)?;
    }

    if let Some(address) = parsed.address {
        extend_rules(
            &mut config.rules,
            RuleList::AddressKeywords,
            "address.keywords",
            address.keywords,
        )?;
        extend_rules(
            &mut config.rules,
            RuleList::Denylist,
            "address.denylist",
            address.denylist,
        )?;
    }

    if let Some(identity) = parsed.identity {
        if let Some(guess) = identity.guess {
            config.guess_identity = guess;
        }
    }

    Ok(config)
}

fn extend_rules(
    rules: &mut ExtractRules,
    list: RuleList,
    field: &'static str,
    tokens: Option<Vec<String>>,
) -> Result<()> {
    for token in tokens.unwrap_or_default() {
        rules
            .add(list, &token)
            .map_err(|_| ConfigError::EmptyToken { field })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        load_at_path, merge_config, AddressFile, AppConfig, ConfigError, ConfigFile,
        IdentityFile, LabelsFile,
    };
    use cardscan_core::extract::RuleList;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            default_country_code: Some("+65".to_string()),
            labels: Some(LabelsFile {
                mobile: Some(vec!["H/P".to_string()]),
                office: Some(vec!["office".to_string()]),
                fax: None,
            }),
            address: Some(AddressFile {
                keywords: Some(vec!["Taman".to_string()]),
                denylist: Some(vec!["Director".to_string()]),
            }),
            identity: Some(IdentityFile { guess: Some(false) }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.default_country.digits(), "65");
        assert_eq!(merged.rules.list(RuleList::MobileLabels), ["mobile", "h/p"]);
        assert!(merged
            .rules
            .list(RuleList::OfficeLabels)
            .contains(&"office".to_string()));
        assert!(merged
            .rules
            .list(RuleList::AddressKeywords)
            .contains(&"taman".to_string()));
        assert_eq!(merged.rules.list(RuleList::Denylist), ["director"]);
        assert!(!merged.guess_identity);
    }

    #[test]
    fn merge_config_defaults_when_empty() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged, AppConfig::default());
    }

    #[test]
    fn merge_config_rejects_bad_country_code() {
        let parsed = ConfigFile {
            default_country_code: Some("malaysia".to_string()),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCountryCode(value) if value == "malaysia"));
    }

    #[test]
    fn merge_config_rejects_blank_tokens() {
        let parsed = ConfigFile {
            address: Some(AddressFile {
                keywords: None,
                denylist: Some(vec!["  ".to_string()]),
            }),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(err.to_string().contains("address.denylist"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "default_country_code = \"886\"\n[labels]\nmobile = [\"cell\"]\n[identity]\nguess = false\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.default_country.to_string(), "+886");
        assert!(config
            .rules
            .list(RuleList::MobileLabels)
            .contains(&"cell".to_string()));
        assert!(!config.guess_identity);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "api_key = \"secret\"\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
