use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Locale for relative-time phrases ("en" or "pt")
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Override for the plant store file
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            data_file: None,
            vim_mode: false,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.locale, "en");
        assert!(config.data_file.is_none());
        assert!(!config.vim_mode);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("locale: pt\n").unwrap();
        assert_eq!(config.locale, "pt");
        assert!(config.data_file.is_none());
        assert!(!config.vim_mode);
    }

    #[test]
    fn test_full_yaml() {
        let config: Config =
            serde_yaml::from_str("locale: en\ndata_file: /tmp/plants.json\nvim_mode: true\n")
                .unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/plants.json")));
        assert!(config.vim_mode);
    }
}
