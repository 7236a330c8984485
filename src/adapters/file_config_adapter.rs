//! INI file configuration adapter.

use crate::domain::error::TradepipeError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TradepipeError> {
        let path = path.as_ref();
        let mut config = Ini::new();
        config
            .load(path)
            .map_err(|reason| TradepipeError::ConfigParse {
                file: path.display().to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, TradepipeError> {
        let mut config = Ini::new();
        config
            .read(content.to_string())
            .map_err(|reason| TradepipeError::ConfigParse {
                file: "<string>".to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.config
            .getint(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }

    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.config
            .get(section, key)
            .as_deref()
            .and_then(Self::parse_bool)
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PIPELINE_INI: &str = r#"
[input]
path = data/trades.txt

[parser]
mode = delimited
delimiter = |

[mapper]
lot_size = 1000.5

[output]
kind = sqlite
path = trades.db

[sqlite]
pool_size = 2

[log]
quiet = yes
"#;

    #[test]
    fn reads_every_section() {
        let adapter = FileConfigAdapter::from_string(PIPELINE_INI).unwrap();
        assert_eq!(
            adapter.get_string("input", "path"),
            Some("data/trades.txt".to_string())
        );
        assert_eq!(adapter.get_string("parser", "delimiter"), Some("|".to_string()));
        assert_eq!(adapter.get_double("mapper", "lot_size", 0.0), 1000.5);
        assert_eq!(adapter.get_string("output", "kind"), Some("sqlite".to_string()));
        assert_eq!(adapter.get_int("sqlite", "pool_size", 4), 2);
        assert!(adapter.get_bool("log", "quiet", false));
    }

    #[test]
    fn missing_keys_fall_back() {
        let adapter = FileConfigAdapter::from_string("[mapper]\n").unwrap();
        assert_eq!(adapter.get_string("mapper", "lot_size"), None);
        assert_eq!(adapter.get_string("nowhere", "key"), None);
        assert_eq!(adapter.get_int("sqlite", "pool_size", 4), 4);
        assert_eq!(adapter.get_double("mapper", "lot_size", 100_000.0), 100_000.0);
        assert!(!adapter.get_bool("log", "quiet", false));
    }

    #[test]
    fn non_numeric_values_fall_back() {
        let adapter =
            FileConfigAdapter::from_string("[sqlite]\npool_size = many\n[mapper]\nlot_size = big\n")
                .unwrap();
        assert_eq!(adapter.get_int("sqlite", "pool_size", 4), 4);
        assert_eq!(adapter.get_double("mapper", "lot_size", 7.0), 7.0);
    }

    #[test]
    fn bool_spellings() {
        let adapter = FileConfigAdapter::from_string(
            "[log]\na = on\nb = OFF\nc = 1\nd = no\ne = maybe\n",
        )
        .unwrap();
        assert!(adapter.get_bool("log", "a", false));
        assert!(!adapter.get_bool("log", "b", true));
        assert!(adapter.get_bool("log", "c", false));
        assert!(!adapter.get_bool("log", "d", true));
        assert!(adapter.get_bool("log", "e", true));
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[output]\npath = /tmp/out.csv\n").unwrap();
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("output", "path"),
            Some("/tmp/out.csv".to_string())
        );
    }

    #[test]
    fn from_file_missing_is_config_parse_error() {
        let result = FileConfigAdapter::from_file("/nonexistent/tradepipe.ini");
        match result {
            Err(TradepipeError::ConfigParse { file, .. }) => {
                assert_eq!(file, "/nonexistent/tradepipe.ini")
            }
            Err(other) => panic!("expected ConfigParse, got: {other}"),
            Ok(_) => panic!("expected error, got Ok"),
        }
    }
}
