use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;

/// JSON body for subcommands that create or update an entity.
#[derive(clap::Args, Debug, Clone, PartialEq)]
#[group(required = true, multiple = false)]
pub struct PayloadArgs {
    /// JSON payload, e.g. '{"name": "mods"}'
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Read the JSON payload from a file
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

impl PayloadArgs {
    /// Parses the payload; fails before any request is made if it isn't JSON.
    pub fn load(&self) -> Result<Value> {
        match (&self.data, &self.data_file) {
            (Some(data), _) => serde_json::from_str(data).context("--data is not valid JSON"),
            (None, Some(path)) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("{} is not valid JSON", path.display()))
            }
            (None, None) => anyhow::bail!("Either --data or --data-file is required"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn inline(data: &str) -> PayloadArgs {
        PayloadArgs {
            data: Some(data.to_string()),
            data_file: None,
        }
    }

    #[test]
    fn test_load_inline() {
        let payload = inline(r#"{"name": "mods", "hoist": true}"#);
        assert_eq!(payload.load().unwrap(), json!({"name": "mods", "hoist": true}));
    }

    #[test]
    fn test_load_inline_invalid() {
        let err = inline("{name: mods}").load().unwrap_err();
        assert!(err.to_string().contains("--data is not valid JSON"));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"status": "dnd"}}"#).unwrap();

        let payload = PayloadArgs {
            data: None,
            data_file: Some(file.path().to_path_buf()),
        };
        assert_eq!(payload.load().unwrap(), json!({"status": "dnd"}));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let payload = PayloadArgs {
            data: None,
            data_file: Some(dir.path().join("absent.json")),
        };
        let err = payload.load().unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_nothing() {
        let payload = PayloadArgs {
            data: None,
            data_file: None,
        };
        assert!(payload.load().is_err());
    }
}
