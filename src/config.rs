use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::StructureArgs;

pub const DEFAULT_MERGE_THRESHOLD_CHARS: usize = 90;
pub const DEFAULT_TIP_MAX_CHARS: usize = 88;

/// Tunable thresholds for structuring.
///
/// The defaults were chosen against the line wrapping of one source
/// document; other sources may need different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructureConfig {
    /// A previous item shorter than this (in characters) and lacking a
    /// sentence terminator absorbs the next line.
    pub merge_threshold_chars: usize,
    pub tip_max_chars: usize,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            merge_threshold_chars: DEFAULT_MERGE_THRESHOLD_CHARS,
            tip_max_chars: DEFAULT_TIP_MAX_CHARS,
        }
    }
}

impl StructureConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config file first, then explicit flags on top.
    pub fn resolve(args: &StructureArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(value) = args.merge_threshold_chars {
            config.merge_threshold_chars = value;
        }
        if let Some(value) = args.tip_max_chars {
            config.tip_max_chars = value;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tip_max_chars == 0 {
            bail!("tip_max_chars must be greater than zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;
    use crate::cli::SourceKind;

    fn args_with(config: Option<PathBuf>, merge: Option<usize>) -> StructureArgs {
        StructureArgs {
            source: PathBuf::from("notes.txt"),
            source_kind: SourceKind::Text,
            out_dir: PathBuf::from("out"),
            config,
            merge_threshold_chars: merge,
            tip_max_chars: None,
            allow_empty: false,
        }
    }

    #[test]
    fn defaults_match_tuned_values() {
        let config = StructureConfig::default();
        assert_eq!(config.merge_threshold_chars, 90);
        assert_eq!(config.tip_max_chars, 88);
    }

    #[test]
    fn partial_config_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"merge_threshold_chars": 40}}"#).expect("write config");

        let config = StructureConfig::load(file.path()).expect("config loads");
        assert_eq!(config.merge_threshold_chars, 40);
        assert_eq!(config.tip_max_chars, DEFAULT_TIP_MAX_CHARS);
    }

    #[test]
    fn cli_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"merge_threshold_chars": 40}}"#).expect("write config");

        let args = args_with(Some(file.path().to_path_buf()), Some(120));
        let config = StructureConfig::resolve(&args).expect("config resolves");
        assert_eq!(config.merge_threshold_chars, 120);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"merge_threshold": 40}}"#).expect("write config");

        assert!(StructureConfig::load(file.path()).is_err());
    }

    #[test]
    fn zero_tip_length_is_rejected() {
        let mut args = args_with(None, None);
        args.tip_max_chars = Some(0);
        assert!(StructureConfig::resolve(&args).is_err());
    }
}
