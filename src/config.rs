use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analyzer::NounPhrase;
use crate::tokenizer::MecabBuilder;

/// Configuration of the MeCab tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MecabConfig {
    /// The program to run.
    pub program: PathBuf,
    /// Directory of the dictionary to use instead of the system default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<PathBuf>,
    /// Additional arguments passed to the program.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl Default for MecabConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("mecab"),
            dictionary: None,
            args: Vec::new(),
        }
    }
}

impl MecabConfig {
    /// Construct a tokenizer builder out of the configuration.
    pub fn builder(&self) -> MecabBuilder {
        MecabBuilder::new(&self.program)
            .dictionary(self.dictionary.as_ref())
            .args(self.args.iter().cloned())
    }
}

/// A configuration used for the application.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Tokenizer configuration.
    pub mecab: MecabConfig,
    /// Where noun phrases of noun + する desires are taken from.
    pub noun_phrase: NounPhrase,
}

impl Config {
    /// Load configuration from the given path, falling back to the default
    /// configuration if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let data = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
            toml::from_str(&data).with_context(|| path.display().to_string())?
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Self::default()
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::{Config, MecabConfig};
    use crate::analyzer::NounPhrase;

    #[test]
    fn empty_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mecab.program, Path::new("mecab"));
        assert_eq!(config.noun_phrase, NounPhrase::RawText);
    }

    #[test]
    fn full() {
        let config: Config = toml::from_str(
            r#"
            noun-phrase = "tokens"

            [mecab]
            program = "/usr/local/bin/mecab"
            dictionary = "/usr/share/mecab/dic/ipadic"
            args = ["--unk-feature", "unknown"]
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                mecab: MecabConfig {
                    program: PathBuf::from("/usr/local/bin/mecab"),
                    dictionary: Some(PathBuf::from("/usr/share/mecab/dic/ipadic")),
                    args: vec!["--unk-feature".to_owned(), "unknown".to_owned()],
                },
                noun_phrase: NounPhrase::Tokens,
            }
        );
    }

    #[test]
    fn missing_file() {
        let config = Config::load(Path::new("/nonexistent/surebaeeyan/config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
