//! Conversion configuration.

use crate::errors::{ConvertError, ConvertResult};
use crate::loader::read_document;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Prefix of the platform's built-in entity types (`AMAZON.NUMBER`, ...).
pub const DEFAULT_PROVIDER_PREFIX: &str = "AMAZON";

/// Configuration for one conversion run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Invocation name of the skill.
    pub invocation_name: String,
    /// Domain document declaring the intents.
    pub domain: PathBuf,
    /// Line-oriented training document.
    pub training: PathBuf,
    /// Platform configuration binding slots to types.
    pub platform: PathBuf,
    /// Where the interaction model is written.
    pub output: PathBuf,
    /// Types starting with this prefix are platform built-ins.
    pub provider_prefix: String,
    /// Pretty-print the rendered JSON.
    pub pretty: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            invocation_name: "rasademo".into(),
            domain: PathBuf::from("domain.yml"),
            training: PathBuf::from("data/nlu.md"),
            platform: PathBuf::from("echo_domain.yml"),
            output: PathBuf::from("echoSkillConfiguration.json"),
            provider_prefix: DEFAULT_PROVIDER_PREFIX.into(),
            pretty: false,
        }
    }
}

impl ConversionConfig {
    /// Load from a TOML file. Relative paths resolve against the file's directory.
    pub fn load(path: &Path) -> ConvertResult<Self> {
        let content = read_document(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ConvertError::format(path.display().to_string(), e.to_string()))?;

        match path.parent() {
            Some(base) => Ok(config.relative_to(base)),
            None => Ok(config),
        }
    }

    /// Rebase every relative document path onto `base`.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.domain,
            &mut self.training,
            &mut self.platform,
            &mut self.output,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }

    pub fn with_invocation_name(mut self, name: impl Into<String>) -> Self {
        self.invocation_name = name.into();
        self
    }

    pub fn with_documents(
        mut self,
        domain: impl Into<PathBuf>,
        training: impl Into<PathBuf>,
        platform: impl Into<PathBuf>,
    ) -> Self {
        self.domain = domain.into();
        self.training = training.into();
        self.platform = platform.into();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
