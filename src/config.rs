//! # Analysis configuration
//!
//! [`AnalysisConfig`] carries the values the classifier needs besides its inputs.
//! Today that is only the **noise sentinel**: the object id given to diaSources that
//! do not belong to any real object. Passing it explicitly keeps the classification
//! rule testable with arbitrary sentinels.
//!
//! ```rust
//! use trackstats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::builder()
//!     .noise_object_id("NOISE")
//!     .build()
//!     .unwrap();
//! assert_eq!(config.noise_object_id(), "NOISE");
//! ```
use crate::{constants::DEFAULT_NOISE_OBJECT_ID, trackstats_errors::TrackStatsError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    noise_object_id: String,
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::new()
    }

    /// Object id marking a detection as noise.
    pub fn noise_object_id(&self) -> &str {
        &self.noise_object_id
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            noise_object_id: DEFAULT_NOISE_OBJECT_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }

    pub fn noise_object_id(mut self, v: impl Into<String>) -> Self {
        self.config.noise_object_id = v.into();
        self
    }

    /// Validate and return the configuration.
    ///
    /// The sentinel is compared against whitespace-split fields of the dump, so an
    /// empty sentinel or one containing whitespace could never match and is rejected.
    pub fn build(self) -> Result<AnalysisConfig, TrackStatsError> {
        let noise = &self.config.noise_object_id;
        if noise.is_empty() {
            return Err(TrackStatsError::InvalidConfig(
                "noise object id must not be empty".into(),
            ));
        }
        if noise.chars().any(char::is_whitespace) {
            return Err(TrackStatsError::InvalidConfig(format!(
                "noise object id {noise:?} must not contain whitespace"
            )));
        }
        Ok(self.config)
    }
}
