//! Case table policies and the sources they are read from.
//!
//! # Design
//! - Defaults keep every row: duplicate names get an occurrence suffix and
//!   empty labels are accepted.
//! - Environment keys override defaults key by key; JSON documents must name
//!   known fields only.

use serde::{Deserialize, Serialize};

use crate::error::{CaseError, CaseResult};

/// Environment variable selecting the [`DuplicatePolicy`].
pub const DUPLICATES_ENV: &str = "SCENARIOS_DUPLICATES";
/// Environment variable toggling [`CaseConfig::allow_empty_labels`].
pub const ALLOW_EMPTY_LABELS_ENV: &str = "SCENARIOS_ALLOW_EMPTY_LABELS";

/// How rows whose display names collide are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail the table build.
    Reject,
    /// Append ` #<n>` to the label of every repeat, `n` counting from 2.
    #[default]
    Suffix,
    /// Keep colliding names as they are.
    Allow,
}

impl DuplicatePolicy {
    /// Parse a policy name (`reject`, `suffix`, `allow`), ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::InvalidSetting`] for unknown names.
    pub fn parse(value: &str) -> CaseResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "suffix" => Ok(Self::Suffix),
            "allow" => Ok(Self::Allow),
            _ => Err(CaseError::InvalidSetting {
                key: DUPLICATES_ENV,
                value: value.to_string(),
                reason: "expected one of reject, suffix, allow",
            }),
        }
    }

    /// Canonical name of the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Suffix => "suffix",
            Self::Allow => "allow",
        }
    }
}

/// Policies applied while building a [`CaseTable`](crate::CaseTable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseConfig {
    /// Handling of colliding display names.
    pub duplicates: DuplicatePolicy,
    /// Whether rows with an empty effective label are accepted.
    pub allow_empty_labels: bool,
}

impl Default for CaseConfig {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::default(),
            allow_empty_labels: true,
        }
    }
}

impl CaseConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::InvalidSetting`] when a variable holds an invalid value.
    pub fn from_env() -> CaseResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, keeping defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::InvalidSetting`] when a key holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CaseResult<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(DUPLICATES_ENV) {
            config.duplicates = DuplicatePolicy::parse(&value)?;
        }
        if let Some(value) = lookup(ALLOW_EMPTY_LABELS_ENV) {
            config.allow_empty_labels = parse_flag(ALLOW_EMPTY_LABELS_ENV, &value)?;
        }
        Ok(config)
    }

    /// Parse a JSON configuration document; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::ConfigParse`] when the document is malformed or
    /// names unknown fields.
    pub fn from_json_str(document: &str) -> CaseResult<Self> {
        serde_json::from_str(document).map_err(|source| CaseError::ConfigParse { source })
    }
}

fn parse_flag(key: &'static str, value: &str) -> CaseResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CaseError::InvalidSetting {
            key,
            value: value.to_string(),
            reason: "expected a boolean",
        }),
    }
}
