//! Client configuration consumed by the validators.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Signature version used by the client.
///
/// Deserializes leniently: case is ignored and unknown versions become
/// [`AuthVersion::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum AuthVersion {
    /// No version configured.
    #[serde(rename = "")]
    Unset,
    #[default]
    #[serde(rename = "v1")]
    V1,
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v4")]
    V4,
}

impl AuthVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthVersion::Unset => "",
            AuthVersion::V1 => "v1",
            AuthVersion::V2 => "v2",
            AuthVersion::V4 => "v4",
        }
    }

    /// Signature versions that relax object name verification by default.
    fn relaxes_object_names(&self) -> bool {
        matches!(self, AuthVersion::V2 | AuthVersion::V4)
    }
}

impl FromStr for AuthVersion {
    type Err = Infallible;

    /// Parses an auth version; anything unrecognized is treated as unset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "v1" => AuthVersion::V1,
            "v2" => AuthVersion::V2,
            "v4" => AuthVersion::V4,
            _ => AuthVersion::Unset,
        })
    }
}

impl From<String> for AuthVersion {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(version) => version,
            Err(never) => match never {},
        }
    }
}

/// Client configuration as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit object name verification mode. `None` lets the auth version decide.
    pub verify_object_strict: Option<bool>,
    /// Signature version.
    pub auth_version: AuthVersion,
}

impl Config {
    /// Resolves the effective settings without touching `self`.
    pub fn resolve(&self) -> ResolvedConfig {
        let verify_object_strict = match self.verify_object_strict {
            Some(flag) => flag,
            None => !self.auth_version.relaxes_object_names(),
        };
        trace!(
            auth_version = self.auth_version.as_str(),
            explicit = ?self.verify_object_strict,
            verify_object_strict,
            "resolved object name verification"
        );
        ResolvedConfig {
            verify_object_strict,
            auth_version: self.auth_version,
        }
    }
}

/// Effective settings derived from a [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub verify_object_strict: bool,
    pub auth_version: AuthVersion,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Config::default().resolve()
    }
}

impl From<&Config> for ResolvedConfig {
    fn from(config: &Config) -> Self {
        config.resolve()
    }
}

/// Returns whether object names are verified strictly under `config`.
///
/// A missing config is strict.
pub fn is_verify_object_strict(config: Option<&Config>) -> bool {
    config
        .map(|c| c.resolve().verify_object_strict)
        .unwrap_or(true)
}
