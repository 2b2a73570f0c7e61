//! Provider configuration read from the process environment.
//!
//! Reads go through [`mockable::Env`] so every combination can be exercised
//! without touching the real environment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use mockable::Env;
use reqwest::Url;
use tracing::warn;

pub(crate) const PROVIDER_ENV: &str = "NAMEFORGE_PROVIDER";
pub(crate) const MODEL_ENV: &str = "NAMEFORGE_MODEL";
pub(crate) const BASE_URL_ENV: &str = "NAMEFORGE_PROVIDER_BASE_URL";
pub(crate) const TIMEOUT_ENV: &str = "NAMEFORGE_PROVIDER_TIMEOUT_SECS";
pub(crate) const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub(crate) const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub(crate) const FIXTURE_COMPLETION_ENV: &str = "NAMEFORGE_FIXTURE_COMPLETION";

const PROVIDER_EXPECTED: &str = "gemini|openai|fixture";
const TIMEOUT_EXPECTED: &str = "a positive whole number of seconds";
const URL_EXPECTED: &str = "an absolute http(s) URL";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
/// Default model for OpenAI-compatible endpoints.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Build mode for provider configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing Gemini key and warn instead.
    Debug,
    /// Release builds require credentials for hosted providers.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Which provider back end serves completions.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ProviderKind {
    /// Google Gemini `generateContent`.
    #[default]
    Gemini,
    /// Any OpenAI-compatible `chat/completions` endpoint.
    OpenAi,
    /// Canned reply for offline development.
    Fixture,
}

impl ProviderKind {
    /// Identifier used in configuration and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Fixture => "fixture",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a provider name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown provider '{0}'")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            "fixture" => Ok(Self::Fixture),
            _ => Err(UnknownProvider(value.to_owned())),
        }
    }
}

/// Connection details for a hosted provider.
#[derive(Clone)]
pub struct HostedProviderSettings {
    /// Model identifier sent with every request.
    pub model: String,
    /// Credential; may be empty only for Gemini in debug builds.
    pub api_key: String,
    /// Scheme and host (plus optional path prefix) of the provider API.
    pub base_url: Url,
    /// Per-request timeout. `None` waits for the provider indefinitely.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for HostedProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedProviderSettings")
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Fully resolved provider configuration.
#[derive(Clone, Debug)]
pub enum ProviderSettings {
    /// Google Gemini with its connection details.
    Gemini(HostedProviderSettings),
    /// OpenAI-compatible endpoint with its connection details.
    OpenAi(HostedProviderSettings),
    /// Offline provider replaying a fixed completion.
    Fixture {
        /// Reply returned for every prompt; `None` uses an empty name list.
        completion: Option<String>,
    },
}

impl ProviderSettings {
    /// Provider kind these settings configure.
    #[must_use]
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Gemini(_) => ProviderKind::Gemini,
            Self::OpenAi(_) => ProviderKind::OpenAi,
            Self::Fixture { .. } => ProviderKind::Fixture,
        }
    }
}

/// Errors raised while validating provider configuration.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ProviderConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv {
        /// Name of the missing variable.
        name: &'static str,
    },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Name of the offending variable.
        name: &'static str,
        /// Value as read from the environment.
        value: String,
        /// Description of an acceptable value.
        expected: &'static str,
    },
}

/// Build provider settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use mockable::MockEnv;
/// use nameforge::outbound::provider::{BuildMode, ProviderKind, provider_settings_from_env};
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "NAMEFORGE_PROVIDER" => Some("openai".to_owned()),
///     "OPENAI_API_KEY" => Some("sk-test".to_owned()),
///     _ => None,
/// });
///
/// let settings = provider_settings_from_env(&env, BuildMode::Release).expect("valid settings");
/// assert_eq!(settings.kind(), ProviderKind::OpenAi);
/// ```
pub fn provider_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<ProviderSettings, ProviderConfigError> {
    let kind = provider_kind_from_env(env)?;
    match kind {
        ProviderKind::Fixture => Ok(ProviderSettings::Fixture {
            completion: env.string(FIXTURE_COMPLETION_ENV),
        }),
        ProviderKind::Gemini => {
            let api_key = gemini_key_from_env(env, mode)?;
            hosted_settings(env, api_key, DEFAULT_GEMINI_MODEL, DEFAULT_GEMINI_BASE_URL)
                .map(ProviderSettings::Gemini)
        }
        ProviderKind::OpenAi => {
            let api_key = non_blank(env, OPENAI_API_KEY_ENV).ok_or(
                ProviderConfigError::MissingEnv {
                    name: OPENAI_API_KEY_ENV,
                },
            )?;
            hosted_settings(env, api_key, DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_BASE_URL)
                .map(ProviderSettings::OpenAi)
        }
    }
}

fn provider_kind_from_env<E: Env>(env: &E) -> Result<ProviderKind, ProviderConfigError> {
    match non_blank(env, PROVIDER_ENV) {
        Some(value) => value
            .parse()
            .map_err(|UnknownProvider(value)| ProviderConfigError::InvalidEnv {
                name: PROVIDER_ENV,
                value,
                expected: PROVIDER_EXPECTED,
            }),
        None => Ok(ProviderKind::default()),
    }
}

fn gemini_key_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<String, ProviderConfigError> {
    match (non_blank(env, GEMINI_API_KEY_ENV), mode) {
        (Some(key), _) => Ok(key),
        (None, BuildMode::Debug) => {
            warn!("GEMINI_API_KEY not set; requests will be sent without a credential");
            Ok(String::new())
        }
        (None, BuildMode::Release) => Err(ProviderConfigError::MissingEnv {
            name: GEMINI_API_KEY_ENV,
        }),
    }
}

fn hosted_settings<E: Env>(
    env: &E,
    api_key: String,
    default_model: &str,
    default_base_url: &str,
) -> Result<HostedProviderSettings, ProviderConfigError> {
    let model = non_blank(env, MODEL_ENV).unwrap_or_else(|| default_model.to_owned());
    let base_url = match non_blank(env, BASE_URL_ENV) {
        Some(raw) => parse_base_url(&raw)?,
        None => parse_base_url(default_base_url)?,
    };
    let timeout = timeout_from_env(env)?;

    Ok(HostedProviderSettings {
        model,
        api_key,
        base_url,
        timeout,
    })
}

fn parse_base_url(raw: &str) -> Result<Url, ProviderConfigError> {
    let invalid = || ProviderConfigError::InvalidEnv {
        name: BASE_URL_ENV,
        value: raw.to_owned(),
        expected: URL_EXPECTED,
    };
    let url = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(url)
}

fn timeout_from_env<E: Env>(env: &E) -> Result<Option<Duration>, ProviderConfigError> {
    let Some(raw) = non_blank(env, TIMEOUT_ENV) else {
        return Ok(None);
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ProviderConfigError::InvalidEnv {
            name: TIMEOUT_ENV,
            value: raw,
            expected: TIMEOUT_EXPECTED,
        }),
    }
}

fn non_blank<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
