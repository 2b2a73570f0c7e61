//! Unit tests for provider configuration parsing.

use std::collections::HashMap;

use mockable::MockEnv;
use rstest::rstest;

use super::*;

fn mock_env(vars: &[(&str, &str)]) -> MockEnv {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn hosted(settings: ProviderSettings) -> HostedProviderSettings {
    match settings {
        ProviderSettings::Gemini(hosted) | ProviderSettings::OpenAi(hosted) => hosted,
        ProviderSettings::Fixture { .. } => panic!("expected a hosted provider"),
    }
}

#[rstest]
fn defaults_to_gemini_flash() {
    let env = mock_env(&[(GEMINI_API_KEY_ENV, "g-key")]);
    let settings = provider_settings_from_env(&env, BuildMode::Release).expect("valid settings");

    assert_eq!(settings.kind(), ProviderKind::Gemini);
    let hosted = hosted(settings);
    assert_eq!(hosted.model, "gemini-1.5-flash");
    assert_eq!(hosted.api_key, "g-key");
    assert_eq!(
        hosted.base_url.as_str(),
        "https://generativelanguage.googleapis.com/"
    );
    assert_eq!(hosted.timeout, None);
}

#[rstest]
fn openai_uses_its_own_defaults() {
    let env = mock_env(&[(PROVIDER_ENV, "OpenAI"), (OPENAI_API_KEY_ENV, "sk-test")]);
    let settings = provider_settings_from_env(&env, BuildMode::Release).expect("valid settings");

    assert_eq!(settings.kind(), ProviderKind::OpenAi);
    let hosted = hosted(settings);
    assert_eq!(hosted.model, "gpt-4o-mini");
    assert_eq!(hosted.base_url.as_str(), "https://api.openai.com/");
}

#[rstest]
fn overrides_are_applied() {
    let env = mock_env(&[
        (PROVIDER_ENV, "gemini"),
        (GEMINI_API_KEY_ENV, "g-key"),
        (MODEL_ENV, " gemini-2.0-flash "),
        (BASE_URL_ENV, "http://127.0.0.1:9000"),
        (TIMEOUT_ENV, "30"),
    ]);
    let hosted = hosted(provider_settings_from_env(&env, BuildMode::Release).expect("valid"));

    assert_eq!(hosted.model, "gemini-2.0-flash");
    assert_eq!(hosted.base_url.as_str(), "http://127.0.0.1:9000/");
    assert_eq!(hosted.timeout, Some(Duration::from_secs(30)));
}

#[rstest]
fn unknown_provider_is_rejected() {
    let env = mock_env(&[(PROVIDER_ENV, "claude-v0")]);
    let err = provider_settings_from_env(&env, BuildMode::Debug).expect_err("should fail");
    assert_eq!(
        err,
        ProviderConfigError::InvalidEnv {
            name: PROVIDER_ENV,
            value: "claude-v0".to_owned(),
            expected: PROVIDER_EXPECTED,
        }
    );
}

#[rstest]
#[case::debug(BuildMode::Debug, true)]
#[case::release(BuildMode::Release, false)]
fn missing_gemini_key_depends_on_build_mode(#[case] mode: BuildMode, #[case] accepted: bool) {
    let env = mock_env(&[]);
    let result = provider_settings_from_env(&env, mode);
    if accepted {
        assert_eq!(hosted(result.expect("debug tolerates missing key")).api_key, "");
    } else {
        assert_eq!(
            result.expect_err("release requires a key"),
            ProviderConfigError::MissingEnv {
                name: GEMINI_API_KEY_ENV
            }
        );
    }
}

#[rstest]
#[case::debug(BuildMode::Debug)]
#[case::release(BuildMode::Release)]
fn openai_always_requires_a_key(#[case] mode: BuildMode) {
    let env = mock_env(&[(PROVIDER_ENV, "openai"), (OPENAI_API_KEY_ENV, "   ")]);
    assert_eq!(
        provider_settings_from_env(&env, mode).expect_err("key required"),
        ProviderConfigError::MissingEnv {
            name: OPENAI_API_KEY_ENV
        }
    );
}

#[rstest]
#[case::zero("0")]
#[case::negative("-5")]
#[case::words("soon")]
fn invalid_timeouts_are_rejected(#[case] value: &str) {
    let env = mock_env(&[(GEMINI_API_KEY_ENV, "k"), (TIMEOUT_ENV, value)]);
    let err = provider_settings_from_env(&env, BuildMode::Release).expect_err("should fail");
    assert!(matches!(err, ProviderConfigError::InvalidEnv { name: TIMEOUT_ENV, .. }));
}

#[rstest]
#[case::relative("api.example.com")]
#[case::ftp("ftp://example.com")]
fn invalid_base_urls_are_rejected(#[case] value: &str) {
    let env = mock_env(&[(GEMINI_API_KEY_ENV, "k"), (BASE_URL_ENV, value)]);
    let err = provider_settings_from_env(&env, BuildMode::Release).expect_err("should fail");
    assert!(matches!(err, ProviderConfigError::InvalidEnv { name: BASE_URL_ENV, .. }));
}

#[rstest]
fn fixture_needs_no_credentials() {
    let env = mock_env(&[
        (PROVIDER_ENV, "fixture"),
        (FIXTURE_COMPLETION_ENV, "Here you go: {\"names\":[]}"),
    ]);
    match provider_settings_from_env(&env, BuildMode::Release).expect("valid") {
        ProviderSettings::Fixture { completion } => {
            assert_eq!(completion.as_deref(), Some("Here you go: {\"names\":[]}"));
        }
        other => panic!("expected fixture settings, got {other:?}"),
    }
}

#[test]
fn debug_output_redacts_the_key() {
    let env = mock_env(&[(GEMINI_API_KEY_ENV, "super-secret")]);
    let settings = provider_settings_from_env(&env, BuildMode::Release).expect("valid");
    let rendered = format!("{settings:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
}
