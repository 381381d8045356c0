/*!
 * Tests for app configuration functionality
 */

use anyhow::Result;
use scrivai::app_config::{AssistProvider, Config, LogLevel, MAX_RETRY_COUNT};
use crate::common;

/// Test that the default configuration is valid
#[test]
fn test_default_config_shouldValidate() {
    let config = Config::default();

    assert_eq!(config.target_language, "Spanish");
    assert_eq!(config.assistant.provider, AssistProvider::Gemini);
    assert!(config.assistant.cache_enabled);
    assert_eq!(config.assistant.gemini.model, "gemini-2.0-flash");
    assert_eq!(config.assistant.gemini.retry_count, 2);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test that a missing API key is not a configuration error
#[test]
fn test_validate_withoutApiKey_shouldPass() {
    let mut config = Config::default();
    config.assistant.gemini.api_key = String::new();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_invalidGeminiSettings_shouldFail() {
    let mut bad_endpoint = Config::default();
    bad_endpoint.assistant.gemini.endpoint = "not a url".to_string();
    assert!(bad_endpoint.validate().is_err());

    let mut zero_timeout = Config::default();
    zero_timeout.assistant.gemini.timeout_secs = 0;
    assert!(zero_timeout.validate().is_err());

    let mut hot = Config::default();
    hot.assistant.gemini.temperature = 2.5;
    assert!(hot.validate().is_err());

    let mut no_top_p = Config::default();
    no_top_p.assistant.gemini.top_p = 0.0;
    assert!(no_top_p.validate().is_err());

    let mut blank_target = Config::default();
    blank_target.target_language = "  ".to_string();
    assert!(blank_target.validate().is_err());
}

#[test]
fn test_validate_retryCountAboveLimit_shouldFail() {
    let mut config = Config::default();
    config.assistant.gemini.retry_count = MAX_RETRY_COUNT;
    assert!(config.validate().is_ok());

    config.assistant.gemini.retry_count = MAX_RETRY_COUNT + 1;
    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("Retry count"));
}

/// Gemini settings are not checked when running on local rules only
#[test]
fn test_validate_localProvider_shouldIgnoreGeminiSettings() {
    let mut config = Config::default();
    config.assistant.provider = AssistProvider::Local;
    config.assistant.gemini.endpoint = String::new();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_misalignedExtraLanguage_shouldFail() {
    let mut config = Config::default();
    config
        .fallback
        .extra_languages
        .insert("Dutch".to_string(), vec!["Hallo".to_string(), "Dank je".to_string()]);

    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("Dutch"));
}

/// Test that a partial JSON file picks up defaults for everything else
#[test]
fn test_fromFile_partialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{ "target_language": "German", "assistant": { "provider": "local" }, "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.target_language, "German");
    assert_eq!(config.assistant.provider, AssistProvider::Local);
    assert_eq!(config.assistant.gemini.timeout_secs, 30);
    assert_eq!(config.assistant.gemini.max_output_tokens, 1024);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert!(config.fallback.extra_languages.is_empty());
    Ok(())
}

#[test]
fn test_fromFile_invalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    assert!(Config::from_file(&path).is_err());
    assert!(Config::from_file(temp_dir.path().join("missing.json")).is_err());
    Ok(())
}

#[test]
fn test_save_thenLoad_shouldPreserveSettings() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "Japanese".to_string();
    config.assistant.gemini.api_key = "test-key".to_string();
    config.fallback.distinct_summary = true;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.target_language, "Japanese");
    assert_eq!(loaded.assistant.gemini.api_key, "test-key");
    assert_eq!(loaded.fallback, config.fallback);
    Ok(())
}

#[test]
fn test_assistProvider_fromStr_shouldIgnoreCase() {
    assert_eq!("GEMINI".parse::<AssistProvider>().unwrap(), AssistProvider::Gemini);
    assert_eq!("local".parse::<AssistProvider>().unwrap(), AssistProvider::Local);
    assert!("openai".parse::<AssistProvider>().is_err());
    assert_eq!(AssistProvider::Local.to_string(), "local");
    assert_eq!(AssistProvider::Gemini.display_name(), "Gemini");
}
