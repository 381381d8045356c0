/*!
 * Integration tests for the remote-first assist service
 *
 * Every remote failure must still produce a result, computed by the local
 * rules, and report where it came from.
 */

use std::sync::Arc;
use std::time::Duration;

use scrivai::app_config::{AssistProvider, Config};
use scrivai::assist::{AssistService, LocalReason, Origin, ResultCache};
use scrivai::fallback::translator::FALLBACK_TRANSLATION_NOTICE;
use scrivai::fallback::FallbackEngine;
use scrivai::providers::mock::MockProvider;
use scrivai::TransformKind;
use crate::common;

fn service_with(provider: MockProvider, timeout: Duration) -> AssistService {
    AssistService::new(
        Some(Arc::new(provider)),
        FallbackEngine::builtin(),
        ResultCache::new(true),
        timeout,
    )
}

fn remote_failed(origin: &Origin) -> Option<&str> {
    match origin {
        Origin::Local(LocalReason::RemoteFailed(message)) => Some(message.as_str()),
        _ => None,
    }
}

#[tokio::test]
async fn test_run_workingProvider_shouldReturnRemoteResult() {
    common::init_test_logging();
    let service = service_with(MockProvider::working(), Duration::from_secs(1));

    let outcome = service.run(TransformKind::Formal, "gonna be late").await.unwrap();

    assert!(outcome.is_remote());
    assert!(outcome.text.starts_with("[REMOTE] Please rewrite the following text in a more formal tone"));
    assert!(outcome.text.contains("gonna be late"));
    assert_eq!(outcome.title(), TransformKind::Formal.label());
}

#[tokio::test]
async fn test_run_repeatedRequest_shouldBeServedFromCache() {
    let provider = MockProvider::working();
    let service = service_with(provider.clone(), Duration::from_secs(1));

    let first = service.run(TransformKind::Summarize, "One. Two.").await.unwrap();
    let second = service.run(TransformKind::Summarize, "One. Two.").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.request_count(), 1);

    service.run(TransformKind::Concise, "One. Two.").await.unwrap();
    assert_eq!(provider.request_count(), 2);
}

#[tokio::test]
async fn test_run_failingProvider_shouldFallBackToLocalRules() {
    common::init_test_logging();
    let service = service_with(MockProvider::failing(), Duration::from_secs(1));

    let outcome = service.run(TransformKind::Concise, "In order to win, we play.").await.unwrap();

    assert_eq!(outcome.text, "to win, we play.");
    let message = remote_failed(&outcome.origin).expect("remote failure recorded");
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_run_failedResults_shouldNotBeCached() {
    let provider = MockProvider::failing();
    let service = service_with(provider.clone(), Duration::from_secs(1));

    service.run(TransformKind::Formal, "I can't do it.").await.unwrap();
    service.run(TransformKind::Formal, "I can't do it.").await.unwrap();

    assert_eq!(provider.request_count(), 2);
    assert!(service.cache().is_empty());
}

#[tokio::test]
async fn test_run_unauthorizedProvider_shouldTranslateLocally() {
    let service = service_with(MockProvider::unauthorized(), Duration::from_secs(1));

    let outcome = service
        .run(TransformKind::Translate("Spanish".to_string()), "Hello")
        .await
        .unwrap();

    assert_eq!(outcome.text, format!("Hola{}", FALLBACK_TRANSLATION_NOTICE));
    assert!(remote_failed(&outcome.origin).unwrap().contains("API key not valid"));
}

#[tokio::test]
async fn test_run_emptyRemoteAnswer_shouldFallBack() {
    let service = service_with(MockProvider::empty(), Duration::from_secs(1));

    let outcome = service.run(TransformKind::Tone, "Hey, thanks!").await.unwrap();

    assert!(outcome.text.starts_with("Tone: "));
    assert!(matches!(outcome.origin, Origin::Local(LocalReason::RemoteFailed(_))));
}

#[tokio::test]
async fn test_run_slowProvider_shouldTimeOutAndFallBack() {
    let service = service_with(MockProvider::slow(2_000), Duration::from_millis(50));

    let outcome = service.run(TransformKind::Formal, "I can't do it.").await.unwrap();

    assert_eq!(outcome.text, "I cannot perform it.");
    assert!(remote_failed(&outcome.origin).unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_run_intermittentProvider_shouldMixOrigins() {
    let service = service_with(MockProvider::intermittent(2), Duration::from_secs(1));

    let first = service.run(TransformKind::Formal, "first text").await.unwrap();
    let second = service.run(TransformKind::Formal, "second text").await.unwrap();

    assert!(first.is_remote());
    assert!(!second.is_remote());
}

#[tokio::test]
async fn test_fromConfig_localProvider_shouldBypassRemote() {
    let mut config = Config::default();
    config.assistant.provider = AssistProvider::Local;

    let service = AssistService::from_config(&config).unwrap();
    assert!(service.provider_name().is_none());
    assert!(service.test_connection().await.is_ok());

    let outcome = service.run(TransformKind::Formal, "I can't do it.").await.unwrap();
    assert_eq!(outcome.origin, Origin::Local(LocalReason::Bypassed));
    assert_eq!(outcome.text, "I cannot perform it.");
}

#[tokio::test]
async fn test_fromConfig_missingApiKey_shouldFallBackWithoutNetwork() {
    common::init_test_logging();
    let mut config = Config::default();
    config.assistant.gemini.endpoint = common::closed_port_url().await;

    let service = AssistService::from_config(&config).unwrap();
    assert_eq!(service.provider_name(), Some("gemini"));

    let outcome = service.run(TransformKind::Concise, "In order to win, we play.").await.unwrap();
    assert_eq!(outcome.text, "to win, we play.");
    assert!(remote_failed(&outcome.origin).unwrap().contains("API key is not set"));
}

#[tokio::test]
async fn test_fromConfig_unreachableEndpoint_shouldFallBack() {
    let mut config = Config::default();
    config.assistant.gemini.api_key = "test-key".to_string();
    config.assistant.gemini.endpoint = common::closed_port_url().await;
    config.assistant.gemini.retry_count = 0;
    config.assistant.gemini.timeout_secs = 5;

    let service = AssistService::from_config(&config).unwrap();
    let outcome = service
        .run(TransformKind::Translate("German".to_string()), "Yes. No.")
        .await
        .unwrap();

    assert_eq!(outcome.text, format!("Ja. Nein.{}", FALLBACK_TRANSLATION_NOTICE));
    assert!(!outcome.is_remote());
}

#[tokio::test]
async fn test_fromConfig_distinctSummary_shouldKeepRepeatedSentences() {
    let mut config = Config::default();
    config.assistant.provider = AssistProvider::Local;
    config.fallback.distinct_summary = true;

    let service = AssistService::from_config(&config).unwrap();
    let text = "Same.Two.Three.Same.Five.Six.Seven.Eight.Nine.";
    let outcome = service.run(TransformKind::Summarize, text).await.unwrap();

    assert_eq!(outcome.text, "Same. Same. Nine.");
}
