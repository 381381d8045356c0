/*!
 * # scrivai - AI writing assistant with a local fallback
 *
 * A Rust library for AI-assisted text transformations: summarization, tone
 * analysis, formal rewriting, concise rewriting and translation.
 *
 * ## Features
 *
 * - Remote transformations through the Gemini `generateContent` API
 * - Deterministic, rule-based local fallback for every transformation
 * - Retry with exponential backoff, request timeouts and a result cache
 * - ISO 639-1 and ISO 639-2 language code support for translation targets
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `fallback`: the local rule engine:
 *   - `fallback::segmenter`: sentence splitting
 *   - `fallback::rewrite`: phrase substitution scanner
 *   - `fallback::summarizer`, `fallback::tone`, `fallback::formalizer`,
 *     `fallback::concise`, `fallback::translator`: one component per transformation
 * - `assist`: remote-first service with fallback, prompts and cache
 * - `providers`: client implementations for remote models:
 *   - `providers::gemini`: Gemini API client
 *   - `providers::mock`: scripted provider for tests
 * - `app_config`: Configuration management
 * - `file_utils`: Opening and saving text documents
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod assist;
pub mod errors;
pub mod fallback;
pub mod file_utils;
pub mod language_utils;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use assist::{AssistOutcome, AssistService, Origin};
pub use errors::{AppError, LexiconError, ProviderError};
pub use fallback::{classify, formalize, make_concise, summarize, translate, FallbackEngine, ToneLabel, ToneReport, TransformKind};
pub use language_utils::{get_language_name, normalize_to_part2t};
