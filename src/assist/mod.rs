/*!
 * Remote-first text assistant.
 *
 * - `assist::core`: the service that calls the provider and falls back
 * - `assist::prompts`: prompt templates per transformation
 * - `assist::cache`: session cache of remote results
 */

pub mod cache;
pub mod core;
pub mod prompts;

pub use self::cache::ResultCache;
pub use self::core::{AssistOutcome, AssistService, LocalReason, Origin};
pub use self::prompts::{build_prompt, PromptTemplate};
