//! Compile-time constants and tunables shared across the crate.

/// Application name used in log lines and the user agent.
pub const APP_NAME: &str = "quartet";
/// Application version injected from `Cargo.toml` at compile time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variables that may carry the provider API key, in priority order.
pub const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "QUARTET_API_KEY"];
/// Environment variables that may override the provider base URL.
pub const BASE_URL_VARS: &[&str] = &["QUARTET_BASE_URL", "GEMINI_BASE_URL"];
/// Environment variables that may override the chat model.
pub const MODEL_VARS: &[&str] = &["QUARTET_MODEL", "GEMINI_MODEL"];
/// Environment variable holding an optional per-request timeout in seconds.
pub const TIMEOUT_VAR: &str = "QUARTET_TIMEOUT_SECS";
/// Environment variable holding the diagnostic log threshold.
pub const LOG_LEVEL_VAR: &str = "QUARTET_LOG";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
/// Default OpenAI-compatible base URL (Gemini's compatibility endpoint).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai/";

// ── Session text ─────────────────────────────────────────────────────

/// Inputs that end the session, compared case-insensitively.
pub const SENTINELS: &[&str] = &["quit", "exit"];

pub const PROMPT: &str = "Your question or sentence: ";
pub const PROCESSING: &str = "Processing your input...";
pub const FAREWELL: &str = "Goodbye! Stay curious! #KnowledgeIsPower";
/// Error text reported when input closes before a sentinel.
pub const END_OF_INPUT: &str = "EOF when reading a line";
pub const RESTART_HINT: &str = "Please restart the application or try a different input.";

/// Banner lines printed once before the first prompt.
pub const BANNER: &[&str] = &[
    "--- Welcome to the Tweet-Style Answer, Sentiment Analysis, English Tutor & Banking Assistant Agents! ---",
    "Ask any general knowledge question, use 'fact-check:' for verification, ask about English grammar/vocabulary, or pose banking-related questions.",
    "You can also provide a sentence for English correction.",
    "The SentimentAnalyzer will assess your question's sentiment.",
    "Type 'quit' or 'exit' to end the session.",
];
