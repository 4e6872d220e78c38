//! Shared constants for subintel.
//!
//! Table names, model defaults and presentation limits live here so the
//! prompt, the store and the renderers agree on them.

/// Impression/touch fact table, externally sourced.
pub const FACT_IMPRESSIONS_TABLE: &str = "fact_impressions";

/// Journey-length summary, rebuilt from `fact_impressions` on every write-mode open.
pub const JOURNEY_TABLE: &str = "journey";

/// Markov channel attribution summary, computed outside this system.
pub const MARKOV_SUMMARY_TABLE: &str = "markov_summary";

/// Default chat model used for SQL synthesis.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Default OpenAI-compatible endpoint root (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";

/// Output-token budget for one synthesized query.
pub const DEFAULT_MAX_TOKENS: u32 = 600;

/// Transport timeout for the model call, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// File name of the analytical store inside the data directory.
pub const DEFAULT_DB_FILE: &str = "mta_subs.db";

/// Campaign charts only plot this many leading rows.
pub const CHART_MAX_ROWS: usize = 20;

/// Rotation applied to campaign category labels, in degrees.
pub const CHART_TICK_ANGLE: i32 = 45;

/// Questions known to map onto the canonical templates or the Markov table.
pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "Which touches have the highest conversion rates?",
    "How many conversions per journey length?",
    "Top 15 last-touch campaigns by revenue",
    "Top 15 first-touch campaigns by conversions",
    "Top 10 markov campaigns",
];
