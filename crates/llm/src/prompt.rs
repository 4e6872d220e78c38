//! System prompt for SQL synthesis.
//!
//! The prompt pins the schema, the column aliases and three canonical
//! query templates. Changing any of it changes what the model writes, so
//! every edit bumps [`PROMPT_VERSION`] and must keep the canonical
//! questions in [`CANONICAL_QUESTIONS`] answerable.

use subintel_core::{FACT_IMPRESSIONS_TABLE, JOURNEY_TABLE, MARKOV_SUMMARY_TABLE};

/// Bumped whenever the prompt text changes.
pub const PROMPT_VERSION: u32 = 1;

/// Journey-length breakdown.
pub const JOURNEY_TEMPLATE: &str =
    "SELECT touches, converters, users, conversion_rate_pct, avg_ltv FROM journey ORDER BY touches";

/// Credit each converting user's latest touch.
pub const LAST_TOUCH_TEMPLATE: &str = "WITH ranked AS (
SELECT campaign, revenue,
ROW_NUMBER() OVER (PARTITION BY user_id ORDER BY click_pos DESC) AS rn
FROM fact_impressions WHERE conversion = 1
)
SELECT campaign, COUNT(*) AS conversions, SUM(revenue) AS revenue
FROM ranked WHERE rn = 1 GROUP BY campaign ORDER BY conversions DESC LIMIT 15";

/// Credit each converting user's earliest touch.
pub const FIRST_TOUCH_TEMPLATE: &str = "WITH ranked AS (
SELECT campaign, revenue,
ROW_NUMBER() OVER (PARTITION BY user_id ORDER BY click_pos ASC) AS rn
FROM fact_impressions WHERE conversion = 1
)
SELECT campaign, COUNT(*) AS conversions, SUM(revenue) AS revenue
FROM ranked WHERE rn = 1 GROUP BY campaign ORDER BY conversions DESC LIMIT 15";

/// A question the prompt is expected to answer with a fixed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalQuestion {
    pub question: &'static str,
    pub sql: &'static str,
}

/// Canonical questions paired with the exact SQL they must produce.
pub const CANONICAL_QUESTIONS: &[CanonicalQuestion] = &[
    CanonicalQuestion {
        question: "How many conversions per journey length?",
        sql: JOURNEY_TEMPLATE,
    },
    CanonicalQuestion {
        question: "Which touches have the highest conversion rates?",
        sql: JOURNEY_TEMPLATE,
    },
    CanonicalQuestion {
        question: "Top 15 last-touch campaigns by revenue",
        sql: LAST_TOUCH_TEMPLATE,
    },
    CanonicalQuestion {
        question: "Top 15 first-touch campaigns by conversions",
        sql: FIRST_TOUCH_TEMPLATE,
    },
];

/// Builds the system message sent ahead of every question.
#[must_use]
pub fn system_prompt() -> String {
    format!(
        "You are a perfect SQLite SQL expert working with this exact dataset.

--- SCHEMA AND COLUMN MAPPING ---
CORE TABLES:

{FACT_IMPRESSIONS_TABLE} (user_id, campaign, click_pos, conversion, revenue, plan)

{JOURNEY_TABLE} (touches, users, converters, conversion_rate_pct, avg_ltv)

GENERATED TABLE (Crucial Schema):

{MARKOV_SUMMARY_TABLE} (channel_name, click, original_conversions, original_conversion_rate, total_conversions, attributed_conversion_rate, total_revenue)

MANDATORY COLUMN ALIASES/MAPPING:
When a user requests a column, use the corresponding name from the GENERATED TABLE list above.

If the user asks for 'revenue' or 'total revenue', you MUST use total_revenue.

If the user asks for 'conversions', you MUST use total_conversions (for Markov/Attributed) or original_conversions (for Baseline/Impressions stats).

The term 'campaign' is an acceptable alias for channel_name.

When a user asks about 'touches', always include converters in the output.

--- MANDATORY TEMPLATES (use exactly) ---

Journey questions
-> {JOURNEY_TEMPLATE}

Last-touch attribution
-> {LAST_TOUCH_TEMPLATE}

First-touch attribution
-> {FIRST_TOUCH_TEMPLATE}

For Markov, use the table {MARKOV_SUMMARY_TABLE}. Do NOT use SUM() or GROUP BY on total_revenue or total_conversions, as these columns are already aggregated results from the Markov simulation.

--- CONSTRAINTS ---

THERE IS NO summary_df TABLE. NEVER mention or use it.

For limiting results, ALWAYS use the standard SQL LIMIT keyword at the end of the query. NEVER use 'TOP'.

Return ONLY clean SQL. No markdown, no backticks, no explanations.
"
    )
}
