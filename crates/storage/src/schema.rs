//! DDL for the source tables and the journey rebuild.

/// Source tables the importer writes into. The journey table is never
/// declared here: it is always derived.
pub(crate) const SOURCE_TABLES_DDL: &str = r"
CREATE TABLE IF NOT EXISTS fact_impressions (
    user_id TEXT NOT NULL,
    campaign TEXT NOT NULL,
    click_pos INTEGER NOT NULL,
    conversion INTEGER NOT NULL DEFAULT 0,
    revenue REAL NOT NULL DEFAULT 0,
    plan TEXT
);
CREATE INDEX IF NOT EXISTS idx_fact_impressions_user ON fact_impressions(user_id, click_pos);

CREATE TABLE IF NOT EXISTS markov_summary (
    channel_name TEXT NOT NULL,
    click INTEGER NOT NULL DEFAULT 0,
    original_conversions REAL NOT NULL DEFAULT 0,
    original_conversion_rate REAL NOT NULL DEFAULT 0,
    total_conversions REAL NOT NULL DEFAULT 0,
    attributed_conversion_rate REAL NOT NULL DEFAULT 0,
    total_revenue REAL NOT NULL DEFAULT 0
);
";

/// Journey-length aggregation. Per user: touch count, whether they
/// converted, and revenue counted only from converting touches. Per touch
/// count: users, converters, rate rounded to 2 decimals and average
/// revenue over all users in the bucket rounded to 1 decimal.
pub(crate) const JOURNEY_REBUILD_SQL: &str = r"
DROP TABLE IF EXISTS journey;
CREATE TABLE journey AS
WITH user_journey AS (
    SELECT
        user_id,
        COUNT(*) AS touches,
        MAX(conversion) AS converted,
        MAX(CASE WHEN conversion = 1 THEN revenue ELSE 0 END) AS revenue
    FROM fact_impressions
    GROUP BY user_id
)
SELECT
    touches,
    COUNT(*) AS users,
    SUM(converted) AS converters,
    ROUND(100.0 * SUM(converted) / COUNT(*), 2) AS conversion_rate_pct,
    ROUND(AVG(revenue), 1) AS avg_ltv
FROM user_journey
GROUP BY touches
ORDER BY touches;
";

pub(crate) const INSERT_IMPRESSION_SQL: &str = "INSERT INTO fact_impressions \
     (user_id, campaign, click_pos, conversion, revenue, plan) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

pub(crate) const INSERT_MARKOV_SQL: &str = "INSERT INTO markov_summary \
     (channel_name, click, original_conversions, original_conversion_rate, total_conversions, \
      attributed_conversion_rate, total_revenue) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
