//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    parse_or_default(var, std::env::var(var).ok(), default)
}

/// Boolean switch: `1`, `true`, `yes` and `on` enable it (case-insensitive).
pub fn env_flag(var: &str, default: bool) -> bool {
    flag_or_default(var, std::env::var(var).ok(), default)
}

fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    raw: Option<String>,
    default: T,
) -> T {
    let Some(value) = raw else {
        return default;
    };
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(
                var,
                value = %value,
                default = %default,
                "invalid env var value, using default"
            );
            default
        },
    }
}

fn flag_or_default(var: &str, raw: Option<String>, default: bool) -> bool {
    let Some(value) = raw else {
        return default;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(var, value = %value, default, "invalid boolean env var, using default");
            default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_value() {
        let result: u32 = parse_or_default("SUBINTEL_MAX_TOKENS", Some("42".to_owned()), 10);
        assert_eq!(result, 42);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let result: u64 =
            parse_or_default("SUBINTEL_HTTP_TIMEOUT_SECS", Some(" 15 ".to_owned()), 60);
        assert_eq!(result, 15);
    }

    #[test]
    fn invalid_value_falls_back() {
        let result: u32 = parse_or_default("SUBINTEL_MAX_TOKENS", Some("banana".to_owned()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn missing_value_falls_back() {
        let result: u32 = parse_or_default("SUBINTEL_MAX_TOKENS", None, 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn empty_value_falls_back() {
        let result: u32 = parse_or_default("SUBINTEL_MAX_TOKENS", Some(String::new()), 10);
        assert_eq!(result, 10);
    }

    #[test]
    fn flag_accepts_common_spellings() {
        assert!(flag_or_default("SUBINTEL_JOURNEY_CHART", Some("TRUE".to_owned()), false));
        assert!(flag_or_default("SUBINTEL_JOURNEY_CHART", Some("on".to_owned()), false));
        assert!(!flag_or_default("SUBINTEL_JOURNEY_CHART", Some("0".to_owned()), true));
        assert!(flag_or_default("SUBINTEL_JOURNEY_CHART", Some("maybe".to_owned()), true));
        assert!(!flag_or_default("SUBINTEL_JOURNEY_CHART", None, false));
    }

    #[test]
    fn env_parse_reads_unset_variable_as_default() {
        let result: u32 = env_parse_with_default("SUBINTEL_TEST_SURELY_UNSET_4711", 7);
        assert_eq!(result, 7);
    }
}
