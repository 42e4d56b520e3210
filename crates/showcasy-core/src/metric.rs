//! Display-string parsing for animated metrics
//!
//! Splits strings like `"$22.8M"` into a prefix, numeric magnitude, suffix and
//! decimal precision so a count-up can interpolate just the number while every
//! intermediate frame keeps the original precision.

use std::sync::OnceLock;

use regex::Regex;

/// Largest count that an `f64` still represents exactly (2^53)
const MAX_SCALED: f64 = 9_007_199_254_740_992.0;

fn metric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([^0-9]*)([0-9.]+)(.*)$").expect("metric pattern is valid")
    })
}

/// A metric display string split around its numeric part
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMetric {
    pub prefix: String,
    pub number: f64,
    pub suffix: String,
    /// Fraction digits in the original string
    pub decimals: u32,
}

impl ParsedMetric {
    /// Target as an integer count of the smallest displayed unit
    /// (`22.8` with one decimal is `228`)
    pub fn scaled_target(&self) -> u64 {
        (self.number * 10f64.powi(self.decimals as i32)).round() as u64
    }

    /// Format a scaled count with the original prefix, suffix and precision
    pub fn format_scaled(&self, scaled: u64) -> String {
        let value = scaled as f64 / 10f64.powi(self.decimals as i32);
        format!(
            "{}{:.*}{}",
            self.prefix, self.decimals as usize, value, self.suffix
        )
    }
}

/// A metric as displayed: either animatable or shown verbatim
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Numeric(ParsedMetric),
    /// No usable number, display as-is without animation
    Literal(String),
}

impl MetricValue {
    pub fn parse(value: &str) -> Self {
        match parse_metric(value) {
            Some(parsed) => MetricValue::Numeric(parsed),
            None => MetricValue::Literal(value.to_string()),
        }
    }

    /// Final, fully counted display string
    pub fn settled(&self) -> String {
        match self {
            MetricValue::Numeric(parsed) => parsed.format_scaled(parsed.scaled_target()),
            MetricValue::Literal(text) => text.clone(),
        }
    }
}

/// Split a display string into prefix, number, suffix and decimals
///
/// Returns `None` when no numeric run is found, the run is not a number
/// (e.g. `"1.2.3"`), or its digits cannot be counted exactly.
pub fn parse_metric(value: &str) -> Option<ParsedMetric> {
    let captures = metric_pattern().captures(value)?;
    let number_str = captures.get(2)?.as_str();
    let number: f64 = number_str.parse().ok()?;
    let decimals = number_str
        .split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0);

    let scaled = number * 10f64.powi(decimals.min(i32::MAX as u32) as i32);
    if !scaled.is_finite() || scaled > MAX_SCALED {
        return None;
    }

    Some(ParsedMetric {
        prefix: captures.get(1).map(|m| m.as_str()).unwrap_or("").to_string(),
        number,
        suffix: captures.get(3).map(|m| m.as_str()).unwrap_or("").to_string(),
        decimals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(value: &str) -> (String, f64, String, u32) {
        let parsed = parse_metric(value).unwrap();
        (parsed.prefix, parsed.number, parsed.suffix, parsed.decimals)
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(tuple("$22.8M"), ("$".to_string(), 22.8, "M".to_string(), 1));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(tuple("+24%"), ("+".to_string(), 24.0, "%".to_string(), 0));
    }

    #[test]
    fn test_parse_approximate() {
        assert_eq!(tuple("~400K"), ("~".to_string(), 400.0, "K".to_string(), 0));
    }

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(tuple("60%"), ("".to_string(), 60.0, "%".to_string(), 0));
        assert_eq!(tuple("22.8"), ("".to_string(), 22.8, "".to_string(), 1));
    }

    #[test]
    fn test_parse_failure_falls_back_to_literal() {
        assert!(parse_metric("N/A").is_none());
        assert!(parse_metric("1.2.3").is_none());
        assert_eq!(MetricValue::parse("N/A"), MetricValue::Literal("N/A".to_string()));
        assert_eq!(MetricValue::parse("N/A").settled(), "N/A");
    }

    #[test]
    fn test_oversized_precision_is_static() {
        let long = "0.123456789012345678901234";
        assert!(parse_metric(long).is_none());
        assert_eq!(MetricValue::parse(long).settled(), long);

        let huge = "$99999999999999999999M";
        assert_eq!(MetricValue::parse(huge), MetricValue::Literal(huge.to_string()));

        // Still exact: animates as usual
        let parsed = parse_metric("1234567.891").unwrap();
        assert_eq!(parsed.scaled_target(), 1_234_567_891);
    }

    #[test]
    fn test_scaled_target_and_format() {
        let parsed = parse_metric("$22.8M").unwrap();
        assert_eq!(parsed.scaled_target(), 228);
        assert_eq!(parsed.format_scaled(0), "$0.0M");
        assert_eq!(parsed.format_scaled(57), "$5.7M");
        assert_eq!(parsed.format_scaled(228), "$22.8M");
    }

    #[test]
    fn test_settled_matches_authored_string() {
        for value in ["$22.8M", "+24%", "~400K", "$15.2M", "60%"] {
            assert_eq!(MetricValue::parse(value).settled(), value);
        }
    }
}
