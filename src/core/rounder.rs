use std::sync::OnceLock;

use crate::core::formatter::format_significant;
use crate::core::scanner::TokenScanner;
use crate::domain::model::{Span, SpanKind};

/// Rewrites floating point literals in free-form text to a requested
/// number of significant digits, leaving excluded tokens (IPs, semantic
/// versions, timestamps, dates, times, URLs) and plain integers alone.
///
/// This is a lexical heuristic, not a parser. It works well for logs,
/// serialized JSON and similar text, but text can embed numbers in
/// notations the exclusion grammars do not know about.
pub struct NumericRounder {
    scanner: TokenScanner,
}

impl NumericRounder {
    pub fn new() -> Self {
        Self {
            scanner: TokenScanner::new(),
        }
    }

    /// Rebuild `text` with every eligible float rounded to `digits`
    /// significant digits. Callers guarantee `digits >= 1`; a zero or
    /// absent precision means the caller skips this call entirely.
    pub fn round(&self, text: &str, digits: usize) -> String {
        let mut output = String::with_capacity(text.len());
        let mut cursor = 0;

        // Unmatched text and exclusion spans are sliced verbatim from the
        // original offsets.
        for span in self.scanner.scan(text) {
            output.push_str(&text[cursor..span.start]);
            match rewrite_candidate(text, &span, digits) {
                Some(rounded) => output.push_str(&rounded),
                None => output.push_str(span.text(text)),
            }
            cursor = span.end;
        }
        output.push_str(&text[cursor..]);

        output
    }
}

impl Default for NumericRounder {
    fn default() -> Self {
        Self::new()
    }
}

/// Round floating point numbers in `text` to `digits` significant digits.
///
/// The shared scanner is compiled on first use; the function itself is
/// pure and safe to call from several threads at once.
pub fn round_floats(text: &str, digits: usize) -> String {
    static ROUNDER: OnceLock<NumericRounder> = OnceLock::new();
    ROUNDER.get_or_init(NumericRounder::new).round(text, digits)
}

/// Decide the replacement for one span. `None` means the original text
/// passes through verbatim.
fn rewrite_candidate(text: &str, span: &Span, digits: usize) -> Option<String> {
    if span.kind != SpanKind::NumericCandidate {
        return None;
    }
    let token = span.text(text);

    // Plain integers carry no floating point noise worth rounding.
    if !token.contains('.') && !token.contains(|c| c == 'e' || c == 'E') {
        return None;
    }

    // A '-' glued to a preceding word character is separator text
    // ("1-2.5"), not a sign; the unsigned remainder stands on its own.
    let (prefix, literal, start) = match token.strip_prefix('-') {
        Some(rest) if glued_before(text, span.start) => ("-", rest, span.start + 1),
        _ => ("", token, span.start),
    };

    // Reject tokens that sit inside a longer alphanumeric or dotted run.
    if glued_before(text, start) || glued_after(text, span.end) {
        return None;
    }

    let value: f64 = literal.parse().ok()?;
    if !value.is_finite() {
        // An exponent beyond f64 range; keep the literal as written.
        return None;
    }

    Some(format!("{}{}", prefix, format_significant(value, digits)))
}

fn is_word_or_dot(c: char) -> bool {
    c == '.' || c == '_' || c.is_alphanumeric()
}

fn glued_before(text: &str, idx: usize) -> bool {
    text[..idx].chars().next_back().is_some_and(is_word_or_dot)
}

fn glued_after(text: &str, idx: usize) -> bool {
    text[idx..].chars().next().is_some_and(is_word_or_dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_simple_floats() {
        assert_eq!(round_floats("Value is 3.14159", 3), "Value is 3.14");
        assert_eq!(round_floats("Temp: 1.92°F", 2), "Temp: 1.9°F");
        assert_eq!(
            round_floats("Mixed: 3.14159, 2.71828e0, 0.00012345", 2),
            "Mixed: 3.1, 2.7, 0.00012"
        );
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(round_floats("Avogadro: 6.022e23", 4), "Avogadro: 6.022e+23");
        assert_eq!(round_floats("Avogadro: 6.022e23", 1), "Avogadro: 6e+23");
        assert_eq!(round_floats("Coords: -12345.6789", 3), "Coords: -1.23e+04");
    }

    #[test]
    fn test_integers_are_untouched() {
        assert_eq!(
            round_floats("Just an int: 987654321", 3),
            "Just an int: 987654321"
        );
    }

    #[test]
    fn test_ip_addresses_are_untouched() {
        assert_eq!(round_floats("IP: 192.168.0.1", 2), "IP: 192.168.0.1");
        assert_eq!(
            round_floats("my ip is 192.168.0.1 and e=1.1234", 2),
            "my ip is 192.168.0.1 and e=1.1"
        );
    }

    #[test]
    fn test_semver_is_untouched() {
        assert_eq!(round_floats("SemVer: 1.21.315", 1), "SemVer: 1.21.315");
    }

    #[test]
    fn test_timestamps_are_untouched() {
        assert_eq!(
            round_floats("Timestamp: 2023-04-01T12:34:56.789", 2),
            "Timestamp: 2023-04-01T12:34:56.789"
        );
        assert_eq!(round_floats("Due 2024-12-31 at 08:15:30.25", 2), "Due 2024-12-31 at 08:15:30.25");
    }

    #[test]
    fn test_urls_are_untouched() {
        assert_eq!(
            round_floats("URL: https://example.com/path?query=123.456", 2),
            "URL: https://example.com/path?query=123.456"
        );
    }

    #[test]
    fn test_dotted_dates_are_untouched() {
        let text = "Am 24.10.2024 habe ich Geburtstag";
        assert_eq!(round_floats(text, 2), text);
    }

    #[test]
    fn test_mixed_line_rounds_only_the_float() {
        let text = "Server 10.0.0.1:3000 reports pi=3.14159 and IP 192.168.1.2";
        assert_eq!(
            round_floats(text, 3),
            "Server 10.0.0.1:3000 reports pi=3.14 and IP 192.168.1.2"
        );
    }

    #[test]
    fn test_leading_dot_literal() {
        assert_eq!(round_floats("offset = .5 units", 1), "offset = 0.5 units");
    }

    #[test]
    fn test_glued_tokens_are_left_alone() {
        assert_eq!(round_floats("build v1.2345 shipped", 2), "build v1.2345 shipped");
        assert_eq!(round_floats("hash 3.14abc", 2), "hash 3.14abc");
    }

    #[test]
    fn test_glued_minus_is_a_separator() {
        assert_eq!(round_floats("range 1-2.5567", 2), "range 1-2.6");
    }

    #[test]
    fn test_overflowing_exponent_is_left_alone() {
        assert_eq!(round_floats("big: 1e999", 3), "big: 1e999");
    }

    #[test]
    fn test_rounding_is_a_fixpoint() {
        let text = "pi=3.14159 at 2023-04-01T12:34:56.789 from 10.0.0.1, e=2.71828e0";
        let once = round_floats(text, 3);
        assert_eq!(round_floats(&once, 3), once);
    }
}
