use regex::Regex;

use crate::domain::model::{Span, SpanKind};

/// One alternation, one named group per span kind. Alternative order is
/// the priority order: when an exclusion grammar and the numeric grammar
/// both match at the same position, the exclusion wins because the engine
/// prefers earlier branches. Numbers embedded in a longer exclusion match
/// (a URL, a timestamp) are consumed along with it and never reach the
/// numeric branch.
const TOKEN_PATTERN: &str = concat!(
    r"(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:\d{2})?)",
    r"|(?P<date>\d{4}-\d{2}-\d{2})",
    r"|(?P<time>\d{2}:\d{2}:\d{2}(?:\.\d+)?)",
    r"|(?P<ip>\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b)",
    r"|(?P<semver>\b\d+\.\d+\.\d+\b)",
    r"|(?P<url>https?://\S+)",
    r"|(?P<num>-?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)",
);

const GROUP_KINDS: &[(&str, SpanKind)] = &[
    ("ts", SpanKind::IsoTimestamp),
    ("date", SpanKind::Date),
    ("time", SpanKind::TimeOfDay),
    ("ip", SpanKind::Ipv4),
    ("semver", SpanKind::Semver),
    ("url", SpanKind::Url),
    ("num", SpanKind::NumericCandidate),
];

pub struct TokenScanner {
    pattern: Regex,
}

impl TokenScanner {
    pub fn new() -> Self {
        let pattern = Regex::new(TOKEN_PATTERN).expect("Invalid token pattern");
        Self { pattern }
    }

    /// Classify every digit-bearing token of `text` in a single pass.
    /// Returned spans are in text order and never overlap.
    pub fn scan(&self, text: &str) -> Vec<Span> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                for &(name, kind) in GROUP_KINDS {
                    if let Some(m) = caps.name(name) {
                        return Some(Span::new(kind, m.start(), m.end()));
                    }
                }
                None
            })
            .collect()
    }
}

impl Default for TokenScanner {
    fn default() -> Self {
        Self::new()
    }
}
