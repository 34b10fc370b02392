use std::fmt;

/// Classification of a digit-bearing region of the scanned text.
///
/// Every kind except `NumericCandidate` is an exclusion: the region looks
/// numeric but must pass through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    IsoTimestamp,
    Date,
    TimeOfDay,
    Ipv4,
    Semver,
    Url,
    NumericCandidate,
}

impl SpanKind {
    pub fn is_exclusion(&self) -> bool {
        !matches!(self, SpanKind::NumericCandidate)
    }
}

/// A half-open byte range `[start, end)` into the scanned text, tagged with
/// its classification. Spans produced by one scan pass never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Slice the original text this span was produced from.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// What happened to a snapshot during a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    /// No snapshot existed; the current content was written.
    Created,
    /// The stored snapshot equals the current content.
    Matched,
    /// Update mode was on; the stored snapshot was overwritten.
    Updated,
}

/// First point of difference between a stored snapshot and the current
/// content. Only the first differing line is reported; later lines may
/// differ too but are not inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffReport {
    Changed {
        line: usize,
        expected: String,
        current: String,
    },
    CurrentShorter {
        line: usize,
        expected: String,
    },
    CurrentLonger {
        line: usize,
        current: String,
    },
    Identical,
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffReport::Changed {
                line,
                expected,
                current,
            } => write!(
                f,
                "In line {} there is a mismatch between the snapshot and the current result:\n\
                 expected: {:?}\n\
                 current:  {:?}\n\
                 Subsequent lines may also differ but will not be checked.",
                line, expected, current
            ),
            DiffReport::CurrentShorter { line, expected } => write!(
                f,
                "In line {} the current result is shorter than the snapshot:\n\
                 expected: {:?}\n\
                 current:  <end of content>",
                line, expected
            ),
            DiffReport::CurrentLonger { line, current } => write!(
                f,
                "In line {} the current result is longer than the snapshot:\n\
                 expected: <end of content>\n\
                 current:  {:?}",
                line, current
            ),
            DiffReport::Identical => write!(f, "No differences found"),
        }
    }
}
