//! Numeric-segment version ordering.
//!
//! Release tags come in many shapes (`1.0.1`, `v2.3`, `release-1.2.3`);
//! what matters for an update decision is the dotted numeric run inside
//! them. Parsing is total and ordering is numeric per segment, so
//! `1.9 < 1.10` and `1.0 < 1.0.0`.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Matches the first dotted run of numeric segments in a tag.
fn segment_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+(?:\.\d+)*").expect("static regex"))
}

/// A version parsed into dot-separated numeric segments.
///
/// Input without any digits parses to an empty version, which orders below
/// every real one. Anything after the numeric run is ignored, so
/// `1.2.3-beta` compares as `1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    /// Parse a version string or release tag. Never fails.
    pub fn parse(input: &str) -> Self {
        let segments = match segment_run().find(input) {
            Some(run) => run
                .as_str()
                .split('.')
                .filter_map(|s| s.parse().ok())
                .collect(),
            None => Vec::new(),
        };
        Self { segments }
    }

    /// True if the input carried no numeric segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The parsed numeric segments.
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }
}

impl Ord for Version {
    /// Segment-wise numeric comparison; on a shared prefix the version
    /// with more segments orders higher (`1.0 < 1.0.0`).
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments.cmp(&other.segments)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "0");
        }
        let joined = self
            .segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{}", joined)
    }
}
