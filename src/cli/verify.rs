use crate::error::Result;
use crate::transcript::{digest_text, normalize_line_endings, TranscriptDigest};
use std::fmt;
use std::path::Path;

/// Outcome of checking a republished transcript against its digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub expected: TranscriptDigest,
    pub actual: TranscriptDigest,
    pub lines: usize,
}

impl Verification {
    pub fn matches(&self) -> bool {
        self.expected == self.actual
    }
}

impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transcript lines: {}", self.lines)?;
        writeln!(f, "Expected digest:  {}", self.expected)?;
        writeln!(f, "Computed digest:  {}", self.actual)?;
        if self.matches() {
            writeln!(f, "Digest matches: transcript is unaltered")
        } else {
            writeln!(f, "Digest MISMATCH: transcript was altered")
        }
    }
}

/// Recompute the digest over a transcript file's exact bytes.
///
/// CRLF line endings are read as `\n`; every other byte counts,
/// including the terminator after the last line.
pub fn verify_transcript(path: &Path, expected: &str) -> Result<Verification> {
    let expected: TranscriptDigest = expected.parse()?;
    let contents = std::fs::read_to_string(path)?;
    let text = normalize_line_endings(&contents);

    Ok(Verification {
        expected,
        actual: digest_text(&text),
        lines: text.lines().count(),
    })
}
