use crate::error::{RaffleError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha512};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Terminator appended after every recorded line
pub const LINE_TERMINATOR: &str = "\n";

/// Marks where the digested region starts and ends
pub const DIGEST_SEPARATOR: &str = "------------------------";

/// Everything shown to the operator during a draw, in order.
///
/// `record` is the only way in: a line is logged and appended in the
/// same call, so the digest covers exactly what was displayed.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    text: String,
    lines: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a line to the operator and append it to the transcript
    pub fn record(&mut self, line: impl AsRef<str>) {
        let line = line.as_ref();
        info!("{}", line);
        self.text.push_str(line);
        self.text.push_str(LINE_TERMINATOR);
        self.lines += 1;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn len(&self) -> usize {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines == 0
    }

    pub fn digest(&self) -> TranscriptDigest {
        digest_text(&self.text)
    }
}

/// SHA-512 of a transcript, shown as standard base64
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TranscriptDigest([u8; 64]);

impl TranscriptDigest {
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl fmt::Display for TranscriptDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl fmt::Debug for TranscriptDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TranscriptDigest({})", self.to_base64())
    }
}

impl FromStr for TranscriptDigest {
    type Err = RaffleError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(s.trim())
            .map_err(|e| RaffleError::InvalidDigest(e.to_string()))?;
        let bytes: [u8; 64] = bytes.try_into().map_err(|b: Vec<u8>| {
            RaffleError::InvalidDigest(format!("expected 64 bytes, got {}", b.len()))
        })?;
        Ok(Self(bytes))
    }
}

/// Digest of raw transcript text (UTF-8 bytes)
pub fn digest_text(text: &str) -> TranscriptDigest {
    let mut hasher = Sha512::new();
    hasher.update(text.as_bytes());
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(&hasher.finalize());
    TranscriptDigest(bytes)
}

/// Undo a CRLF conversion made when a transcript was copied around.
///
/// Nothing else is touched: a missing final terminator or trailing
/// whitespace still changes the digest.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// True when `text` hashes to `expected`
pub fn verify_text(text: &str, expected: &TranscriptDigest) -> bool {
    digest_text(text) == *expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_with_terminator() {
        let mut transcript = Transcript::new();
        transcript.record("first");
        transcript.record(String::from("second"));

        assert_eq!(transcript.as_str(), "first\nsecond\n");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.lines().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_digest_matches_independent_sha512() {
        let mut transcript = Transcript::new();
        transcript.record(DIGEST_SEPARATOR);
        transcript.record("Participants 0");

        let expected = Sha512::digest(b"------------------------\nParticipants 0\n");
        assert_eq!(transcript.digest().as_bytes()[..], expected[..]);
    }

    #[test]
    fn test_empty_digest_is_known_value() {
        // SHA-512 of the empty string
        assert_eq!(
            Transcript::new().digest().to_base64(),
            "Z4PhNX7vuL3xVChQ1m2AB9Yg5AULVxXcg/SpIdNs6c5H0NE8XYXysP+DGNKHfuwvY7kxvUdBeoGlODJ6+SfaPg=="
        );
    }

    #[test]
    fn test_tampering_changes_digest() {
        let mut transcript = Transcript::new();
        transcript.record("Name: Ada (101)");
        let digest = transcript.digest();

        assert!(verify_text(transcript.as_str(), &digest));
        assert!(!verify_text("Name: Eve (666)\n", &digest));
        assert!(!verify_text("Name: Ada (101)", &digest));
    }

    #[test]
    fn test_digest_parse_roundtrip() {
        let mut transcript = Transcript::new();
        transcript.record("x");
        let digest = transcript.digest();
        let parsed: TranscriptDigest = digest.to_string().parse().unwrap();
        assert_eq!(parsed, digest);
    }

    #[test]
    fn test_digest_parse_rejects_garbage() {
        assert!("not base64!".parse::<TranscriptDigest>().is_err());
        assert!(STANDARD.encode([0u8; 32]).parse::<TranscriptDigest>().is_err());
    }

    #[test]
    fn test_normalize_line_endings_only_converts_crlf() {
        assert_eq!(normalize_line_endings("a\r\nb\r\n"), "a\nb\n");
        assert_eq!(normalize_line_endings("a\nb"), "a\nb");
        assert_eq!(normalize_line_endings("a\r"), "a\r");
    }
}
