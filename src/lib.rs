//! Raffle Draw - seeded, auditable prize draw for event attendees
//!
//! Reads an attendee export, drops ineligible rows (blank names, the
//! organizer), deduplicates by participant id and draws a fixed number of
//! unique winners with a seeded ChaCha20 generator. Every line shown to the
//! operator is kept in a [`Transcript`]; the SHA-512 of that transcript is
//! printed last so anyone holding the published log can check it was not
//! edited afterwards.
//!
//! ## Draw Procedure
//!
//! ```text
//! Load rows → Filter → Deduplicate by id → Draw (swap-remove sampling) → Record → Digest
//! ```
//!
//! - **Seed**: caller supplied for replay, otherwise drawn from the OS
//! - **Small turnout**: when the pool is no larger than the prize count,
//!   everyone wins in the order they first appear
//! - **Digest**: base64 SHA-512 over the recorded lines, each ending in `\n`
//!
//! ## Example
//!
//! ```no_run
//! use raffle_draw::cli::{run_draw, verify_transcript, DrawOptions};
//! use std::path::Path;
//!
//! let options = DrawOptions {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let report = run_draw(Path::new("attendees.csv"), &options).unwrap();
//! for (id, name) in report.winners() {
//!     println!("{} ({})", name, id);
//! }
//!
//! std::fs::write("transcript.txt", report.transcript.as_str()).unwrap();
//! let check = verify_transcript(Path::new("transcript.txt"), &report.digest.to_string()).unwrap();
//! assert!(check.matches());
//! ```

pub mod cli;
pub mod config;
pub mod draw;
pub mod eligibility;
pub mod error;
pub mod loader;
pub mod participant;
pub mod raffle;
pub mod seed;
pub mod transcript;

pub use config::DrawConfig;
pub use error::{RaffleError, Result};
pub use raffle::{DrawReport, Raffle};
pub use seed::DrawSeed;
pub use transcript::{Transcript, TranscriptDigest};
