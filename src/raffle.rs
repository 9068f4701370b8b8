use crate::config::DrawConfig;
use crate::draw::{draw_winners, DrawKind, DrawOutcome, DrawPool};
use crate::eligibility::{Eligibility, EligibilityFilter};
use crate::error::Result;
use crate::loader::ParticipantSource;
use crate::participant::{ParticipantRecord, ParticipantSet};
use crate::seed::DrawSeed;
use crate::transcript::{Transcript, TranscriptDigest, DIGEST_SEPARATOR};
use tracing::{debug, info};

/// Result of one completed draw
#[derive(Debug, Clone)]
pub struct DrawReport {
    pub seed: DrawSeed,
    pub participants: ParticipantSet,
    pub outcome: DrawOutcome,
    pub transcript: Transcript,
    pub digest: TranscriptDigest,
}

impl DrawReport {
    /// `(id, name)` pairs in draw order
    pub fn winners(&self) -> Vec<(&str, &str)> {
        self.outcome
            .winners
            .iter()
            .map(|id| {
                let name = self.participants.name_of(id).unwrap_or_default();
                (id.as_str(), name)
            })
            .collect()
    }

    pub fn winner_ids(&self) -> &[String] {
        &self.outcome.winners
    }
}

/// The draw procedure: filter, deduplicate, sample, record, digest.
#[derive(Debug, Clone)]
pub struct Raffle {
    config: DrawConfig,
    filter: EligibilityFilter,
}

impl Raffle {
    pub fn new(config: DrawConfig) -> Result<Self> {
        config.validate()?;
        let filter = EligibilityFilter::from_config(&config);
        Ok(Self { config, filter })
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    /// Build the eligible set, recording each accepted participant
    pub fn collect_participants(
        &self,
        records: &[ParticipantRecord],
        transcript: &mut Transcript,
    ) -> ParticipantSet {
        let mut participants = ParticipantSet::new();
        for record in records {
            match self.filter.check(record) {
                Eligibility::Accepted => {
                    transcript.record(format!(
                        "Adding participant: {} ({}) who entered at {}",
                        record.name, record.id, record.entered_at
                    ));
                    if let Some(previous) = participants.insert(record.id.clone(), record.name.clone()) {
                        debug!(id = %record.id, previous = %previous, "duplicate id, keeping latest name");
                    }
                }
                Eligibility::Excluded => debug!(id = %record.id, "excluded name"),
                Eligibility::BlankName => debug!(id = %record.id, "blank name"),
                Eligibility::BlankRow => debug!("blank row"),
            }
        }
        participants
    }

    /// Run a complete draw.
    ///
    /// The source is fully loaded before anything is recorded, so a
    /// source error never leaves a partial winner list behind.
    pub fn run<S: ParticipantSource + ?Sized>(
        &self,
        source: &mut S,
        seed: DrawSeed,
    ) -> Result<DrawReport> {
        info!("Using the seed: {}", seed);
        info!(
            "Areas recorded in the digest will be between the {}",
            DIGEST_SEPARATOR
        );

        let records = source.load()?;
        debug!(rows = records.len(), source = %source.describe(), "participant rows loaded");

        info!("About to start the draw");
        let mut transcript = Transcript::new();
        transcript.record(DIGEST_SEPARATOR);

        let participants = self.collect_participants(&records, &mut transcript);
        transcript.record(format!("Participants {}", participants.len()));

        let pool: DrawPool = participants.ids().collect();
        let mut rng = seed.rng();
        let outcome = draw_winners(pool, self.config.winners, &mut rng);

        match outcome.kind {
            DrawKind::Empty => transcript.record("No participants entered the draw"),
            DrawKind::EveryoneWins => transcript.record(format!(
                "There were {} or fewer participants. Everyone who entered will win. Congratulations",
                self.config.winners
            )),
            DrawKind::Sampled => {}
        }

        if !outcome.winners.is_empty() {
            transcript.record("Final winners are:");
            for id in &outcome.winners {
                let name = participants.name_of(id).unwrap_or_default();
                transcript.record(format!("Name: {} ({})", name, id));
            }
            transcript.record("Thanks to everyone who entered");
        }

        transcript.record(DIGEST_SEPARATOR);

        let digest = transcript.digest();
        info!("Final digest of all output (excluding this line): {}", digest);

        Ok(DrawReport {
            seed,
            participants,
            outcome,
            transcript,
            digest,
        })
    }
}
