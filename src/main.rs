use clap::{Parser, Subcommand};
use raffle_draw::cli::{delimiter_for, run_draw, verify_transcript, DrawOptions};
use raffle_draw::{DrawConfig, RaffleError};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, Level};

/// Version info from build.rs
const VERSION: &str = env!("RAFFLE_VERSION");
const BUILD: &str = env!("RAFFLE_BUILD");
const PROFILE: &str = env!("RAFFLE_PROFILE");
const GIT_HASH: &str = env!("RAFFLE_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "raffle-draw")]
#[command(author, about = "Seeded raffle draw with a tamper-evident transcript digest", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Attendee export (CSV, or TSV by extension)
    input: Option<PathBuf>,

    /// Seed to replay a published draw
    #[arg(allow_negative_numbers = true)]
    seed: Option<i64>,

    /// JSON draw configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of winners
    #[arg(long)]
    winners: Option<usize>,

    /// Name that may not win (repeatable, replaces the default)
    #[arg(long = "exclude")]
    exclude: Vec<String>,

    /// Column holding the display name
    #[arg(long)]
    name_column: Option<usize>,

    /// Column holding the participant id
    #[arg(long)]
    id_column: Option<usize>,

    /// Column holding the entry timestamp
    #[arg(long)]
    entered_at_column: Option<usize>,

    /// The first row is data, not a header
    #[arg(long)]
    no_header: bool,

    /// Field delimiter
    #[arg(long)]
    delimiter: Option<char>,

    /// Write the recorded transcript to this file, for `verify`
    #[arg(long, value_name = "FILE")]
    transcript: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a republished transcript against its digest
    Verify {
        /// Transcript text, one recorded line per line
        transcript: PathBuf,

        /// Base64 digest printed at the end of the draw
        digest: String,
    },
}

impl Cli {
    fn draw_config(&self, input: &Path) -> Result<DrawConfig, RaffleError> {
        let mut config = match &self.config {
            Some(path) => DrawConfig::from_json_file(path)?,
            None => DrawConfig {
                delimiter: delimiter_for(input),
                ..Default::default()
            },
        };

        if let Some(winners) = self.winners {
            config.winners = winners;
        }
        if !self.exclude.is_empty() {
            config.excluded_names = self.exclude.clone();
        }
        if let Some(column) = self.name_column {
            config.name_column = column;
        }
        if let Some(column) = self.id_column {
            config.id_column = column;
        }
        if let Some(column) = self.entered_at_column {
            config.entered_at_column = column;
        }
        if self.no_header {
            config.skip_header = false;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }

        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("raffle-draw {}", get_version());
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    if let Some(Commands::Verify { transcript, digest }) = &cli.command {
        return match verify_transcript(transcript, digest) {
            Ok(verification) => {
                print!("{}", verification);
                if verification.matches() {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let result = match cli.input.as_deref() {
        Some(input) if !input.as_os_str().is_empty() => cli
            .draw_config(input)
            .and_then(|config| {
                let options = DrawOptions {
                    config,
                    seed: cli.seed,
                    transcript: cli.transcript.clone(),
                };
                run_draw(input, &options)
            })
            .map(|_| ()),
        _ => Err(RaffleError::MissingInput),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Something went wrong: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
