use raffle_draw::cli::{run_draw, DrawOptions};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::tempdir;

fn raffle_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_raffle-draw"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(raffle_command().args(args).output()?)
}

fn write_attendees(dir: &Path, rows: usize) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join("attendees.csv");
    let mut text = String::from("Name,User ID,Title,Event Host,RSVP,Guests,RSVPed on\n");
    text.push_str("Andrew Crawford,1,,Yes,Yes,0,2024-07-01 08:00\n");
    for i in 0..rows {
        text.push_str(&format!("Attendee {},{},,No,Yes,0,2024-07-02 09:{:02}\n", i, 2000 + i, i % 60));
    }
    fs::write(&path, text)?;
    Ok(path)
}

fn digest_line(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .find(|line| line.contains("Final digest of all output"))
        .and_then(|line| line.rsplit(' ').next())
        .map(|digest| digest.trim().to_string())
}

#[test]
fn version_flag_prints_build_information() -> Result<(), Box<dyn Error>> {
    let output = run(&["--version"])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("raffle-draw "), "unexpected version line: {}", stdout);
    assert!(stdout.contains("build"));
    Ok(())
}

#[test]
fn missing_input_is_fatal() -> Result<(), Box<dyn Error>> {
    let output = run(&[])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No file name passed"));

    let empty = run(&[""])?;
    assert!(!empty.status.success());
    Ok(())
}

#[test]
fn unreadable_input_is_fatal_and_announces_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("missing.csv");
    let output = run(&[missing.to_str().unwrap(), "42"])?;
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Final winners"));
    assert!(!stdout.contains("Final digest"));
    Ok(())
}

#[test]
fn non_numeric_seed_is_usage_error() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = write_attendees(dir.path(), 3)?;
    let output = run(&[input.to_str().unwrap(), "lucky"])?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn seeded_draw_is_reproducible_and_matches_library() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = write_attendees(dir.path(), 30)?;

    let first = run(&[input.to_str().unwrap(), "42"])?;
    let second = run(&[input.to_str().unwrap(), "42"])?;
    assert!(
        first.status.success(),
        "draw failed: {}",
        String::from_utf8_lossy(&first.stderr)
    );

    let first_stdout = String::from_utf8(first.stdout)?;
    let second_stdout = String::from_utf8(second.stdout)?;
    assert!(first_stdout.contains("Using the seed: 42"));
    assert!(first_stdout.contains("Final winners are:"));
    assert!(!first_stdout.contains("Andrew Crawford"));

    let digest = digest_line(&first_stdout).expect("digest line");
    assert_eq!(Some(digest.clone()), digest_line(&second_stdout));

    let options = DrawOptions {
        seed: Some(42),
        ..Default::default()
    };
    let report = run_draw(&input, &options)?;
    assert_eq!(report.digest.to_string(), digest);
    Ok(())
}

#[test]
fn negative_seed_is_accepted() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = write_attendees(dir.path(), 20)?;
    let output = run(&[input.to_str().unwrap(), "-9"])?;
    assert!(
        output.status.success(),
        "draw failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8(output.stdout)?.contains("Using the seed: -9"));
    Ok(())
}

#[test]
fn winners_and_exclusion_flags_apply() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = write_attendees(dir.path(), 10)?;
    let output = run(&[
        input.to_str().unwrap(),
        "7",
        "--winners",
        "2",
        "--exclude",
        "attendee 0",
    ])?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.matches("Name: ").count(), 2);
    assert!(!stdout.contains("Adding participant: Attendee 0 "));
    // The default exclusion was replaced, so the organizer is back in the pool
    assert!(stdout.contains("Adding participant: Andrew Crawford (1)"));
    Ok(())
}

#[test]
fn verify_subcommand_checks_transcript() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = write_attendees(dir.path(), 15)?;
    let transcript = dir.path().join("transcript.txt");

    let options = DrawOptions {
        seed: Some(3),
        ..Default::default()
    };
    let report = run_draw(&input, &options)?;
    fs::write(&transcript, report.transcript.as_str())?;
    let digest = report.digest.to_string();

    let ok = run(&["verify", transcript.to_str().unwrap(), &digest])?;
    assert!(ok.status.success());
    assert!(String::from_utf8(ok.stdout)?.contains("Digest matches"));

    fs::write(
        &transcript,
        report.transcript.as_str().replacen("Attendee", "Someone Else", 1),
    )?;
    let tampered = run(&["verify", transcript.to_str().unwrap(), &digest])?;
    assert!(!tampered.status.success());
    assert!(String::from_utf8(tampered.stdout)?.contains("MISMATCH"));
    Ok(())
}

#[test]
fn draw_transcript_file_verifies_with_printed_digest() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = write_attendees(dir.path(), 25)?;
    let transcript = dir.path().join("published.txt");

    let draw = run(&[
        input.to_str().unwrap(),
        "42",
        "--transcript",
        transcript.to_str().unwrap(),
    ])?;
    assert!(
        draw.status.success(),
        "draw failed: {}",
        String::from_utf8_lossy(&draw.stderr)
    );
    let digest = digest_line(&String::from_utf8(draw.stdout)?).expect("digest line");

    let ok = run(&["verify", transcript.to_str().unwrap(), &digest])?;
    assert!(
        ok.status.success(),
        "verify failed: {}",
        String::from_utf8_lossy(&ok.stdout)
    );
    assert!(String::from_utf8(ok.stdout)?.contains("Digest matches"));

    // Dropping the last terminator is an edit too
    let published = fs::read_to_string(&transcript)?;
    fs::write(&transcript, published.trim_end_matches('\n'))?;
    let trimmed = run(&["verify", transcript.to_str().unwrap(), &digest])?;
    assert!(!trimmed.status.success());
    Ok(())
}
