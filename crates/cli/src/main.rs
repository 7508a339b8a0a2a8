mod report_formatter;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};

use pronunciation_core::phrases::domain::phrase::{Difficulty, PhraseFilter};
use pronunciation_core::phrases::infrastructure::json_phrase_store::JsonPhraseStore;
use pronunciation_core::pipeline::score_pronunciation_use_case::ScorePronunciationUseCase;
use pronunciation_core::scoring::domain::tip_generator::{PhoneticHints, TipGenerator};
use pronunciation_core::scoring::infrastructure::json_hint_loader::load_hints;

use report_formatter::{format_phrases, format_report};
use settings::Settings;

/// Pronunciation scoring against reference phrases.
#[derive(Parser)]
#[command(name = "pronounce")]
struct Cli {
    /// Phrase catalog JSON file (defaults to the built-in catalog).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print machine-readable JSON instead of a text report.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a transcript against a reference phrase.
    Score(ScoreArgs),
    /// List reference phrases.
    Phrases(PhrasesArgs),
}

#[derive(Args)]
struct ScoreArgs {
    /// Identifier of a phrase in the catalog.
    #[arg(long)]
    phrase_id: Option<String>,

    /// Free-form reference text (instead of --phrase-id).
    #[arg(long)]
    expected: Option<String>,

    /// Transcript of what was spoken.
    #[arg(long)]
    spoken: Option<String>,

    /// File containing the transcript (instead of --spoken).
    #[arg(long)]
    transcript_file: Option<PathBuf>,

    /// JSON object of word -> phonetic hint, merged over the built-in hints.
    #[arg(long)]
    hints: Option<PathBuf>,
}

#[derive(Args)]
struct PhrasesArgs {
    /// Difficulty tier: beginner, intermediate or advanced.
    #[arg(long)]
    difficulty: Option<String>,

    /// Situation, e.g. restaurant or travel.
    #[arg(long)]
    environment: Option<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load();
    let json = cli.json || settings.json_output;
    let phrases_path = cli.catalog.or(settings.phrases_path.clone());

    match cli.command {
        Command::Score(args) => {
            validate_score(&args)?;
            let hints_path = args.hints.clone().or(settings.hints_path);
            run_score(&args, phrases_path.as_deref(), hints_path.as_deref(), json)
        }
        Command::Phrases(args) => {
            let filter = build_filter(&args)?;
            run_phrases(&filter, phrases_path.as_deref(), json)
        }
    }
}

fn run_score(
    args: &ScoreArgs,
    phrases_path: Option<&Path>,
    hints_path: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let hints = match hints_path {
        Some(path) => load_hints(path)?,
        None => PhoneticHints::builtin(),
    };
    let use_case = ScorePronunciationUseCase::new(
        Box::new(open_store(phrases_path)?),
        None,
        TipGenerator::new(hints),
    );

    let spoken = read_spoken(args)?;
    let report = match (&args.phrase_id, &args.expected) {
        (Some(id), _) => use_case.score_phrase(id, &spoken)?,
        (None, Some(expected)) => use_case.score_text(expected, &spoken)?,
        (None, None) => {
            return Err("A reference is required: pass --phrase-id or --expected".into())
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

fn run_phrases(
    filter: &PhraseFilter,
    phrases_path: Option<&Path>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let use_case = ScorePronunciationUseCase::new(
        Box::new(open_store(phrases_path)?),
        None,
        TipGenerator::default(),
    );
    let phrases = use_case.select_phrases(filter)?;
    log::info!("{} phrases match", phrases.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&phrases)?);
    } else {
        print!("{}", format_phrases(&phrases));
    }
    Ok(())
}

fn open_store(path: Option<&Path>) -> Result<JsonPhraseStore, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(JsonPhraseStore::open(path)?),
        None => Ok(JsonPhraseStore::builtin()?),
    }
}

fn read_spoken(args: &ScoreArgs) -> Result<String, Box<dyn std::error::Error>> {
    match (&args.spoken, &args.transcript_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
            format!("Failed to read transcript {}: {e}", path.display()).into()
        }),
        (None, None) => Err("Spoken text is required: pass --spoken or --transcript-file".into()),
    }
}

fn validate_score(args: &ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    match (&args.phrase_id, &args.expected) {
        (Some(_), Some(_)) => {
            return Err("--phrase-id and --expected are mutually exclusive".into());
        }
        (None, None) => {
            return Err("A reference is required: pass --phrase-id or --expected".into());
        }
        _ => {}
    }
    match (&args.spoken, &args.transcript_file) {
        (Some(_), Some(_)) => {
            return Err("--spoken and --transcript-file are mutually exclusive".into());
        }
        (None, None) => {
            return Err("Spoken text is required: pass --spoken or --transcript-file".into());
        }
        _ => {}
    }
    if let Some(path) = &args.transcript_file {
        if !path.exists() {
            return Err(format!("Transcript file not found: {}", path.display()).into());
        }
    }
    if let Some(path) = &args.hints {
        if !path.exists() {
            return Err(format!("Hint file not found: {}", path.display()).into());
        }
    }
    Ok(())
}

fn build_filter(args: &PhrasesArgs) -> Result<PhraseFilter, Box<dyn std::error::Error>> {
    let difficulty = match &args.difficulty {
        Some(value) => Some(value.parse::<Difficulty>()?),
        None => None,
    };
    Ok(PhraseFilter {
        difficulty,
        environment: args.environment.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_args() -> ScoreArgs {
        ScoreArgs {
            phrase_id: Some("greet-001".to_string()),
            expected: None,
            spoken: Some("hello".to_string()),
            transcript_file: None,
            hints: None,
        }
    }

    #[test]
    fn test_validate_accepts_phrase_and_spoken() {
        assert!(validate_score(&score_args()).is_ok());
    }

    #[test]
    fn test_validate_rejects_both_references() {
        let mut args = score_args();
        args.expected = Some("Hello".to_string());
        let err = validate_score(&args).unwrap_err().to_string();
        assert!(err.contains("mutually exclusive"));
    }

    #[test]
    fn test_validate_requires_reference() {
        let mut args = score_args();
        args.phrase_id = None;
        assert!(validate_score(&args).is_err());
    }

    #[test]
    fn test_validate_requires_spoken_text() {
        let mut args = score_args();
        args.spoken = None;
        let err = validate_score(&args).unwrap_err().to_string();
        assert!(err.contains("--transcript-file"));
    }

    #[test]
    fn test_validate_rejects_missing_transcript_file() {
        let mut args = score_args();
        args.spoken = None;
        args.transcript_file = Some(PathBuf::from("/nonexistent/transcript.txt"));
        let err = validate_score(&args).unwrap_err().to_string();
        assert!(err.contains("not found"));
    }

    #[test]
    fn test_read_spoken_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");
        fs::write(&path, "halo how r u\n").unwrap();
        let mut args = score_args();
        args.spoken = None;
        args.transcript_file = Some(path);
        assert_eq!(read_spoken(&args).unwrap(), "halo how r u\n");
    }

    #[test]
    fn test_build_filter_parses_difficulty() {
        let args = PhrasesArgs {
            difficulty: Some("Advanced".to_string()),
            environment: Some("work".to_string()),
        };
        let filter = build_filter(&args).unwrap();
        assert_eq!(filter.difficulty, Some(Difficulty::Advanced));
        assert_eq!(filter.environment.as_deref(), Some("work"));
    }

    #[test]
    fn test_build_filter_rejects_unknown_difficulty() {
        let args = PhrasesArgs {
            difficulty: Some("expert".to_string()),
            environment: None,
        };
        assert!(build_filter(&args).is_err());
    }

    #[test]
    fn test_cli_parses_score_subcommand() {
        let cli = Cli::try_parse_from([
            "pronounce",
            "score",
            "--expected",
            "I am here",
            "--spoken",
            "I am",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Score(args) => {
                assert_eq!(args.expected.as_deref(), Some("I am here"));
                assert_eq!(args.spoken.as_deref(), Some("I am"));
            }
            Command::Phrases(_) => panic!("expected score subcommand"),
        }
    }
}
