use std::fmt;
use std::path::PathBuf;

use storage::repository::{Storage, StorageError};
use study_core::model::{Card, SubjectKey};

#[derive(Debug, Clone)]
struct Args {
    data_dir: PathBuf,
    subject: String,
    cards: u32,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCards { raw: String },
    InvalidDataDir { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCards { raw } => write!(f, "invalid --cards value: {raw}"),
            ArgsError::InvalidDataDir { raw } => write!(f, "invalid --data-dir value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut data_dir =
            PathBuf::from(std::env::var("STUDY_DATA_DIR").unwrap_or_else(|_| "data".into()));
        let mut subject =
            std::env::var("STUDY_SEED_SUBJECT").unwrap_or_else(|_| "German basics".into());
        let mut cards = std::env::var("STUDY_SEED_CARDS")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(5);

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    let value = require_value(&mut args, "--data-dir")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDataDir { raw: value });
                    }
                    data_dir = PathBuf::from(value);
                }
                "--subject" => {
                    subject = require_value(&mut args, "--subject")?;
                }
                "--cards" => {
                    let value = require_value(&mut args, "--cards")?;
                    cards = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidCards { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data_dir,
            subject,
            cards,
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data-dir <path>         Directory holding subject files (default: data)");
    eprintln!("  --subject <name>          Subject to create or extend (default: German basics)");
    eprintln!("  --cards <n>               Number of sample cards to append (default: 5)");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  STUDY_DATA_DIR, STUDY_SEED_SUBJECT, STUDY_SEED_CARDS");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let storage = Storage::json(&args.data_dir);
    let key = SubjectKey::from_display_name(&args.subject)?;

    match storage.subjects.create_subject(&key).await {
        Ok(()) | Err(StorageError::AlreadyExists(_)) => {}
        Err(err) => return Err(err.into()),
    }

    let samples = [
        ("Hallo", "Hello"),
        ("Danke", "Thank you"),
        ("Bitte", "Please / You are welcome"),
        ("Tschüss", "Bye"),
        ("Guten Morgen", "Good morning"),
    ];
    for i in 0..args.cards {
        let idx = (i as usize) % samples.len();
        let (prompt, answer) = samples[idx];
        let round = i as usize / samples.len();
        let card = if round == 0 {
            Card::new(prompt, answer)
        } else {
            Card::new(format!("{prompt} ({})", round + 1), answer)
        };
        storage.subjects.append_card(&key, &card).await?;
    }

    println!(
        "Seeded subject {} with {} cards into {}",
        key.display_name(),
        args.cards,
        args.data_dir.display()
    );

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
