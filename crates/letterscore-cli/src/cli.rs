use anyhow::{Context, Result, bail};
use clap::Parser;
use letterscore::grade::{Grader, ScoringPolicy, TargetSymbol};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "letterscore",
    version,
    about = "Score a hand-drawn letter or digit"
)]
pub struct Cli {
    #[arg(
        required_unless_present = "print_policy",
        help = "Drawing to score (PNG, JPEG, BMP, GIF, TIFF, WebP, PNM)"
    )]
    pub image: Option<PathBuf>,
    #[arg(
        short,
        long,
        required_unless_present = "print_policy",
        help = "Symbol the drawing should show"
    )]
    pub letter: Option<String>,
    #[arg(
        short,
        long,
        default_value = "upper",
        help = "Practice mode: upper, lower or number"
    )]
    pub mode: String,
    #[arg(long, help = "Scoring policy JSON; missing fields keep their defaults")]
    pub policy: Option<PathBuf>,
    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,
    #[arg(
        long,
        conflicts_with_all = ["image", "letter"],
        help = "Print the scoring policy as JSON and exit"
    )]
    pub print_policy: bool,
}

fn load_policy(path: Option<&PathBuf>) -> Result<ScoringPolicy> {
    let Some(path) = path else {
        return Ok(ScoringPolicy::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read policy {}", path.display()))?;
    ScoringPolicy::from_json(&json).with_context(|| format!("Invalid policy {}", path.display()))
}

/// Run the command and return what should be printed
pub fn run(cli: &Cli) -> Result<String> {
    let policy = load_policy(cli.policy.as_ref())?;
    if cli.print_policy {
        return Ok(policy.to_json()?);
    }

    let (Some(image), Some(letter)) = (&cli.image, &cli.letter) else {
        bail!("an image and a letter are required");
    };
    let target = TargetSymbol::parse(letter, &cli.mode).context("Invalid target symbol")?;
    let bytes =
        std::fs::read(image).with_context(|| format!("Failed to read {}", image.display()))?;
    debug!(path = %image.display(), len = bytes.len(), "read drawing");

    let grader = Grader::with_policy(policy)?;
    let result = grader
        .score(&bytes, &target)
        .with_context(|| format!("Failed to score {}", image.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}
