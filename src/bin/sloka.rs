//! Command-line harness: load a verse file, validate it, and emit the
//! teaching plan for the player.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sloka", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a verse file.
    Check(VerseArgs),
    /// Print the parsed verse in its authoring form.
    Show(VerseArgs),
    /// Compile a verse into a teaching plan (JSON).
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct VerseArgs {
    /// Input verse file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input verse file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output plan JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Uniform text scale.
    #[arg(long, default_value_t = 2.0)]
    scale: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Show(args) => cmd_show(args),
        Command::Plan(args) => cmd_plan(args),
    }
}

fn load_verse(path: &PathBuf) -> anyhow::Result<sloka::Sloka> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("read verse file '{}'", path.display()))?;
    let verse = sloka::parse(&source)
        .with_context(|| format!("parse verse file '{}'", path.display()))?;
    Ok(verse)
}

fn cmd_check(args: VerseArgs) -> anyhow::Result<()> {
    let verse = load_verse(&args.in_path)?;
    eprintln!(
        "ok: {} line(s), citation \"{}\"",
        verse.sanskrit().len(),
        verse.citation().node().text()
    );
    Ok(())
}

fn cmd_show(args: VerseArgs) -> anyhow::Result<()> {
    let verse = load_verse(&args.in_path)?;
    println!("{verse}");
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let verse = load_verse(&args.in_path)?;
    let options = sloka::TeachOptions {
        scale: args.scale,
        ..sloka::TeachOptions::default()
    };
    let plan = sloka::teach(&verse, &options)?;

    let json = serde_json::to_string_pretty(&plan).context("serialize teaching plan")?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write plan '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
