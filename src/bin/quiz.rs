use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use taskbook::quiz;

#[derive(Parser)]
#[command(name = "quiz", about = "Quiz runner over a CSV question file", version)]
struct Cli {
    /// Question file (CSV rows of question,answer)
    #[arg(default_value = "questions.csv")]
    file: PathBuf,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let records = quiz::load_records(&cli.file)?;

    println!("Welcome to the Quiz Game!");
    let stdin = io::stdin();
    let score = quiz::run(&records, &mut stdin.lock(), &mut io::stdout())?;
    println!("{}", quiz::summary(score, records.len()));
    Ok(())
}
