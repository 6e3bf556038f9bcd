use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use taskbook::{menu, store::TaskStore};

#[derive(Parser)]
#[command(name = "taskbook", about = "Flat-file to-do list manager", version)]
struct Cli {
    /// Path to the task file [default: ~/.taskbook/tasks.txt]
    #[arg(long, env = "TASKBOOK_FILE")]
    file: Option<String>,

    /// Print the task list as JSON and exit (no interactive menu)
    #[arg(long)]
    json: bool,
}

fn default_file_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".taskbook").join("tasks.txt"))
}

fn resolve_file_path(cli_file: Option<String>) -> Result<PathBuf> {
    match cli_file {
        Some(p) => Ok(PathBuf::from(p)),
        None => default_file_path(),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = resolve_file_path(cli.file)?;
    ensure_parent_dir(&path)?;

    let mut store = TaskStore::load(&path)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(store.tasks())?);
        return Ok(());
    }

    let stdin = io::stdin();
    menu::run(&mut store, &mut stdin.lock(), &mut io::stdout())?;
    Ok(())
}
