//! Command-line interface for dirpeek.
//!
//! Two modes: argument-driven (scan the directory given on the command line,
//! exit non-zero if it is missing or invalid) and interactive (prompt for
//! paths in a loop until the user quits).

use clap::Parser;
use dirpeek::{DirpeekBuilder, DirpeekError, dirpeek, output};
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

/// dirpeek — directory snapshot and listing tool
#[derive(Parser)]
#[command(name = "dirpeek", version, about, long_about = None)]
struct Cli {
    /// Root directory to scan (required unless --interactive)
    root: Option<PathBuf>,

    /// Max depth below the root (unlimited if not set); 0 lists only the
    /// root's immediate children
    #[arg(long)]
    max_depth: Option<usize>,

    /// Extra ignore substrings, on top of the defaults (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Sort entries by name within each directory
    #[arg(long)]
    sorted: bool,

    /// Prompt for directories in a loop instead of taking an argument
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.interactive {
        run_interactive(&cli);
        return;
    }

    let Some(root) = cli.root.clone() else {
        eprintln!("Usage: dirpeek <DIRECTORY>");
        exit(1);
    };
    match run_scan(root, &cli) {
        Ok(listing) => print!("{listing}"),
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}

/// Scans one root with the CLI's options and renders it.
fn run_scan(root: PathBuf, cli: &Cli) -> Result<String, DirpeekError> {
    let mut builder = DirpeekBuilder::new(root)
        .extra_ignore_patterns(cli.ignore_patterns.clone())
        .sorted(cli.sorted);
    builder = match cli.max_depth {
        Some(depth) => builder.max_depth(depth),
        None => builder.no_limit_depth(),
    };
    let snapshot = dirpeek(builder.build())?;
    Ok(output::render_to_string(&snapshot))
}

fn run_interactive(cli: &Cli) {
    let stdin = io::stdin();
    loop {
        print!("\nDrag and drop a directory here, or enter the full path: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                farewell();
                break;
            }
            Ok(_) => {}
        }

        // Drag-and-drop input arrives quoted; empty input means quit.
        let raw = strip_quotes(line.trim());
        if raw.is_empty() {
            farewell();
            break;
        }

        let candidate = expand_home(raw);
        let root = match fs::canonicalize(&candidate) {
            Ok(path) if path.is_dir() => path,
            _ => {
                println!(
                    "Error: {} is not a valid directory. Try again.",
                    candidate.display()
                );
                continue;
            }
        };

        println!("\nExploring directory: {}\n", root.display());
        println!("Directory Structure and Contents:");
        println!("{}", "-".repeat(40));
        match run_scan(root, cli) {
            Ok(listing) => print!("{listing}"),
            Err(e) => {
                println!("Error: {e}. Try again.");
                continue;
            }
        }

        print!("\nExplore another directory? (y/n): ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        match stdin.lock().read_line(&mut answer) {
            Ok(n) if n > 0 && answer.trim().eq_ignore_ascii_case("y") => {}
            _ => break,
        }
    }
}

fn farewell() {
    println!("\nExiting directory explorer. Goodbye!");
}

fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '\'' || c == '"')
}

/// Expands a leading `~` or `~/` to the home directory, when known.
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~') {
        if rest.is_empty() || rest.starts_with('/') {
            if let Some(home) = env::var_os("HOME") {
                let mut path = PathBuf::from(home);
                path.push(rest.trim_start_matches('/'));
                return path;
            }
        }
    }
    PathBuf::from(input)
}
