use clap::{Parser, Subcommand};
use ixe_style::Classes;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ixe")]
#[command(about = "IXE style compiler: JSON style objects to CSS")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON style file to CSS
    Build {
        /// Input .json file mapping class names to style objects
        path: String,

        /// Output file (defaults to <stem>.css next to the input)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Check a JSON style file for errors without writing output
    Check {
        /// Input .json file
        path: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path, out } => cmd_build(&path, out),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn load(path: &str) -> Classes {
    let source = read_source(path);
    match Classes::from_json(&source) {
        Ok(classes) => classes,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn default_output(path: &str) -> PathBuf {
    let p = Path::new(path);
    let stem = p
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("style");
    let dir = p.parent().unwrap_or(Path::new("."));
    dir.join(format!("{stem}.css"))
}

fn cmd_build(path: &str, out: Option<PathBuf>) {
    let classes = load(path);
    let css = ixe_css::compile(&classes);
    log::debug!("compiled {} classes from {path}", classes.len());

    let out_path = out.unwrap_or_else(|| default_output(path));
    let mut contents = css;
    if !contents.is_empty() {
        contents.push('\n');
    }

    if let Err(e) = std::fs::write(&out_path, &contents) {
        eprintln!("Error writing {}: {e}", out_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", out_path.display());
}

fn cmd_check(path: &str) {
    let classes = load(path);
    let rules = ixe_css::lower(&classes);
    eprintln!("OK: {path} ({} classes, {} rules)", classes.len(), rules.len());
}
