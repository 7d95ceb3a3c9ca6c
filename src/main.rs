//! nlogodoc — generate reference documentation from `;;;` doc comments in
//! NetLogo models.
//!
//! Two modes:
//!
//! - **stdin mode**: `nlogodoc < model.nls` renders markdown to stdout
//! - **file mode**: `nlogodoc -o docs models/*.nlogo` writes one
//!   `<module>-docs/` directory per input file

mod error;
mod model;
mod parser;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use parser::SourceFormat;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "nlogodoc",
    about = "Generate documentation from ;;; doc comments in NetLogo models"
)]
struct Cli {
    /// Input files (glob patterns supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Additionally write one document per procedure
    #[arg(long)]
    per_procedure: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read bare code text, write the rendered module to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let outcome = parser::parse(&input, SourceFormat::Bare)?;
    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }

    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render("model", &outcome.module));
    Ok(())
}

/// file mode: process each input file into its own `<module>-docs/` directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let input_files = expand_globs(&cli.files)?;

    for path in &input_files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let outcome = match parser::parse(&content, source_format(path)) {
            Ok(outcome) => outcome,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        for warning in &outcome.warnings {
            eprintln!("warning: {}: {}", path.display(), warning);
        }

        let name = module_name(path);
        let module_dir = output_dir.join(format!("{}-docs", name));
        fs::create_dir_all(&module_dir).with_context(|| {
            format!("failed to create output directory: {}", module_dir.display())
        })?;

        let index_path = module_dir.join(format!("index.{}", ext));
        fs::write(&index_path, renderer.render(&name, &outcome.module))
            .with_context(|| format!("failed to write {}", index_path.display()))?;

        if cli.per_procedure {
            for procedure in &outcome.module.procedures {
                let out_path = module_dir.join(format!("{}.{}", procedure.declaration.name, ext));
                fs::write(&out_path, renderer.render_procedure(&name, procedure))
                    .with_context(|| format!("failed to write {}", out_path.display()))?;
            }
        }
    }

    Ok(())
}

/// `.nlogo` files carry the full multi-section save format; anything else
/// is treated as bare code text.
fn source_format(path: &Path) -> SourceFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("nlogo") => SourceFormat::Nlogo,
        _ => SourceFormat::Bare,
    }
}

/// Module name from the source file stem: "models/wolf-sheep.nlogo" → "wolf-sheep".
fn module_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model")
        .to_string()
}

/// File extensions recognized as NetLogo source.
const SUPPORTED_EXTENSIONS: &[&str] = &["nlogo", "nls"];

/// Expand glob patterns into a list of real file paths. Bare directory
/// paths are scanned (non-recursive) for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}
