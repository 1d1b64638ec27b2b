use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tri_bsp::{BspData, format_hits};

/// Reports which triangles each segment touches, using a BSP tree.
///
/// Input: `n t l`, then n points, t triangles (1-based point indices) and
/// l segments (two endpoints each), all as whitespace-separated integers.
/// Output: one line per segment with the hit count and the ascending ids.
#[derive(Debug, Parser)]
#[command(name = "tri-bsp", version)]
struct Args {
    /// Read input from FILE instead of standard input
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Dump the parsed input and the tree shape to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let source = read_source(args.input.as_ref())?;
    let data = BspData::parse(&source).context("failed to parse input")?;

    if args.verbose {
        eprint!("{}", data.describe_points());
        eprint!("{}", data.describe_triangles());
        eprint!("{}", data.describe_segments());
    }

    let tree = data.build_tree().context("failed to build BSP tree")?;
    if args.verbose {
        eprint!("{}", tree.describe());
    }

    let results = tree.process_segments(&data.segments);
    log::info!("answered {} segments", results.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for hits in &results {
        writeln!(out, "{}", format_hits(hits))?;
    }
    out.flush()?;

    Ok(())
}

fn read_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read standard input")?;
            Ok(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdin_quietly() {
        let args = Args::try_parse_from(["tri-bsp"]).unwrap();
        assert!(args.input.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn accepts_short_and_long_flags() {
        let args = Args::try_parse_from(["tri-bsp", "-v", "--input", "scene.txt"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.input, Some(PathBuf::from("scene.txt")));

        let args = Args::try_parse_from(["tri-bsp", "--verbose", "-i", "a.txt"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.input, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["tri-bsp", "--balance"]).is_err());
    }

    #[test]
    fn missing_file_is_reported() {
        let path = PathBuf::from("/nonexistent/tri-bsp/input.txt");
        let err = read_source(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
