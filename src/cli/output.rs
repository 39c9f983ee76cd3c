//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::arabic::{Analysis, Candidate};
use crate::cli::args::{OutputFormat, StemmerArgs};
use crate::error::Result;

/// Stem of one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct StemResult {
    pub word: String,
    pub stem: String,
}

/// Root of one word.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResult {
    pub word: String,
    pub root: String,
}

/// Every segmentation of one word.
#[derive(Debug, Serialize)]
pub struct SegmentationResult {
    pub word: String,
    pub candidates: Vec<Candidate>,
}

/// Terminal rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for Vec<StemResult> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for result in self {
            writeln!(out, "{}\t{}", result.word, result.stem)?;
        }
        Ok(())
    }
}

impl HumanOutput for Vec<RootResult> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for result in self {
            writeln!(out, "{}\t{}", result.word, format_root(&result.root))?;
        }
        Ok(())
    }
}

impl HumanOutput for Vec<SegmentationResult> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, result) in self.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", result.word)?;
            for candidate in &result.candidates {
                writeln!(
                    out,
                    "  ({}, {})\t{}\t{}\t{}",
                    candidate.left,
                    candidate.right,
                    format_segments(&candidate.prefix, &candidate.stem, &candidate.suffix),
                    candidate.starstem,
                    format_root(&candidate.root)
                )?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for Vec<Analysis> {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, analysis) in self.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            writeln!(out, "Word: {}", analysis.word)?;
            writeln!(out, "═══════════════")?;
            if analysis.stopword {
                writeln!(out, "Stopword: yes")?;
            } else {
                writeln!(out, "Normalized: {}", analysis.normalized)?;
                writeln!(
                    out,
                    "Window: {} ({}, {})",
                    analysis.window.starword, analysis.window.left, analysis.window.right
                )?;
                writeln!(
                    out,
                    "Segments: {} ({} accepted)",
                    analysis.segments.len(),
                    analysis.accepted.len()
                )?;
                if let Some(class) = analysis.class {
                    writeln!(out, "Class: {class}")?;
                }
                writeln!(
                    out,
                    "Affixes: {}",
                    format_segments(&analysis.prefix, &analysis.stem, &analysis.suffix)
                )?;
                writeln!(out, "Pattern: {}", analysis.starstem)?;
            }
            writeln!(out, "Stem: {}", analysis.stem)?;
            writeln!(out, "Root: {}", format_root(&analysis.root))?;
        }
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &StemmerArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_result(result, args.output_format, args.pretty, &mut out)
}

/// Write a result to any writer.
pub fn write_result<T: Serialize + HumanOutput>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Human => result.write_human(out)?,
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render a `prefix-stem-suffix` split, leaving out empty affixes.
fn format_segments(prefix: &str, stem: &str, suffix: &str) -> String {
    let mut parts = Vec::with_capacity(3);
    if !prefix.is_empty() {
        parts.push(format!("{prefix}-"));
    }
    parts.push(stem.to_string());
    if !suffix.is_empty() {
        parts.push(format!("-{suffix}"));
    }
    parts.concat()
}

fn format_root(root: &str) -> &str {
    if root.is_empty() { "-" } else { root }
}
