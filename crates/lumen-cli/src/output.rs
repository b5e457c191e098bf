#![forbid(unsafe_code)]

//! Command execution and rendering.

use lumen_color::{Rgb, decode};
use lumen_contrast::{AdjustOptions, Adjustment, ContrastReport, WcagLevel, adjust, hex};
use serde::Serialize;

use crate::cli::{CliError, Command, Opts, OutputFormat};

#[derive(Debug, Serialize)]
struct RatioOutput {
    a: Rgb,
    b: Rgb,
    #[serde(flatten)]
    report: ContrastReport,
}

#[derive(Debug, Serialize)]
struct CheckOutput {
    foreground: Rgb,
    background: Rgb,
    level: WcagLevel,
    large_text: bool,
    threshold: f64,
    ratio: f64,
    pass: bool,
}

#[derive(Debug, Serialize)]
struct AdjustOutput {
    foreground: Rgb,
    background: Rgb,
    target_ratio: f64,
    #[serde(flatten)]
    adjustment: Adjustment,
}

#[derive(Debug, Serialize)]
struct TextOutput<'a> {
    background: &'a str,
    text: String,
}

/// Rendered output plus whether the command succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// What to print on stdout.
    pub rendered: String,
    /// `false` only when `check` found the pair below threshold.
    pub passed: bool,
}

fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(text()),
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::Usage(format!("Failed to encode JSON: {e}"))),
    }
}

/// Run the command described by `opts`.
pub fn execute(opts: &Opts) -> Result<Outcome, CliError> {
    let mut passed = true;
    let rendered = match &opts.command {
        Command::Ratio { a, b } => {
            let (a, b) = (decode(a)?, decode(b)?);
            let out = RatioOutput {
                a,
                b,
                report: ContrastReport::new(a, b),
            };
            render(opts.output, &out, || {
                let r = &out.report;
                format!(
                    "{:.2}:1\nAA   {} (large: {})\nAAA  {} (large: {})",
                    r.ratio,
                    verdict(r.aa),
                    verdict(r.aa_large),
                    verdict(r.aaa),
                    verdict(r.aaa_large),
                )
            })?
        }
        Command::Check { fg, bg } => {
            let (foreground, background) = (decode(fg)?, decode(bg)?);
            let report = ContrastReport::new(foreground, background);
            let out = CheckOutput {
                foreground,
                background,
                level: opts.level,
                large_text: opts.large_text,
                threshold: opts.level.threshold(opts.large_text),
                ratio: report.ratio,
                pass: report.passes(opts.level, opts.large_text),
            };
            passed = out.pass;
            render(opts.output, &out, || {
                format!(
                    "{}: {:.2}:1 against {} {} text (needs {}:1)",
                    verdict(out.pass),
                    out.ratio,
                    out.level,
                    if out.large_text { "large" } else { "normal" },
                    out.threshold,
                )
            })?
        }
        Command::Adjust { fg, bg } => {
            let (foreground, background) = (decode(fg)?, decode(bg)?);
            let target_ratio = opts.effective_target();
            let adjustment = adjust::adjust_with(
                foreground,
                background,
                &AdjustOptions::new(target_ratio),
            );
            let out = AdjustOutput {
                foreground,
                background,
                target_ratio,
                adjustment,
            };
            render(opts.output, &out, || {
                let a = &out.adjustment;
                let mut line = format!(
                    "{}  {:.2}:1  {} step{} ({})",
                    a.color,
                    a.ratio,
                    a.iterations,
                    if a.iterations == 1 { "" } else { "s" },
                    a.direction,
                );
                if !a.converged {
                    line.push_str(&format!("  best effort, target {target_ratio}:1 not reached"));
                }
                line
            })?
        }
        Command::Text { bg } => {
            let out = TextOutput {
                background: bg,
                text: hex::pick_text_color(bg),
            };
            render(opts.output, &out, || out.text.clone())?
        }
    };

    tracing::debug!(command = ?opts.command, passed, "command finished");
    Ok(Outcome { rendered, passed })
}
