#![forbid(unsafe_code)]

//! Command-line argument parsing for `lumen`.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable defaults via the `LUMEN_*` prefix; explicit
//! flags always win.

use std::fmt;

use lumen_color::ColorError;
use lumen_contrast::WcagLevel;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
lumen — WCAG 2.x contrast checks and fixes

USAGE:
    lumen <COMMAND> [OPTIONS] <COLORS>...

COMMANDS:
    ratio  <A> <B>       Contrast ratio and every AA/AAA verdict for a pair
    check  <FG> <BG>     Pass/fail against one level (exit 2 on failure)
    adjust <FG> <BG>     Nudge FG until it reaches the target against BG
    text   <BG>          Black or white text for a background

COLORS:
    #RGB or #RRGGBB, any case, '#' optional

OPTIONS:
    --level=LEVEL        Conformance level: 'aa' (default) or 'aaa'
    --large              Use large-text thresholds
    --target=RATIO       Explicit target ratio for 'adjust' (default: level threshold)
    --json               Emit JSON instead of text
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    LUMEN_LEVEL          Override --level default (aa|aaa)
    LUMEN_LARGE_TEXT     Treat text as large when set to 1/true
    LUMEN_TARGET_RATIO   Override --target default
    LUMEN_OUTPUT         Output format (text|json)
    LUMEN_LOG            Log filter (e.g. 'debug', 'lumen_contrast=trace')
    LUMEN_LOG_FORMAT     Log format on stderr (text|json)";

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// What to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Full report for a pair.
    Ratio { a: String, b: String },
    /// Single-level verdict.
    Check { fg: String, bg: String },
    /// Adjust a foreground.
    Adjust { fg: String, bg: String },
    /// Pick text color.
    Text { bg: String },
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Command and its colors.
    pub command: Command,
    /// Conformance level for `check` and default `adjust` target.
    pub level: WcagLevel,
    /// Large-text thresholds.
    pub large_text: bool,
    /// Explicit adjust target; `None` means the level threshold.
    pub target_ratio: Option<f64>,
    /// Output rendering.
    pub output: OutputFormat,
}

impl Opts {
    /// Ratio the adjuster should reach.
    #[must_use]
    pub fn effective_target(&self) -> f64 {
        self.target_ratio
            .unwrap_or_else(|| self.level.threshold(self.large_text))
    }
}

/// Outcome of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// Run a command.
    Run(Opts),
    /// `--help` was requested.
    Help,
    /// `--version` was requested.
    Version,
}

/// Errors surfaced by the CLI.
#[derive(Debug, Clone, PartialEq)]
pub enum CliError {
    /// Bad arguments or environment values.
    Usage(String),
    /// A color failed to decode.
    Color(ColorError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => f.write_str(msg),
            Self::Color(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(_) => None,
            Self::Color(err) => Some(err),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(err: ColorError) -> Self {
        Self::Color(err)
    }
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn parse_target(val: &str, source: &str) -> Result<f64, CliError> {
    match val.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 1.0 => Ok(n),
        _ => Err(usage(format!(
            "Invalid {source} value: {val} (expected a ratio >= 1)"
        ))),
    }
}

/// Parse the process arguments and environment.
pub fn parse() -> Result<Parsed, CliError> {
    parse_from(std::env::args().skip(1), |key| std::env::var(key).ok())
}

/// Parse `args` (without the program name) with `env` as the variable source.
///
/// Environment variables take precedence over defaults but are overridden by
/// explicit command-line flags.
pub fn parse_from<I, S, E>(args: I, env: E) -> Result<Parsed, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    E: Fn(&str) -> Option<String>,
{
    let mut level = WcagLevel::default();
    let mut large_text = false;
    let mut target_ratio = None;
    let mut output = OutputFormat::default();

    // Apply environment variable defaults first
    if let Some(val) = env("LUMEN_LEVEL") {
        level = val
            .parse()
            .map_err(|()| usage(format!("Invalid LUMEN_LEVEL value: {val}")))?;
    }
    if let Some(val) = env("LUMEN_LARGE_TEXT") {
        large_text = parse_bool(&val)
            .ok_or_else(|| usage(format!("Invalid LUMEN_LARGE_TEXT value: {val}")))?;
    }
    if let Some(val) = env("LUMEN_TARGET_RATIO") {
        target_ratio = Some(parse_target(&val, "LUMEN_TARGET_RATIO")?);
    }
    if let Some(val) = env("LUMEN_OUTPUT") {
        output = val
            .parse()
            .map_err(|()| usage(format!("Invalid LUMEN_OUTPUT value: {val}")))?;
    }

    // Parse command-line args (override env vars)
    let mut positional: Vec<String> = Vec::new();
    for arg in args {
        let arg: String = arg.into();
        match arg.as_str() {
            "--help" | "-h" => return Ok(Parsed::Help),
            "--version" | "-V" => return Ok(Parsed::Version),
            "--large" => large_text = true,
            "--json" => output = OutputFormat::Json,
            other => {
                if let Some(val) = other.strip_prefix("--level=") {
                    level = val
                        .parse()
                        .map_err(|()| usage(format!("Invalid --level value: {val}")))?;
                } else if let Some(val) = other.strip_prefix("--target=") {
                    target_ratio = Some(parse_target(val, "--target")?);
                } else if other.starts_with("--") {
                    return Err(usage(format!("Unknown argument: {other}")));
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    let mut positional = positional.into_iter();
    let Some(name) = positional.next() else {
        return Err(usage("Missing command"));
    };
    let mut color = |what: &str| {
        positional
            .next()
            .ok_or_else(|| usage(format!("'{name}' needs {what}")))
    };
    let command = match name.as_str() {
        "ratio" => Command::Ratio {
            a: color("two colors")?,
            b: color("two colors")?,
        },
        "check" => Command::Check {
            fg: color("a foreground and a background")?,
            bg: color("a foreground and a background")?,
        },
        "adjust" => Command::Adjust {
            fg: color("a foreground and a background")?,
            bg: color("a foreground and a background")?,
        },
        "text" => Command::Text {
            bg: color("a background")?,
        },
        other => return Err(usage(format!("Unknown command: {other}"))),
    };
    if let Some(extra) = positional.next() {
        return Err(usage(format!("Unexpected argument: {extra}")));
    }

    Ok(Parsed::Run(Opts {
        command,
        level,
        large_text,
        target_ratio,
        output,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(args: &[&str]) -> Opts {
        match parse_from(args.iter().copied(), no_env).unwrap() {
            Parsed::Run(opts) => opts,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn ratio_defaults() {
        let opts = run(&["ratio", "#000", "#fff"]);
        assert_eq!(
            opts,
            Opts {
                command: Command::Ratio {
                    a: "#000".into(),
                    b: "#fff".into()
                },
                level: WcagLevel::Aa,
                large_text: false,
                target_ratio: None,
                output: OutputFormat::Text,
            }
        );
        assert_eq!(opts.effective_target(), 4.5);
    }

    #[test]
    fn flags_anywhere() {
        let opts = run(&["--json", "check", "--level=AAA", "#777", "--large", "#fff"]);
        assert_eq!(
            opts.command,
            Command::Check {
                fg: "#777".into(),
                bg: "#fff".into()
            }
        );
        assert_eq!(opts.level, WcagLevel::Aaa);
        assert!(opts.large_text);
        assert_eq!(opts.output, OutputFormat::Json);
        assert_eq!(opts.effective_target(), 4.5);
    }

    #[test]
    fn explicit_target_wins_over_level() {
        let opts = run(&["adjust", "--level=aaa", "--target=5.5", "#444", "#121212"]);
        assert_eq!(opts.effective_target(), 5.5);
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_from(["-h"], no_env).unwrap(), Parsed::Help);
        assert_eq!(parse_from(["text", "--version"], no_env).unwrap(), Parsed::Version);
    }

    #[test]
    fn usage_errors() {
        for args in [
            vec![],
            vec!["ratio", "#000"],
            vec!["paint", "#000"],
            vec!["text", "#000", "#fff"],
            vec!["check", "#000", "#fff", "--level=a"],
            vec!["adjust", "#000", "#fff", "--target=0.5"],
            vec!["adjust", "#000", "#fff", "--target=nan"],
            vec!["text", "#000", "--verbose"],
        ] {
            let err = parse_from(args.clone(), no_env).unwrap_err();
            assert!(matches!(err, CliError::Usage(_)), "{args:?} gave {err:?}");
        }
    }

    #[test]
    fn env_defaults_overridden_by_flags() {
        let env: HashMap<&str, &str> = [
            ("LUMEN_LEVEL", "aaa"),
            ("LUMEN_LARGE_TEXT", "true"),
            ("LUMEN_TARGET_RATIO", "6"),
            ("LUMEN_OUTPUT", "json"),
        ]
        .into_iter()
        .collect();
        let lookup = |key: &str| env.get(key).map(|v| (*v).to_string());

        let Parsed::Run(opts) = parse_from(["adjust", "#444", "#000"], lookup).unwrap() else {
            panic!("expected Run");
        };
        assert_eq!(opts.level, WcagLevel::Aaa);
        assert!(opts.large_text);
        assert_eq!(opts.target_ratio, Some(6.0));
        assert_eq!(opts.output, OutputFormat::Json);

        let Parsed::Run(opts) =
            parse_from(["adjust", "--level=aa", "--target=3", "#444", "#000"], lookup).unwrap()
        else {
            panic!("expected Run");
        };
        assert_eq!(opts.level, WcagLevel::Aa);
        assert_eq!(opts.effective_target(), 3.0);
    }

    #[test]
    fn invalid_env_is_reported() {
        let lookup = |key: &str| (key == "LUMEN_LARGE_TEXT").then(|| "maybe".to_string());
        let err = parse_from(["text", "#000"], lookup).unwrap_err();
        assert_eq!(err, CliError::Usage("Invalid LUMEN_LARGE_TEXT value: maybe".into()));
    }

    #[test]
    fn color_errors_convert() {
        let err = lumen_color::decode("#12").unwrap_err();
        let cli: CliError = err.clone().into();
        assert_eq!(cli.to_string(), err.to_string());
        assert!(std::error::Error::source(&cli).is_some());
    }

    #[test]
    fn help_text_lists_commands_and_env() {
        for needle in ["ratio", "check", "adjust", "text", "LUMEN_LEVEL", "LUMEN_LOG"] {
            assert!(HELP_TEXT.contains(needle), "missing {needle}");
        }
        assert!(!VERSION.is_empty());
    }
}
