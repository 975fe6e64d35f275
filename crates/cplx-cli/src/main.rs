mod batch;
mod config;

use std::io;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use cplx_core::{ComplexNumber, Evaluation, Function, MINUS_I, ONE, PLUS_I, TWO, ZERO};

use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(
    name = "cplx",
    version,
    about = "Complex-number arithmetic and transcendental functions"
)]
struct Cli {
    /// Output format (overrides config)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Decimal places in text output (overrides config)
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a function: `cplx eval pow 0 1 2 0` computes i^2
    Eval {
        /// Function name (see `cplx functions`)
        function: String,

        /// Argument components as real/imaginary pairs
        #[arg(required = true, allow_negative_numbers = true)]
        components: Vec<f64>,
    },

    /// Evaluate JSON-lines requests from stdin
    Batch {
        /// Stop after the first failed request
        #[arg(long)]
        fail_fast: bool,
    },

    /// List available functions
    Functions,

    /// Print the predefined constants
    Constants,

    /// Show current configuration
    Config,
}

/// Output settings after applying command-line overrides.
struct Output {
    format: OutputFormat,
    precision: Option<usize>,
}

impl Output {
    fn resolve(cli: &Cli, cfg: &Config) -> Self {
        Self {
            format: cli.format.unwrap_or(cfg.output.format),
            precision: cli.precision.or(cfg.output.precision),
        }
    }

    fn render(&self, value: &Evaluation) -> Result<String> {
        Ok(match (self.format, self.precision) {
            (OutputFormat::Json, _) => serde_json::to_string(value)?,
            (OutputFormat::Text, Some(p)) => format!("{value:.p$}"),
            (OutputFormat::Text, None) => value.to_string(),
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let output = Output::resolve(&cli, &cfg);

    match cli.command {
        Commands::Eval {
            function,
            components,
        } => cmd_eval(&output, &function, &components),
        Commands::Batch { fail_fast } => cmd_batch(fail_fast || cfg.batch.fail_fast),
        Commands::Functions => cmd_functions(),
        Commands::Constants => cmd_constants(&output),
        Commands::Config => cmd_config(&cfg),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_eval(output: &Output, function: &str, components: &[f64]) -> Result<()> {
    let args = pair_components(components)?;
    tracing::debug!("eval {function} with {} args", args.len());
    let value = batch::evaluate(function, &args)?;
    println!("{}", output.render(&value)?);
    Ok(())
}

fn cmd_batch(fail_fast: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = batch::run_batch(stdin.lock(), &mut stdout, fail_fast)?;
    if summary.failed > 0 && fail_fast {
        bail!("batch stopped after a failed request");
    }
    Ok(())
}

fn cmd_functions() -> Result<()> {
    for f in Function::all() {
        println!("  {:<10} arity {}", f.name(), f.arity());
    }
    Ok(())
}

fn cmd_constants(output: &Output) -> Result<()> {
    let constants = [
        ("ZERO", ZERO),
        ("ONE", ONE),
        ("TWO", TWO),
        ("PLUS_I", PLUS_I),
        ("MINUS_I", MINUS_I),
    ];
    for (name, value) in constants {
        println!(
            "  {:<8} {}",
            name,
            output.render(&Evaluation::Complex(value))?
        );
    }
    Ok(())
}

fn cmd_config(cfg: &Config) -> Result<()> {
    println!("Config: {}", config::describe_config_source());
    println!();
    println!("[output]");
    let format = match cfg.output.format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    };
    println!("  format = {format}");
    match cfg.output.precision {
        Some(p) => println!("  precision = {p}"),
        None => println!("  precision = (shortest exact form)"),
    }
    println!();
    println!("[batch]");
    println!("  fail_fast = {}", cfg.batch.fail_fast);
    Ok(())
}

/// Group flat `re im re im ...` components into complex numbers.
fn pair_components(components: &[f64]) -> Result<Vec<ComplexNumber>> {
    if components.len() % 2 != 0 {
        bail!(
            "expected real/imaginary pairs, got {} component(s)",
            components.len()
        );
    }
    Ok(components
        .chunks_exact(2)
        .map(|pair| ComplexNumber::new(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_components() {
        let args = pair_components(&[1.0, 2.0, -3.0, 0.5]).unwrap();
        assert_eq!(
            args,
            vec![ComplexNumber::new(1.0, 2.0), ComplexNumber::new(-3.0, 0.5)]
        );
        assert!(pair_components(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_render() {
        let value = Evaluation::Complex(ComplexNumber::new(1.0, -0.5));
        let text = Output {
            format: OutputFormat::Text,
            precision: None,
        };
        assert_eq!(text.render(&value).unwrap(), "1.0 - 0.5i");

        let fixed = Output {
            format: OutputFormat::Text,
            precision: Some(3),
        };
        assert_eq!(fixed.render(&value).unwrap(), "1.000 - 0.500i");

        let json = Output {
            format: OutputFormat::Json,
            precision: Some(3),
        };
        assert_eq!(
            json.render(&value).unwrap(),
            r#"{"real":1.0,"imaginary":-0.5}"#
        );
    }

    #[test]
    fn test_render_json_infinite() {
        let json = Output {
            format: OutputFormat::Json,
            precision: None,
        };
        let args = [ComplexNumber::new(1e300, 0.0), ComplexNumber::new(1e-10, 0.0)];
        let value = batch::evaluate("divide", &args).unwrap();
        assert_eq!(
            json.render(&value).unwrap(),
            r#"{"real":"inf","imaginary":0.0}"#
        );
        let text = Output {
            format: OutputFormat::Text,
            precision: None,
        };
        assert_eq!(text.render(&value).unwrap(), "inf + 0.0i");
    }

    #[test]
    fn test_cli_parses_negative_components() {
        let cli = Cli::try_parse_from(["cplx", "eval", "add", "1", "-2", "-3", "4"]).unwrap();
        match cli.command {
            Commands::Eval {
                function,
                components,
            } => {
                assert_eq!(function, "add");
                assert_eq!(components, vec![1.0, -2.0, -3.0, 4.0]);
            }
            _ => panic!("expected eval"),
        }
    }

    #[test]
    fn test_cli_global_overrides() {
        let cli = Cli::try_parse_from(["cplx", "--format", "json", "--precision", "2", "functions"])
            .unwrap();
        let output = Output::resolve(&cli, &Config::default());
        assert_eq!(output.format, OutputFormat::Json);
        assert_eq!(output.precision, Some(2));
    }
}
