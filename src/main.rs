//! thin-calc - evaluate keypad-style arithmetic from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use thin_calc::keypad::{self, Keypad};
use thin_calc::{CalcConfig, ShuntingParser};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "thin-calc", version, about)]
struct Args {
    /// Expressions to evaluate; read from stdin, one per line, when absent
    exprs: Vec<String>,

    /// Treat each input as button presses and print the final display
    #[arg(long)]
    keys: bool,

    /// Print the postfix form instead of the value
    #[arg(long, conflicts_with = "keys")]
    postfix: bool,

    /// Reject unknown characters and unmatched parentheses
    #[arg(long)]
    strict: bool,

    /// Never read '.' as part of a number
    #[arg(long)]
    integer_only: bool,

    /// TOML file with `decimals` and `strict` settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Args {
    fn calc_config(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => CalcConfig::default(),
        };
        config.strict |= self.strict;
        if self.integer_only {
            config.decimals = false;
        }
        Ok(config)
    }

    fn render(&self, input: &str, config: &CalcConfig) -> String {
        if self.keys {
            let mut pad = Keypad::new(*config);
            pad.type_keys(input);
            return pad.display().to_string();
        }
        if self.postfix {
            return match ShuntingParser::parse_str_with(input, config) {
                Ok(rpn) => rpn.to_string(),
                Err(_) => keypad::ERROR_TEXT.to_string(),
            };
        }
        match thin_calc::evaluate_expression_with(input, config) {
            Ok(value) => keypad::format_result(value),
            Err(_) => keypad::ERROR_TEXT.to_string(),
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let config = args.calc_config()?;
    tracing::debug!(?config, "starting");

    if !args.exprs.is_empty() {
        for expr in &args.exprs {
            println!("{}", args.render(expr, &config));
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        println!("{}", args.render(&line, &config));
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
