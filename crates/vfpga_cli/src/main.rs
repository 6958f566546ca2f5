//! vfpga CLI — the command-line interface for the virtual FPGA CAD back-end.
//!
//! Provides `vfpga run` to drive the full parse → pack → place → route → time
//! flow over a netlist and fabric configuration, for interactive and scripted use.

#![warn(missing_docs)]

mod pipeline;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use vfpga_diagnostics::{DiagnosticSink, Severity};

/// vfpga — a virtual FPGA CAD back-end.
#[derive(Parser, Debug)]
#[command(name = "vfpga", version, about = "Virtual FPGA CAD back-end")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `vfpga.toml` configuration file or its containing directory.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full place-route-time flow over a netlist.
    Run(RunArgs),
}

/// Arguments for the `vfpga run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to a Yosys-style JSON netlist.
    pub netlist: String,

    /// Output format for the timing report.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Timing report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Machine-readable JSON output.
    Json,
    /// Human-readable terminal output.
    Text,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => atty_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Run(ref args) => run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Runs `vfpga run`: loads the project config, drives the flow, and reports.
fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_root = pipeline::resolve_project_root(global)?;
    let config = vfpga_config::load_config(&project_root)?;

    let sink = DiagnosticSink::new();
    let netlist_path = PathBuf::from(&args.netlist);

    let outcome = pipeline::run_flow(&netlist_path, &config, &sink);

    if !global.quiet {
        pipeline::render_diagnostics(&sink);
    }

    let result = outcome?;

    match args.format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        ReportFormat::Text => {
            println!("fmax: {:.2} MHz", result.fmax_mhz);
            println!("critical path delay: {:.3} ns", result.critical_path_delay_ns);
            println!("critical path: {} tiles", result.critical_path_nodes.len());
        }
    }

    let had_errors = sink.diagnostics().iter().any(|d| d.severity == Severity::Error);
    Ok(if had_errors { 1 } else { 0 })
}

/// Rough terminal detection — checks if the `TERM` env var is set.
fn atty_is_terminal() -> bool {
    std::env::var("TERM").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_run_default() {
        let cli = Cli::parse_from(["vfpga", "run", "design.json"]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.netlist, "design.json");
                assert_eq!(args.format, ReportFormat::Json);
            }
        }
    }

    #[test]
    fn parse_run_with_format() {
        let cli = Cli::parse_from(["vfpga", "run", "design.json", "--format", "text"]);
        match cli.command {
            Command::Run(ref args) => {
                assert_eq!(args.format, ReportFormat::Text);
            }
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["vfpga", "--quiet", "--color", "never", "run", "d.json"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["vfpga", "--verbose", "run", "d.json"]);
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["vfpga", "--config", "/path/to/vfpga.toml", "run", "d.json"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/vfpga.toml"));
    }
}
