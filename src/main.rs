// soapdump - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (exit code 1 on any usage error)
// 2. Auxiliary output (completions, man page) that exits before reading input
// 3. Config loading and logging initialisation
// 4. Running the pipeline against the log file

use clap::{CommandFactory, FromArgMatches, Parser};
use soapdump::app::pipeline::{self, PipelineOptions, ReportMode};
use soapdump::app::scripts::{self, Shell};
use soapdump::core::model::column_names;
use soapdump::core::report::OutputFormat;
use soapdump::platform::config::{self, AppConfig};
use soapdump::util::{self, error::SoapDumpError};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// PayPal SOAP Log Parser.
///
/// Extracts request/response payload pairs from PayPal SOAP transaction logs
/// and prints one pipe-delimited record per transaction.
#[derive(Parser, Debug)]
#[command(name = "soapdump", version, about)]
struct Cli {
    /// Log file to parse.
    logfile: Option<PathBuf>,

    /// Show summary statistics only.
    #[arg(short = 's', long = "summary", overrides_with = "raw")]
    summary: bool,

    /// Output raw structured data (default).
    #[arg(short = 'r', long = "raw", overrides_with = "summary")]
    raw: bool,

    /// Record format for non-summary output.
    #[arg(short = 'f', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Read settings from a TOML config file.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,

    /// Generate Bash completion script.
    #[arg(long)]
    generate_bash_completion: bool,

    /// Generate Zsh completion script.
    #[arg(long)]
    generate_zsh_completion: bool,

    /// Generate Fish completion script.
    #[arg(long)]
    generate_fish_completion: bool,

    /// Generate man page.
    #[arg(long)]
    man: bool,
}

impl Cli {
    /// Auxiliary text requested on the command line, if any.
    fn auxiliary_output(&self) -> Option<String> {
        if self.generate_bash_completion {
            Some(scripts::completion_script(Shell::Bash).to_string())
        } else if self.generate_zsh_completion {
            Some(scripts::completion_script(Shell::Zsh).to_string())
        } else if self.generate_fish_completion {
            Some(scripts::completion_script(Shell::Fish).to_string())
        } else if self.man {
            Some(scripts::man_page())
        } else {
            None
        }
    }
}

/// Record format: `--format`, then `--raw`, then the config file.
fn record_format(cli: &Cli, app_config: &AppConfig) -> OutputFormat {
    match (cli.format, cli.raw) {
        (Some(format), _) => format,
        (None, true) => OutputFormat::Raw,
        (None, false) => app_config.format.unwrap_or_default(),
    }
}

/// The clap command with the field reference appended to `--help`.
fn command() -> clap::Command {
    let header = column_names().collect::<Vec<_>>().join("|");
    Cli::command().after_help(format!(
        "OUTPUT FORMAT:\n    {header}\n\nFIELD DESCRIPTIONS:\n{}\n\
         For detailed information and examples, run:\n    man soapdump",
        scripts::field_descriptions()
    ))
}

fn main() -> ExitCode {
    let cli = match command()
        .try_get_matches()
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                // --help and --version
                ExitCode::SUCCESS
            };
        }
    };

    if let Some(text) = cli.auxiliary_output() {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    let (app_config, config_warnings) = match &cli.config {
        Some(path) => config::load_config(path),
        None => (AppConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config problem; using default");
    }

    let Some(logfile) = cli.logfile.as_ref() else {
        eprintln!("Error: No logfile specified\n");
        eprintln!("{}", command().render_help());
        return ExitCode::FAILURE;
    };

    let mode = if cli.summary && !cli.raw {
        ReportMode::Summary
    } else {
        ReportMode::Records(record_format(&cli, &app_config))
    };
    let options = PipelineOptions {
        mode,
        summary: app_config.summary,
    };

    tracing::debug!(
        version = util::constants::APP_VERSION,
        path = %logfile.display(),
        mode = ?options.mode,
        "soapdump starting"
    );

    let stdout = io::stdout();
    let writer = io::BufWriter::new(stdout.lock());
    match pipeline::run_file(logfile, &options, writer) {
        Ok(count) => {
            tracing::info!(transactions = count, "Done");
            ExitCode::SUCCESS
        }
        Err(SoapDumpError::Io { path, source, .. }) => {
            eprintln!("Error: File '{}' not found ({source})", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
