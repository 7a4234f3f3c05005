//! TONTO CLI entry point.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tonto_foundation::{Error, Result};
use tonto_runtime::{
    ExitStatus, OutputFormat, Repl, ReportConfig, Session, analyze, render, save_to_file,
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    interactive: bool,
    show_help: bool,
    show_version: bool,
    strict: bool,
    json: bool,
    no_color: bool,
    show_satisfied: bool,
    emit: Option<PathBuf>,
    verbose: bool,
}

impl CliConfig {
    fn report_config(&self) -> ReportConfig {
        let base = if self.json {
            ReportConfig::batch().with_format(OutputFormat::Json)
        } else if self.batch_mode {
            ReportConfig::default()
        } else {
            ReportConfig::interactive()
        };
        let show_satisfied = base.show_satisfied || self.show_satisfied;
        base.with_strict(self.strict)
            .with_color(!self.no_color && !self.json)
            .with_show_satisfied(show_satisfied)
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            eprintln!("Run 'tonto --help' for usage.");
            return ExitCode::from(ExitStatus::Fatal.code());
        }
    };

    init_tracing(config.verbose);

    match run(&config) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::from(ExitStatus::Fatal.code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("TONTO_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn parse_args(args: &[String]) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-i" | "--interactive" => config.interactive = true,
            "-v" | "--verbose" => config.verbose = true,
            "--strict" => config.strict = true,
            "--json" => config.json = true,
            "--no-color" => config.no_color = true,
            "--show-satisfied" => config.show_satisfied = true,
            "--emit" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err(Error::invalid_argument("--emit requires a path"));
                };
                config.emit = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(Error::invalid_argument(format!("unknown option: {arg}")));
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    if config.batch_mode && config.interactive {
        return Err(Error::invalid_argument(
            "--batch and --interactive are mutually exclusive",
        ));
    }
    if config.emit.is_some() && config.files.len() != 1 {
        return Err(Error::invalid_argument("--emit needs exactly one input file"));
    }
    if (config.json || config.emit.is_some()) && !config.interactive {
        config.batch_mode = true;
    }
    if config.batch_mode && config.files.is_empty() && !config.show_help && !config.show_version {
        return Err(Error::invalid_argument("batch mode needs at least one file"));
    }

    Ok(config)
}

fn run(config: &CliConfig) -> Result<ExitStatus> {
    if config.show_help {
        print_help();
        return Ok(ExitStatus::Success);
    }

    if config.show_version {
        println!("tonto {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitStatus::Success);
    }

    if config.batch_mode {
        return Ok(run_batch(config));
    }

    let mut repl = Repl::new()?.with_session(Session::with_config(config.report_config()));
    for file in &config.files {
        let text = read_file(file)?;
        repl.session_mut().append(&text)?;
        info!(file = %file.display(), "loaded");
    }
    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(ExitStatus::Success)
}

/// Analyzes every file and returns the worst status.
fn run_batch(config: &CliConfig) -> ExitStatus {
    let report_config = config.report_config();
    let mut status = ExitStatus::Success;

    for file in &config.files {
        let name = file.display().to_string();
        let file_status = match check_file(file, &name, config, &report_config) {
            Ok(file_status) => file_status,
            Err(e) => {
                eprintln!("{name}: \x1b[31merror: {e}\x1b[0m");
                ExitStatus::Fatal
            }
        };
        debug!(file = %name, status = ?file_status, "checked");
        status = status.max(file_status);
    }

    status
}

fn check_file(
    file: &Path,
    name: &str,
    config: &CliConfig,
    report_config: &ReportConfig,
) -> Result<ExitStatus> {
    let source = read_file(file)?;
    let result = analyze(&source)?;
    print!("{}", render(&result, name, report_config)?);

    if let Some(path) = &config.emit {
        save_to_file(&result, path)?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(ExitStatus::for_result(&result, report_config.strict))
}

fn read_file(file: &Path) -> Result<String> {
    fs::read_to_string(file)
        .map_err(|e| Error::io(format!("failed to read {}: {e}", file.display())))
}

fn print_help() {
    println!(
        "\x1b[1mtonto\x1b[0m - TONTO ontology checker

\x1b[1mUSAGE:\x1b[0m
    tonto [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files to analyze (batch) or to load into the shell

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -b, --batch          Analyze files, print reports, and exit
    -i, --interactive    Start the shell even when other options imply batch
    -v, --verbose        Log at debug level (TONTO_LOG overrides)
    --strict             Pattern violations fail the run
    --json               Print reports as JSON
    --no-color           Disable ANSI colors
    --show-satisfied     List satisfied patterns too
    --emit PATH          Write a MessagePack snapshot of the analysis

\x1b[1mEXIT STATUS:\x1b[0m
    0    no failing diagnostics
    1    lexical or syntactic errors (or any violation with --strict)
    2    a file could not be read or was empty

\x1b[1mEXAMPLES:\x1b[0m
    tonto                            Start the shell
    tonto clinic.tonto               Load clinic.tonto, then start the shell
    tonto -b clinic.tonto            Check clinic.tonto and exit
    tonto --json -b a.tonto b.tonto  Check several files, JSON output
    tonto --emit out.msgpack a.tonto Check a.tonto and save a snapshot

\x1b[1mSHELL COMMANDS:\x1b[0m
    :tokens :tree :patterns :diagnostics :source
    :load <path> :reset :help :quit
    Ctrl+D               Exit the shell
    Ctrl+C               Cancel current input"
    );
}
