use clap::Parser;
use p8tokens_cli::args::{Args, Command};
use p8tokens_cli::error::Result;
use p8tokens_cli::{EXIT_OVER_BUDGET, config, logging, presentation};
use p8tokens_engine::error::EngineError;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize(logging::resolve_level(
        args.logging.log_level,
        args.logging.verbose,
    ));

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    match &args.command {
        Some(Command::Combine { files, output }) => {
            let target = p8tokens_engine::combine::write_combined(files, output.as_deref())?;
            println!("{}", target.display());
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Explain { file, all }) => explain(file, *all),
        None => count(args),
    }
}

fn explain(file: &Path, all: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(file).map_err(|e| EngineError::FileRead {
        path: file.to_path_buf(),
        source: e,
    })?;
    let lines = p8tokens_core::explain_text(&String::from_utf8_lossy(&bytes));
    println!("{}", presentation::render_explain(&lines, all));
    Ok(ExitCode::SUCCESS)
}

fn count(args: &Args) -> Result<ExitCode> {
    let config = config::load(args)?;
    let format = args.output.format;
    let sort = &args.output.sort;

    if config.watch {
        let run_cycle = || {
            presentation::print_clear_screen();
            match p8tokens_engine::report(&config) {
                Ok(result) => {
                    if let Err(e) = presentation::print_report(&result.report, format, sort) {
                        eprintln!("Output Error: {e}");
                    }
                }
                Err(e) => eprintln!("Error in watch cycle: {e}"),
            }
        };

        p8tokens_engine::watch::watch_loop(&config, run_cycle)?;
        return Ok(ExitCode::SUCCESS);
    }

    let result = p8tokens_engine::report(&config)?;
    presentation::print_report(&result.report, format, sort)?;

    if args.behavior.deny_overflow && result.report.is_over_budget() {
        eprintln!(
            "Token budget exceeded: {} / {}",
            result.report.total, result.report.limit
        );
        return Ok(ExitCode::from(EXIT_OVER_BUDGET));
    }

    Ok(ExitCode::SUCCESS)
}
