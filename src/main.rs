//! Gridcalc - A text-grid spreadsheet with a line-oriented shell

mod command;
mod config;
mod error;
mod repl;
mod session;

use anyhow::Context;
use gridcalc_core::Document;
use repl::Repl;
use session::{FixedAnswer, Flow, Session};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn print_usage() {
    eprintln!("Usage: gridcalc [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Spreadsheet file to open");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <CMD>       Run a command non-interactively (can be repeated)");
    eprintln!("  --config <FILE>           Read settings from FILE instead of the user config");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -h, --help                Print help");
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    let mut file_path: Option<PathBuf> = None;
    let mut commands: Vec<String> = Vec::new();
    let mut config_file: Option<PathBuf> = None;
    let mut no_config = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(ExitCode::SUCCESS);
            }
            "-c" | "--command" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --command requires a value");
                    return Ok(ExitCode::FAILURE);
                }
                commands.push(args[i].to_string());
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    return Ok(ExitCode::FAILURE);
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            "--no-config" => no_config = true,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                return Ok(ExitCode::FAILURE);
            }
            _ => {
                if file_path.is_none() {
                    file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        i += 1;
    }

    let (config, warnings) = if no_config && config_file.is_none() {
        (config::Config::default(), Vec::new())
    } else {
        config::load_config(config_file.as_ref())?
    };

    let default_level = config.log_level.as_deref().unwrap_or("warn");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut session = Session::new(&config, std::io::stdout());

    if let Some(path) = file_path {
        let document = if path.exists() {
            Document::open(&path).with_context(|| format!("failed to open {}", path.display()))?
        } else {
            log::debug!("{} does not exist yet, starting empty", path.display());
            Document {
                file_path: Some(path),
                ..Document::default()
            }
        };
        session.set_document(document);
    }

    if !commands.is_empty() {
        let mut confirm = FixedAnswer(config.assume_yes);
        let mut failed = false;
        for cmd in &commands {
            match session.execute(cmd, &mut confirm) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    eprintln!("{}", e);
                    failed = true;
                }
            }
        }
        if session.document().is_some_and(|doc| doc.modified) {
            log::warn!("exiting with unsaved changes");
        }
        return Ok(if failed {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    Repl::new(std::io::stdin().lock(), std::io::stdout()).run(&mut session, &config.prompt)?;
    Ok(ExitCode::SUCCESS)
}
