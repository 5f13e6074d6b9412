use anyhow::Context;
use clap::Parser;
use mama::application::ConfigService;
use mama::cli::{self, Cli, Commands};
use mama::domain::EntryList;
use mama::error::MamaError;
use mama::infrastructure::{Config, EntryStorage, FileStorage};
use std::io::{self, BufRead, Write};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let (message, code) = match e.downcast_ref::<MamaError>() {
                Some(err) => (err.display_with_suggestions(), err.exit_code()),
                None => (format!("{:#}", e), 1),
            };
            eprintln!("Error: {}", message);
            std::process::exit(code);
        }
    }
}

/// Logs go to stderr so stdout only carries journal output.
/// MAMA_LOG overrides the configured level.
fn init_tracing(default_level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var("MAMA_LOG")
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let home = Config::resolve_home(cli.home)?;

    match cli.command {
        Some(Commands::Config { key, value, list }) => {
            init_tracing(LevelFilter::WARN);
            let service = ConfigService::new(home);

            if list {
                println!("{}", cli::format_config(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: mama config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, log_level");
            }
            Ok(())
        }
        command => {
            let config = Config::load_from_dir(&home)?;
            init_tracing(config.log_filter()?);

            let storage = FileStorage::new(config.data_path(&home));
            let mut list = storage.load()?;
            tracing::debug!(entries = list.size(), "journal ready");

            match command {
                Some(Commands::Exec { input }) => exec_once(&input.join(" "), &mut list, &storage),
                _ => repl(&mut list, &storage),
            }
        }
    }
}

/// Run one journal command; a failed command becomes the process error
fn exec_once(input: &str, list: &mut EntryList, storage: &dyn EntryStorage) -> anyhow::Result<()> {
    let result = cli::parse(input)?.execute(list, Some(storage))?;
    println!("{}", result.feedback());
    Ok(())
}

/// Read commands from stdin until `bye` or end of input
fn repl(list: &mut EntryList, storage: &dyn EntryStorage) -> anyhow::Result<()> {
    println!("{}", cli::format_welcome());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = cli::parse(&line).and_then(|command| command.execute(list, Some(storage)));
        match outcome {
            Ok(result) => {
                println!("{}", cli::format_feedback(result.feedback()));
                if result.is_exit() {
                    break;
                }
            }
            Err(e) => {
                tracing::debug!("command failed: {:?}", e);
                println!("{}", cli::format_feedback(&e.display_with_suggestions()));
            }
        }

        stdout.flush().context("failed to flush output")?;
    }

    Ok(())
}
