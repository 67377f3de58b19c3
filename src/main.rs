//! Mediashelf CLI application entry point
//!
//! Command-line front end for a remote media library: sign in, upload files
//! with tags, rearrange the gallery, and share links to individual files.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (the session is remembered)
//! mediashelf login -e ada@example.com
//!
//! # List files in display order (default command)
//! mediashelf
//! mediashelf ls
//!
//! # Replace a file's tags
//! mediashelf tag 65f1c0 "beach, summer"
//!
//! # Swap two files
//! mediashelf mv 65f1c0 65f1c3
//!
//! # Share a file and copy its link
//! mediashelf share 65f1c0
//! mediashelf link 65f1c0
//!
//! # Upload files with tags, reviewing each one
//! mediashelf upload -i -t trip *.jpg
//!
//! # Quiet mode (only output results)
//! mediashelf -q ls
//! ```
//!
//! # Configuration
//!
//! On first run, mediashelf prompts for the service location. Configuration is
//! stored in the user's config directory (`~/.config/mediashelf/config.toml`
//! on Linux). Set `RUST_LOG=debug` to see request logs on stderr.

use mediashelf::{
    ShelfError,
    api::HttpClient,
    cli::{Cli, Commands, ConfigCommands, split_setting},
    commands,
    config::{KEYS, ShelfConfig},
    gallery::{SIGN_IN_HINT, SystemClipboard},
    output::{OutputWriter, StdoutWriter},
    session::{SledTokenStore, TokenAccess, require_token},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, ShelfError>;

/// Handle the config command - read or change a setting
///
/// # Errors
///
/// Returns `ShelfError` if the setting is malformed or unknown, or the
/// configuration cannot be saved.
fn handle_config_command(
    mut config: ShelfConfig,
    command: &ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).ok_or_else(|| {
                ShelfError::InvalidInput("Invalid format. Use: mediashelf config set key=value".into())
            })?;
            config.set(key, value)?;
            config.save()?;
            output.success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => match config.get(key) {
            Some(value) => output.write(&value),
            None if KEYS.contains(&key.as_str()) => output.info("(not set)"),
            None => {
                return Err(ShelfError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    KEYS.join(", ")
                )));
            }
        },
    }
    Ok(())
}

/// Handle commands that talk to the media service
///
/// # Errors
///
/// Returns `ShelfError` if the session is missing or the command fails.
fn handle_service_command(
    config: &ShelfConfig,
    command: Commands,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let store = SledTokenStore::open(config.token_store_path()?)?;
    let tokens: Arc<dyn TokenAccess> = Arc::new(store);
    let client = HttpClient::new(&config.api_url, config.timeout(), Arc::clone(&tokens))?;

    if command.requires_session() {
        require_token(&*tokens)?;
    }

    match command {
        Commands::Login { email } => {
            let credentials = commands::auth::prompt_credentials(email)?;
            commands::login(&client, &*tokens, &credentials, output)
        }
        Commands::Signup { email, first_name, last_name } => {
            let account = commands::auth::prompt_account(email, first_name, last_name)?;
            commands::signup(&client, &account, output)
        }
        Commands::Logout => commands::logout(&*tokens, output),
        Commands::Status => {
            commands::status(&*tokens, client.base_url(), output);
            Ok(())
        }
        Commands::Upload { files, tags, interactive } => {
            commands::upload(&client, files, tags.as_deref(), interactive, output).map(|_| ())
        }
        Commands::List => {
            let controller = commands::open(client, config.share_base(), output)?;
            commands::list(&controller, output, quiet);
            Ok(())
        }
        Commands::Tag { id, tags } => {
            let mut controller = commands::open(client, config.share_base(), output)?;
            commands::tag(&mut controller, &id, &tags, output)
        }
        Commands::Move { source, target } => {
            let mut controller = commands::open(client, config.share_base(), output)?;
            commands::move_file(&mut controller, &source, &target, output)
        }
        Commands::Share { id, off } => {
            let mut controller = commands::open(client, config.share_base(), output)?;
            commands::share(&mut controller, &id, !off, output)
        }
        Commands::Link { id, print } => {
            let mut controller = commands::open(client, config.share_base(), output)?;
            if cfg!(target_os = "linux") && !print {
                output.info("Holding the link on the clipboard until something else is copied");
            }
            commands::copy_link(&mut controller, &id, print, &mut SystemClipboard, output)
        }
        Commands::View { id } => {
            let mut controller = commands::open(client, config.share_base(), output)?;
            commands::view(&mut controller, &id, output)
        }
        Commands::Config { .. } => Err(ShelfError::InvalidInput(
            "config commands do not reach the service".into(),
        )),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = ShelfConfig::load_or_setup()?;
    let quiet = cli.quiet || config.quiet;
    let output = StdoutWriter::new(quiet);

    match cli.get_command() {
        Commands::Config { command } => handle_config_command(config, &command, &output),
        command => handle_service_command(&config, command, &output, quiet),
    }
}

/// Main entry point for the mediashelf application
///
/// Installs logging, loads configuration, parses command-line arguments, and
/// dispatches to the appropriate command handler. Failures already shown as
/// notices are not printed twice.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let signing_in = matches!(cli.get_command(), Commands::Login { .. });

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let output = StdoutWriter::default();
            if !e.is_reported() {
                output.error(&e.to_string());
            }
            // rejected credentials on login are not an expired session
            if !signing_in && e.needs_sign_in() {
                output.warning(SIGN_IN_HINT);
            }
            tracing::debug!(error = ?e, "command failed");
            ExitCode::FAILURE
        }
    }
}
