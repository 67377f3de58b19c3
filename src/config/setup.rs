//! Interactive setup wizard for first-time configuration
//!
//! Runs when mediashelf starts without a config file.

use super::{DEFAULT_API_URL, ShelfConfig};
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};

/// Interactive first-time setup - prompts for the service location
///
/// 1. Prompts for the API base URL (default: local development server)
/// 2. Prompts for the share link base URL (default: same as the API)
/// 3. Saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<ShelfConfig, ConfigError> {
    println!("Welcome to mediashelf! Let's point it at your media service.\n");

    let api_url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("API base URL")
        .default(DEFAULT_API_URL.to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let share_base: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Share link base URL")
        .default(api_url.clone())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let mut config = ShelfConfig::default();
    config.set("api_url", &api_url)?;
    if share_base.trim() != api_url.trim() {
        config.set("share_base_url", &share_base)?;
    }

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
