//! Session commands - login, signup, logout and status

use crate::api::{self, AuthApi};
use crate::models::{Credentials, NewAccount};
use crate::output::OutputWriter;
use crate::session::TokenAccess;
use crate::ShelfError;
use dialoguer::{Input, Password, theme::ColorfulTheme};

type Result<T> = std::result::Result<T, ShelfError>;

/// Ask for whatever login details were not given on the command line
///
/// # Errors
/// Returns `ShelfError::InvalidInput` if the terminal cannot be read.
pub fn prompt_credentials(email: Option<String>) -> Result<Credentials> {
    let email = match email {
        Some(email) => email,
        None => prompt_text("Email")?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()
        .map_err(|e| ShelfError::InvalidInput(format!("Failed to read password: {e}")))?;

    Ok(Credentials { email, password })
}

/// Ask for whatever account details were not given on the command line
///
/// # Errors
/// Returns `ShelfError::InvalidInput` if the terminal cannot be read.
pub fn prompt_account(
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<NewAccount> {
    let email = email.map_or_else(|| prompt_text("Email"), Ok)?;
    let first_name = first_name.map_or_else(|| prompt_text("First name"), Ok)?;
    let last_name = last_name.map_or_else(|| prompt_text("Last name"), Ok)?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .map_err(|e| ShelfError::InvalidInput(format!("Failed to read password: {e}")))?;

    Ok(NewAccount::user(email, password, first_name, last_name))
}

fn prompt_text(prompt: &str) -> Result<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| ShelfError::InvalidInput(format!("Failed to read input: {e}")))
}

/// Sign in and store the session token
///
/// # Errors
/// Returns `ShelfError::Api` if the credentials are rejected or the token
/// cannot be stored.
pub fn login(
    auth: &dyn AuthApi,
    tokens: &dyn TokenAccess,
    credentials: &Credentials,
    output: &dyn OutputWriter,
) -> Result<()> {
    api::sign_in(auth, tokens, credentials)?;
    output.success(&format!("Signed in as {}", credentials.email));
    Ok(())
}

/// Register a new account
///
/// The session is not changed; sign in afterwards.
///
/// # Errors
/// Returns `ShelfError::Api` if the account cannot be created.
pub fn signup(auth: &dyn AuthApi, account: &NewAccount, output: &dyn OutputWriter) -> Result<()> {
    auth.create_user(account)?;
    output.success(&format!("Account created for {}", account.email));
    output.info("Sign in with 'mediashelf login'");
    Ok(())
}

/// Forget the stored session
///
/// # Errors
/// Returns `ShelfError::Api` if the stored token cannot be removed.
pub fn logout(tokens: &dyn TokenAccess, output: &dyn OutputWriter) -> Result<()> {
    let was_signed_in = tokens.get_token().is_some();
    api::sign_out(tokens)?;
    if was_signed_in {
        output.success("Signed out");
    } else {
        output.info("Not signed in");
    }
    Ok(())
}

/// Report whether a session is stored and where the service lives
pub fn status(tokens: &dyn TokenAccess, api_url: &str, output: &dyn OutputWriter) {
    output.write(&format!("Service: {api_url}"));
    if tokens.get_token().is_some() {
        output.success("Signed in");
    } else {
        output.warning("Not signed in. Run 'mediashelf login'");
    }
}
