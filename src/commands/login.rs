use super::common::open_store;
use crate::{
    libs::{
        auth::{CredentialCheck, ProfileCredentials},
        messages::Message,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account e-mail; prompted when omitted
    email: Option<String>,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let (config, mut store) = open_store()?;

    if let Some(email) = store.session()? {
        msg_info!(Message::AlreadyLoggedIn(email));
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let email = match login_args.email {
        Some(email) => email,
        None => Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&theme)
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    let email = email.trim().to_string();
    if !ProfileCredentials::new(&config.auth, store.profile()).verify(&email, &password) {
        tracing::warn!(email = %email, "rejected login");
        msg_bail_anyhow!(Message::InvalidCredentials);
    }

    store.login(&email)?;
    msg_success!(Message::LoginSuccess(email));
    Ok(())
}
