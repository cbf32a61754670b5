use super::common::open_session;
use crate::{
    libs::{error::StoreError, messages::Message, view::View},
    msg_bail_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    command: Option<ProfileCommand>,
}

#[derive(Debug, Subcommand)]
enum ProfileCommand {
    /// Show the profile
    Show,
    /// Edit name and e-mail; prompts when no flag is given
    Edit {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Set the profile photo from an image file
    Photo { path: PathBuf },
    /// Change the password
    Password,
}

pub async fn cmd(args: ProfileArgs) -> Result<()> {
    match args.command {
        Some(ProfileCommand::Show) | None => handle_show(),
        Some(ProfileCommand::Edit { name, email }) => handle_edit(name, email),
        Some(ProfileCommand::Photo { path }) => handle_photo(path).await,
        Some(ProfileCommand::Password) => handle_password(),
    }
}

fn handle_show() -> Result<()> {
    let (_, store) = open_session()?;

    msg_print!(Message::ProfileHeader, true);
    View::profile(store.profile())?;
    Ok(())
}

fn handle_edit(name: Option<String>, email: Option<String>) -> Result<()> {
    let (_, mut store) = open_session()?;

    let (name, email) = if name.is_none() && email.is_none() {
        let theme = ColorfulTheme::default();
        let profile = store.profile();
        let name: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptProfileName.to_string())
            .default(profile.name.clone())
            .interact_text()?;
        let email: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptProfileEmail.to_string())
            .default(profile.email.clone())
            .interact_text()?;
        (Some(name), Some(email))
    } else {
        (name, email)
    };

    store.update_profile(name, email)?;
    msg_success!(Message::ProfileUpdated);
    Ok(())
}

async fn handle_photo(path: PathBuf) -> Result<()> {
    let (_, mut store) = open_session()?;

    store.set_photo(&path).await?;
    msg_success!(Message::PhotoUpdated);
    Ok(())
}

fn handle_password() -> Result<()> {
    let (config, mut store) = open_session()?;

    let theme = ColorfulTheme::default();
    let current = Password::with_theme(&theme)
        .with_prompt(Message::PromptCurrentPassword.to_string())
        .interact()?;
    let new = Password::with_theme(&theme)
        .with_prompt(Message::PromptNewPassword.to_string())
        .interact()?;
    let confirm = Password::with_theme(&theme)
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .interact()?;

    match store.change_password(&config.auth.default_password, &current, &new, &confirm) {
        Ok(()) => msg_success!(Message::PasswordChanged),
        Err(StoreError::Validation(err)) => msg_bail_anyhow!(Message::ValidationFailed(err.to_string())),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
