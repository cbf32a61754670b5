use super::common::open_store;
use crate::{libs::messages::Message, msg_info, msg_success};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let (_, mut store) = open_store()?;

    if store.logout()? {
        msg_success!(Message::LoggedOut);
    } else {
        msg_info!(Message::NotLoggedIn);
    }
    Ok(())
}
