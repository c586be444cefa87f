//! Interactive configuration wizard.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the saved configuration and fall back to defaults
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
