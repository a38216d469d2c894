//! `ortho auth` handlers.
//!
//! The token is stored verbatim in the local store and never echoed back.

use anyhow::{bail, Result};

use ortho_config::OrthoConfig;
use ortho_store::KEY_AUTH_TOKEN;

use super::open_store;

pub fn login(cfg: &OrthoConfig, token: String) -> Result<()> {
    let token = token.trim().to_string();
    if token.is_empty() {
        bail!("--token must not be empty");
    }
    let store = open_store(cfg)?;
    store.put(KEY_AUTH_TOKEN, &token)?;
    println!("logged_in=true");
    Ok(())
}

pub fn logout(cfg: &OrthoConfig) -> Result<()> {
    let store = open_store(cfg)?;
    store.delete(KEY_AUTH_TOKEN)?;
    println!("logged_out=true");
    Ok(())
}

pub fn status(cfg: &OrthoConfig) -> Result<()> {
    let store = open_store(cfg)?;
    let present = store.get::<String>(KEY_AUTH_TOKEN)?.is_some();
    println!("authenticated={present}");
    Ok(())
}
