//! Process-wide default client.
//!
//! The default client is created from the environment the first time it is
//! needed, or installed explicitly with [`init`]. It lives until the process
//! exits.
//!
//! ```rust,no_run
//! # async fn run() -> kaizen::Result<()> {
//! kaizen::set_api_key("your-api-key")?;
//! let burn = kaizen::global::enzan()?.burn().await?;
//! println!("{:.2} USD/h", burn.burn_rate_usd_per_hour);
//! # Ok(())
//! # }
//! ```

use once_cell::sync::OnceCell;

use crate::akuma::AkumaClient;
use crate::enzan::EnzanClient;
use crate::sozo::SozoClient;
use crate::{KaizenClient, Result};

static DEFAULT_CLIENT: OnceCell<KaizenClient> = OnceCell::new();

/// Install `client` as the default. Returns it back if a default already exists.
pub fn init(client: KaizenClient) -> std::result::Result<(), KaizenClient> {
    DEFAULT_CLIENT.set(client)
}

/// The default client, built from the environment on first use.
pub fn default_client() -> Result<&'static KaizenClient> {
    DEFAULT_CLIENT.get_or_try_init(|| {
        tracing::debug!("initializing default kaizen client from environment");
        KaizenClient::from_env()
    })
}

pub fn set_api_key(key: impl Into<String>) -> Result<()> {
    default_client()?.set_api_key(key);
    Ok(())
}

pub fn set_base_url(url: impl Into<String>) -> Result<()> {
    default_client()?.set_base_url(url);
    Ok(())
}

pub fn akuma() -> Result<AkumaClient<'static>> {
    Ok(default_client()?.akuma())
}

pub fn enzan() -> Result<EnzanClient<'static>> {
    Ok(default_client()?.enzan())
}

pub fn sozo() -> Result<SozoClient<'static>> {
    Ok(default_client()?.sozo())
}
