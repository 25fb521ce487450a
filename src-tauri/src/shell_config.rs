use url::Url;

use crate::{platform::HostPlatform, DEFAULT_DEV_SERVER_URL, PACKAGED_ENTRY_ASSET};

#[derive(Debug, Clone)]
pub(crate) struct ShellConfig {
    pub(crate) packaged: bool,
    pub(crate) dev_server_url: Url,
    pub(crate) packaged_entry: String,
    pub(crate) platform: HostPlatform,
}

impl ShellConfig {
    pub(crate) fn resolve(packaged: bool) -> Result<Self, String> {
        let dev_server_url = Url::parse(DEFAULT_DEV_SERVER_URL).map_err(|error| {
            format!("Invalid dev server URL {DEFAULT_DEV_SERVER_URL}: {error}")
        })?;

        Ok(Self {
            packaged,
            dev_server_url,
            packaged_entry: PACKAGED_ENTRY_ASSET.to_string(),
            platform: HostPlatform::current(),
        })
    }
}
