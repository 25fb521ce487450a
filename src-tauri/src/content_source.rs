use url::Url;

use crate::shell_config::ShellConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentSource {
    /// Path of an asset embedded from `frontendDist`.
    Packaged(String),
    DevServer(Url),
}

impl ContentSource {
    pub(crate) fn opens_devtools(&self) -> bool {
        matches!(self, Self::DevServer(_))
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Packaged(entry) => format!("packaged asset {entry}"),
            Self::DevServer(url) => format!("dev server {url}"),
        }
    }
}

/// What the window is actually pointed at once the source has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WindowContent {
    Blank,
    PackagedAsset(String),
    External(Url),
}

pub(crate) fn select_content_source(config: &ShellConfig) -> ContentSource {
    if config.packaged {
        ContentSource::Packaged(config.packaged_entry.clone())
    } else {
        ContentSource::DevServer(config.dev_server_url.clone())
    }
}

/// Checks `entry` against the embedded assets using `asset_exists`.
pub(crate) fn verify_packaged_entry<F>(entry: &str, asset_exists: F) -> Result<(), String>
where
    F: Fn(&str) -> bool,
{
    let trimmed = entry.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return Err("Packaged entry path is empty.".to_string());
    }
    if trimmed.split('/').any(|segment| segment == "..") {
        return Err(format!("Packaged entry escapes the frontend dist: {entry}"));
    }
    if !asset_exists(trimmed) {
        return Err(format!("Packaged entry is missing from the bundle: {trimmed}"));
    }
    Ok(())
}
