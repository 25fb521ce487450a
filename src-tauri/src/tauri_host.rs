use std::path::PathBuf;

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use url::Url;

use crate::{content_source::WindowContent, shell_host::ShellHost, WindowSpec, BLANK_PAGE_URL};

pub(crate) struct TauriShellHost {
    app_handle: AppHandle,
}

impl TauriShellHost {
    pub(crate) fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

fn webview_url(content: &WindowContent) -> Result<WebviewUrl, String> {
    match content {
        WindowContent::Blank => Url::parse(BLANK_PAGE_URL)
            .map(WebviewUrl::External)
            .map_err(|error| format!("Invalid blank page URL: {error}")),
        WindowContent::PackagedAsset(path) => Ok(WebviewUrl::App(PathBuf::from(path))),
        WindowContent::External(url) => Ok(WebviewUrl::External(url.clone())),
    }
}

impl ShellHost for TauriShellHost {
    fn packaged_asset_exists(&self, path: &str) -> bool {
        self.app_handle
            .asset_resolver()
            .get(path.to_string())
            .is_some()
    }

    fn create_window(&self, spec: &WindowSpec, content: &WindowContent) -> Result<(), String> {
        WebviewWindowBuilder::new(&self.app_handle, &spec.label, webview_url(content)?)
            .title(&spec.title)
            .inner_size(spec.width, spec.height)
            .initialization_script(&spec.initialization_script)
            .build()
            .map(|_| ())
            .map_err(|error| format!("Failed to build window {}: {}", spec.label, error))
    }

    fn open_devtools(&self, label: &str) {
        if let Some(window) = self.app_handle.get_webview_window(label) {
            window.open_devtools();
        }
    }

    fn quit(&self) {
        self.app_handle.exit(0);
    }
}
