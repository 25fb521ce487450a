pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "App Shell";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 800.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 600.0;

pub(crate) const DEFAULT_DEV_SERVER_URL: &str = "http://localhost:5173";
// Served from `frontendDist` (`../dist/renderer`), which the bundle embeds.
pub(crate) const PACKAGED_ENTRY_ASSET: &str = "index.html";
pub(crate) const BLANK_PAGE_URL: &str = "about:blank";

pub(crate) const SHELL_ROOT_ENV: &str = "APP_SHELL_ROOT";
pub(crate) const SHELL_ROOT_DIR_NAME: &str = ".app-shell";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";

pub(crate) const BRIDGE_GLOBAL_NAME: &str = "appShell";
pub(crate) const BRIDGE_PING_COMMAND: &str = "desktop_bridge_ping";
pub(crate) const BRIDGE_PONG_EVENT: &str = "pong";
