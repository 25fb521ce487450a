use crate::{content_source::WindowContent, WindowSpec};

/// Window and process operations the shell controller needs from the host runtime.
pub(crate) trait ShellHost {
    fn packaged_asset_exists(&self, path: &str) -> bool;

    fn create_window(&self, spec: &WindowSpec, content: &WindowContent) -> Result<(), String>;

    fn open_devtools(&self, label: &str);

    fn quit(&self);
}
