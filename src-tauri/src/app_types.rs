use std::sync::Mutex;

use crate::{shell_controller::ShellController, tauri_host::TauriShellHost};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSpec {
    pub(crate) label: String,
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) initialization_script: String,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowHandle {
    pub(crate) label: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl From<&WindowSpec> for WindowHandle {
    fn from(spec: &WindowSpec) -> Self {
        Self {
            label: spec.label.clone(),
            width: spec.width,
            height: spec.height,
        }
    }
}

pub(crate) struct ShellState {
    pub(crate) controller: Mutex<ShellController<TauriShellHost>>,
}

impl ShellState {
    pub(crate) fn new(controller: ShellController<TauriShellHost>) -> Self {
        Self {
            controller: Mutex::new(controller),
        }
    }

    /// Runs `action` against the controller, logging instead of panicking on a poisoned lock.
    pub(crate) fn with_controller<T, F, L>(&self, context: &str, log: L, action: F) -> Option<T>
    where
        F: FnOnce(&mut ShellController<TauriShellHost>) -> T,
        L: Fn(&str),
    {
        match self.controller.lock() {
            Ok(mut guard) => Some(action(&mut guard)),
            Err(_) => {
                log(&format!("shell controller lock poisoned, skipping {context}"));
                None
            }
        }
    }
}
