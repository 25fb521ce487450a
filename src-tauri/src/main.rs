#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bridge_relay;
mod content_source;
mod desktop_bridge;
mod desktop_bridge_commands;
mod exit_events;
mod logging;
mod platform;
mod shell_config;
mod shell_controller;
mod shell_host;
mod tauri_host;
mod window_registry;

pub(crate) use app_constants::*;
pub(crate) use app_types::{ShellState, WindowHandle, WindowSpec};

fn main() {
    app_runtime::run();
}
