use tauri::{State, WebviewWindow};

use crate::{bridge_relay::BridgeRelay, logging::append_bridge_log};

#[tauri::command]
pub(crate) fn desktop_bridge_ping(window: WebviewWindow, relay: State<'_, BridgeRelay>) {
    if let Err(error) = relay.receive_ping(window.label()) {
        append_bridge_log(&format!("failed to relay ping from {}: {error}", window.label()));
    }
}
