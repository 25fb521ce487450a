use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::{
    logging::{append_desktop_log, append_shutdown_log, append_startup_log},
    shell_controller::AllWindowsClosedDecision,
    ShellState,
};

pub(crate) fn handle_ready(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    state.with_controller("startup", append_startup_log, |controller| {
        controller.startup(append_startup_log)
    });
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub(crate) fn handle_reactivate(app_handle: &AppHandle) {
    let state = app_handle.state::<ShellState>();
    state.with_controller("reactivate", append_desktop_log, |controller| {
        controller.handle_reactivate(append_desktop_log)
    });
}

pub(crate) fn handle_window_destroyed(app_handle: &AppHandle, label: &str) {
    let Some(state) = app_handle.try_state::<ShellState>() else {
        return;
    };
    let removed = state.with_controller("window destroyed", append_desktop_log, |controller| {
        controller
            .window_destroyed(label)
            .map(|handle| (handle, controller.open_window_count()))
    });
    if let Some(Some((handle, remaining))) = removed {
        append_desktop_log(&format!(
            "window {} ({}x{}) destroyed, {} still open",
            handle.label, handle.width, handle.height, remaining
        ));
    }
}

/// `code == None` is the runtime reporting that the last window closed.
pub(crate) fn handle_exit_requested(
    app_handle: &AppHandle,
    code: Option<i32>,
    api: &ExitRequestApi,
) {
    if let Some(code) = code {
        append_shutdown_log(&format!("exit requested with code {code}"));
        return;
    }

    api.prevent_exit();
    let state = app_handle.state::<ShellState>();
    let decision = state.with_controller("all windows closed", append_shutdown_log, |controller| {
        controller.handle_all_windows_closed(append_shutdown_log)
    });
    if decision.is_none() {
        append_shutdown_log("exiting without controller decision");
        app_handle.exit(0);
    } else if decision == Some(AllWindowsClosedDecision::StayResident) {
        append_desktop_log("no windows open, waiting for reactivation");
    }
}

pub(crate) fn handle_exit_event() {
    append_shutdown_log("desktop process exited");
}
