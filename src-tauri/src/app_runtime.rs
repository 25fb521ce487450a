use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    bridge_relay::BridgeRelay,
    desktop_bridge, exit_events,
    logging::{self, append_bridge_log, append_desktop_log, append_startup_log},
    shell_config::ShellConfig,
    shell_controller::ShellController,
    tauri_host::TauriShellHost,
    ShellState, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(logging::default_shell_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    tauri::Builder::default()
        .manage(BridgeRelay::default())
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_ping,
        ])
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                exit_events::handle_window_destroyed(window.app_handle(), window.label());
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Started => append_desktop_log(&format!(
                "page-load started in {}: {}",
                webview.label(),
                payload.url()
            )),
            PageLoadEvent::Finished => append_desktop_log(&format!(
                "page-load finished in {}: {}",
                webview.label(),
                payload.url()
            )),
        })
        .setup(|app| {
            let packaged = !tauri::is_dev();
            let config = ShellConfig::resolve(packaged)?;
            append_startup_log(&format!(
                "shell mode: {}, platform: {}",
                if packaged { "packaged" } else { "development" },
                config.platform.as_str()
            ));

            let host = TauriShellHost::new(app.handle().clone());
            let controller =
                ShellController::new(host, config, desktop_bridge::build_bridge_init_script());
            app.manage(ShellState::new(controller));

            let relay = app.state::<BridgeRelay>();
            if let Err(error) = relay.on_ping(|label| {
                append_bridge_log(&format!("ping received from window {label}"));
            }) {
                append_startup_log(&format!("failed to register ping listener: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::Ready => exit_events::handle_ready(app_handle),
            RunEvent::ExitRequested { code, api, .. } => {
                exit_events::handle_exit_requested(app_handle, code, &api);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => exit_events::handle_reactivate(app_handle),
            RunEvent::Exit => exit_events::handle_exit_event(),
            _ => {}
        });
}
