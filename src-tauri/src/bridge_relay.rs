use std::sync::{Arc, Mutex};

use tauri::{AppHandle, Emitter};

use crate::BRIDGE_PONG_EVENT;

type PingListener = Arc<dyn Fn(&str) + Send + Sync>;

/// Delivers `pong` to a window's content.
pub(crate) trait PongSink {
    fn emit_pong(&self, label: &str) -> Result<(), String>;
}

impl PongSink for AppHandle {
    fn emit_pong(&self, label: &str) -> Result<(), String> {
        self.emit_to(label, BRIDGE_PONG_EVENT, ())
            .map_err(|error| format!("Failed to emit {BRIDGE_PONG_EVENT} to window {label}: {error}"))
    }
}

/// Privileged end of the bridge: fans inbound pings out to listeners and sends pongs back.
#[derive(Default)]
pub(crate) struct BridgeRelay {
    ping_listeners: Mutex<Vec<PingListener>>,
}

impl BridgeRelay {
    pub(crate) fn on_ping<F>(&self, listener: F) -> Result<(), String>
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.ping_listeners
            .lock()
            .map_err(|_| "Bridge listener lock poisoned.".to_string())?
            .push(Arc::new(listener));
        Ok(())
    }

    /// Invokes every ping listener once, outside the lock. Returns how many ran.
    pub(crate) fn receive_ping(&self, label: &str) -> Result<usize, String> {
        let listeners: Vec<PingListener> = self
            .ping_listeners
            .lock()
            .map_err(|_| "Bridge listener lock poisoned.".to_string())?
            .iter()
            .map(Arc::clone)
            .collect();

        for listener in &listeners {
            listener(label);
        }
        Ok(listeners.len())
    }

    // Nothing in the shell replies to ping yet; this is where a reply would go.
    #[allow(dead_code)]
    pub(crate) fn send_pong<S: PongSink>(&self, sink: &S, label: &str) -> Result<(), String> {
        sink.emit_pong(label)
    }
}
