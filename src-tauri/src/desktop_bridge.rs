use crate::{BRIDGE_GLOBAL_NAME, BRIDGE_PING_COMMAND, BRIDGE_PONG_EVENT};

const BRIDGE_SCRIPT_TEMPLATE: &str = r#"
(function () {
  var globalName = __BRIDGE_GLOBAL__;
  if (Object.prototype.hasOwnProperty.call(window, globalName)) {
    return;
  }

  var pingCommand = __PING_COMMAND__;
  var pongEvent = __PONG_EVENT__;

  function internals() {
    var value = window.__TAURI_INTERNALS__;
    if (!value) {
      throw new Error("desktop runtime is not available");
    }
    return value;
  }

  function listenPong(callback) {
    var runtime = internals();
    var handler = runtime.transformCallback(function () {
      callback();
    });
    return runtime.invoke("plugin:event|listen", {
      event: pongEvent,
      target: { kind: "Any" },
      handler: handler
    });
  }

  var bridge = Object.freeze({
    ping: function () {
      try {
        internals().invoke(pingCommand, {}).catch(function () {});
      } catch (_error) {}
    },
    onPong: function (callback) {
      if (typeof callback !== "function") {
        throw new TypeError("onPong expects a function");
      }

      var subscribed = true;
      var pendingId = listenPong(callback);
      return function unsubscribe() {
        if (!subscribed) {
          return;
        }
        subscribed = false;
        pendingId
          .then(function (eventId) {
            return internals().invoke("plugin:event|unlisten", {
              event: pongEvent,
              eventId: eventId
            });
          })
          .catch(function () {});
      };
    }
  });

  Object.defineProperty(window, globalName, {
    value: bridge,
    enumerable: true,
    writable: false,
    configurable: false
  });
})();
"#;

fn js_string_literal(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Script injected before page content runs; exposes only `ping` and `onPong`.
pub(crate) fn build_bridge_init_script() -> String {
    BRIDGE_SCRIPT_TEMPLATE
        .replace("__BRIDGE_GLOBAL__", &js_string_literal(BRIDGE_GLOBAL_NAME))
        .replace("__PING_COMMAND__", &js_string_literal(BRIDGE_PING_COMMAND))
        .replace("__PONG_EVENT__", &js_string_literal(BRIDGE_PONG_EVENT))
}
