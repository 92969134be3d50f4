//! WebSocket live reload.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Path of the live-reload WebSocket.
pub const RELOAD_PATH: &str = "/__reload";
/// Path of the client script that connects to it.
pub const RELOAD_SCRIPT_PATH: &str = "/__reload.js";

/// Messages sent to connected browsers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Connection established
    Connected,

    /// The site was rebuilt; reload the page
    Reload,

    /// The rebuild failed; the page stays as it is
    BuildFailed {
        /// Error reported by the builder
        message: String,
    },
}

/// Hub for broadcasting reload messages to all connected clients.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: ReloadMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert the reload script tag before `</body>`, or append it.
pub fn inject_reload_script(html: &str) -> String {
    let tag = format!(r#"<script src="{}"></script>"#, RELOAD_SCRIPT_PATH);

    match html.rfind("</body>") {
        Some(pos) => format!("{}{}\n{}", &html[..pos], tag, &html[pos..]),
        None => format!("{}\n{}", html, tag),
    }
}

/// Generate the client-side reload script.
///
/// The socket address is taken from the page location so the script works on
/// any port.
pub fn reload_client_script() -> String {
    format!(
        r#"
(function() {{
  'use strict';

  const url = (location.protocol === 'https:' ? 'wss://' : 'ws://') + location.host + '{}';
  let reconnectAttempts = 0;
  const maxReconnectAttempts = 10;

  function connect() {{
    const ws = new WebSocket(url);

    ws.onopen = function() {{
      if (reconnectAttempts > 0) {{
        location.reload();
        return;
      }}
      console.log('[reload] Connected');
    }};

    ws.onmessage = function(event) {{
      const msg = JSON.parse(event.data);

      switch (msg.type) {{
        case 'reload':
          location.reload();
          break;

        case 'build_failed':
          console.error('[reload] Build failed:', msg.message);
          break;

        case 'connected':
          break;
      }}
    }};

    ws.onclose = function() {{
      if (reconnectAttempts < maxReconnectAttempts) {{
        reconnectAttempts++;
        setTimeout(connect, 1000 * reconnectAttempts);
      }}
    }};
  }}

  connect();
}})();
"#,
        RELOAD_PATH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = ReloadHub::new();
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();

        hub.send(ReloadMessage::Reload);

        assert_eq!(hub.subscriber_count(), 2);
        assert_eq!(first.try_recv().unwrap(), ReloadMessage::Reload);
        assert_eq!(second.try_recv().unwrap(), ReloadMessage::Reload);
    }

    #[test]
    fn send_without_subscribers_is_ignored() {
        ReloadHub::new().send(ReloadMessage::Reload);
    }

    #[test]
    fn serializes_messages() {
        let msg = ReloadMessage::BuildFailed {
            message: "Invalid courses.json".to_string(),
        };

        let json = serde_json::to_string(&msg).unwrap();

        assert_eq!(
            json,
            r#"{"type":"build_failed","message":"Invalid courses.json"}"#
        );
        assert_eq!(
            serde_json::to_string(&ReloadMessage::Reload).unwrap(),
            r#"{"type":"reload"}"#
        );
    }

    #[test]
    fn injects_before_closing_body() {
        let html = "<html><body><p>Hi</p></body></html>";

        let injected = inject_reload_script(html);

        assert_eq!(
            injected,
            "<html><body><p>Hi</p><script src=\"/__reload.js\"></script>\n</body></html>"
        );
    }

    #[test]
    fn appends_when_body_is_missing() {
        assert!(inject_reload_script("<p>fragment</p>").ends_with("<script src=\"/__reload.js\"></script>"));
    }

    #[test]
    fn client_script_targets_reload_path() {
        assert!(reload_client_script().contains("'/__reload'"));
    }
}
