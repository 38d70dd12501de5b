//! IPC protocol between the host and the embedded showcase page.
//!
//! Messages flow in both directions:
//! - **Showcase -> host**: the page posts `{name, args}` envelopes with
//!   `window.postMessage`; the init script forwards them through
//!   `window.ipc.postMessage`, which triggers the `ipc_handler` registered
//!   on the webview.
//! - **Host -> showcase**: the host evaluates a script that re-posts the
//!   envelope inside the embedded document, where the showcase's own
//!   message listeners pick it up.

use serde::{Deserialize, Serialize};

use crate::errors::FrameError;

/// The `{name, args}` structured message unit exchanged in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Protocol message name.
    pub name: String,
    /// Message payload; opaque to the bridge.
    #[serde(default)]
    pub args: serde_json::Value,
}

impl Envelope {
    pub fn new(name: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Parse an envelope from a raw IPC body.
    ///
    /// `None` for anything that is not a JSON object with a string `name`;
    /// a missing `args` field is read as null.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// Inbound channel of the embedded surface, as seen from the host.
///
/// Delivery is broadcast-style: a posted envelope becomes visible to every
/// listener on the surface's side, with no target restriction.
/// Implementations report an unavailable channel with
/// [`FrameError::NoChannel`].
pub trait EnvelopePort {
    fn post(&self, envelope: &Envelope) -> Result<(), FrameError>;
}

/// Initialization script injected into the showcase page.
///
/// Forwards every envelope-shaped `message` event raised inside the page
/// out to the host. Host-originated envelopes re-enter here too; their
/// names live in the outbound namespace, so the receiver drops them as
/// unmatched.
pub const SHOWCASE_INIT_SCRIPT: &str = r#"
(function() {
    window.addEventListener('message', function(event) {
        var data = event.data;
        if (data && typeof data.name === 'string') {
            window.ipc.postMessage(JSON.stringify({ name: data.name, args: data.args }));
        }
    });
})();
"#;

/// Generate the script that delivers an outbound envelope into the page.
pub fn js_post_envelope(envelope: &Envelope) -> String {
    let json = serde_json::to_string(envelope).unwrap_or_else(|_| "{}".to_string());
    format!("window.postMessage({json}, '*');")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_name_and_args() {
        let envelope =
            Envelope::from_json(r#"{"name":"showcase.updateRequirement","args":{"value":3}}"#)
                .unwrap();
        assert_eq!(envelope.name, "showcase.updateRequirement");
        assert_eq!(envelope.args, json!({"value": 3}));
    }

    #[test]
    fn missing_args_reads_as_null() {
        let envelope = Envelope::from_json(r#"{"name":"showcase.dragStarted"}"#).unwrap();
        assert_eq!(envelope.args, serde_json::Value::Null);
    }

    #[test]
    fn rejects_missing_name() {
        assert!(Envelope::from_json(r#"{"args":{"value":3}}"#).is_none());
    }

    #[test]
    fn rejects_non_string_name() {
        assert!(Envelope::from_json(r#"{"name":42,"args":null}"#).is_none());
    }

    #[test]
    fn rejects_non_object_bodies() {
        assert!(Envelope::from_json("null").is_none());
        assert!(Envelope::from_json("[1,2]").is_none());
        assert!(Envelope::from_json("not json at all").is_none());
        assert!(Envelope::from_json("").is_none());
    }

    #[test]
    fn post_script_embeds_the_envelope_as_json() {
        let envelope = Envelope::new("elfsquad.stepChanged", json!({"stepId": "a\"b"}));
        let script = js_post_envelope(&envelope);
        assert!(script.starts_with("window.postMessage("));
        assert!(script.contains(r#""name":"elfsquad.stepChanged""#));
        // Quotes in payload text must arrive JSON-escaped, not raw.
        assert!(script.contains(r#"a\"b"#));
    }
}
