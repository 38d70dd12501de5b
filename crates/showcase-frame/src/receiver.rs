//! Message Receiver: turns inbound envelopes into dispatch calls.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::events::ShowcaseEvent;
use crate::frame::CallbackRegistry;
use crate::ipc::Envelope;

/// One listener on the embedded surface's inbound channel.
///
/// A clone of the owning frame's receiver is captured by the webview's IPC
/// handler at mount time; that clone is the installed subscription, and it
/// lives exactly as long as the webview, so discarding the frame also
/// detaches the listener. All clones share one registry.
#[derive(Clone)]
pub struct MessageReceiver {
    registry: Arc<Mutex<CallbackRegistry>>,
}

impl MessageReceiver {
    pub(crate) fn new(registry: Arc<Mutex<CallbackRegistry>>) -> Self {
        Self { registry }
    }

    /// Handle one raw inbound IPC body.
    ///
    /// Anything that does not parse as an envelope is rejected here, and an
    /// envelope whose name is outside the event taxonomy is dropped without
    /// error, so unknown future message names keep older hosts working.
    pub fn accept(&self, raw: &str) {
        let Some(envelope) = Envelope::from_json(raw) else {
            warn!(body_len = raw.len(), "inbound message rejected: not an envelope");
            return;
        };
        let Some(kind) = ShowcaseEvent::from_name(&envelope.name) else {
            trace!(name = %envelope.name, "inbound message ignored: unknown name");
            return;
        };
        debug!(name = %envelope.name, "inbound message");
        self.dispatch(kind, &envelope.args);
    }

    /// Invoke every callback registered for `kind` in insertion order, each
    /// call receiving the same payload reference.
    ///
    /// The bucket is snapshotted under the lock and invoked outside it, so
    /// a callback may register further callbacks; those join the registry
    /// but do not run for the in-flight payload.
    pub(crate) fn dispatch(&self, kind: ShowcaseEvent, args: &Value) {
        let callbacks = match self.registry.lock() {
            Ok(registry) => registry.snapshot(kind),
            Err(_) => return,
        };
        for callback in callbacks {
            callback(args);
        }
    }
}
