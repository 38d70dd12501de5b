//! Bridge Frame: lifecycle owner of the embedded surface and the single
//! point of registration, dispatch, and send.

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::debug;

use crate::errors::FrameError;
use crate::events::{ShowcaseEvent, CONFIGURATION_UPDATED, STEP_CHANGED};
use crate::ipc::{Envelope, EnvelopePort};
use crate::receiver::MessageReceiver;
use crate::sanitize::strip_owner_ref;

mod handle;
mod lifecycle;
mod registry;
mod types;

pub use handle::SurfaceHandle;
pub use registry::{CallbackRegistry, EventCallback};
pub use types::FrameConfig;

/// Host-side frame around one embedded showcase surface.
///
/// The frame owns the surface, the container it was mounted in, and the
/// callback registry, all fixed at construction. It is generic over the
/// surface's envelope port so hosts can supply a custom transport;
/// production frames mount a [`SurfaceHandle`].
pub struct ShowcaseFrame<S = SurfaceHandle> {
    surface: S,
    registry: Arc<Mutex<CallbackRegistry>>,
    receiver: MessageReceiver,
}

impl<S: EnvelopePort> ShowcaseFrame<S> {
    /// Wrap an already-created surface.
    ///
    /// The frame starts active with an empty registry. Wire a clone of
    /// [`Self::receiver`] into the surface's inbound channel to complete
    /// the duplex; [`mount`](ShowcaseFrame::mount) does this automatically.
    pub fn with_surface(surface: S) -> Self {
        let registry = Arc::new(Mutex::new(CallbackRegistry::new()));
        let receiver = MessageReceiver::new(Arc::clone(&registry));
        Self {
            surface,
            registry,
            receiver,
        }
    }

    /// The receiver bound to this frame's registry.
    ///
    /// Clones stay attached to the same registry; the clone installed on
    /// the surface's channel is the live subscription.
    pub fn receiver(&self) -> &MessageReceiver {
        &self.receiver
    }

    /// The owned surface handle.
    pub fn handle(&self) -> &S {
        &self.surface
    }

    fn register(&self, kind: ShowcaseEvent, callback: impl Fn(&Value) + Send + Sync + 'static) {
        if let Ok(mut registry) = self.registry.lock() {
            registry.register(kind, Arc::new(callback));
        }
    }

    /// The showcase asked the host to recalculate and resend the
    /// configuration state.
    pub fn on_trigger_configuration_update(
        &self,
        callback: impl Fn(&Value) + Send + Sync + 'static,
    ) {
        self.register(ShowcaseEvent::TriggerConfigurationUpdate, callback);
    }

    /// A single requirement changed inside the showcase.
    pub fn on_update_requirement(&self, callback: impl Fn(&Value) + Send + Sync + 'static) {
        self.register(ShowcaseEvent::UpdateRequirement, callback);
    }

    /// A batch of requirements changed inside the showcase.
    pub fn on_update_requirements(&self, callback: impl Fn(&Value) + Send + Sync + 'static) {
        self.register(ShowcaseEvent::UpdateRequirements, callback);
    }

    pub fn on_update_image_value(&self, callback: impl Fn(&Value) + Send + Sync + 'static) {
        self.register(ShowcaseEvent::UpdateImageValue, callback);
    }

    pub fn on_update_text_value(&self, callback: impl Fn(&Value) + Send + Sync + 'static) {
        self.register(ShowcaseEvent::UpdateTextValue, callback);
    }

    /// The cardinality of a linked configuration changed.
    pub fn on_update_linked_configuration_cardinality(
        &self,
        callback: impl Fn(&Value) + Send + Sync + 'static,
    ) {
        self.register(ShowcaseEvent::UpdateLinkedConfigurationCardinality, callback);
    }

    /// A linked configuration was removed.
    pub fn on_remove_linked_configuration(
        &self,
        callback: impl Fn(&Value) + Send + Sync + 'static,
    ) {
        self.register(ShowcaseEvent::RemoveLinkedConfiguration, callback);
    }

    /// A drag interaction started on the showcase surface.
    pub fn on_drag_started(&self, callback: impl Fn(&Value) + Send + Sync + 'static) {
        self.register(ShowcaseEvent::DragStarted, callback);
    }

    /// Send the full configuration state to the showcase.
    ///
    /// The configurator back-reference is stripped from a copy of the
    /// payload before the envelope is built; the caller's value is left
    /// untouched.
    pub fn send_configuration_updated(&self, configuration: &Value) -> Result<(), FrameError> {
        self.send(CONFIGURATION_UPDATED, strip_owner_ref(configuration))
    }

    /// Send the active configuration step descriptor to the showcase.
    pub fn send_step_changed(&self, step: &Value) -> Result<(), FrameError> {
        self.send(STEP_CHANGED, step.clone())
    }

    fn send(&self, name: &str, args: Value) -> Result<(), FrameError> {
        debug!(name = %name, "outbound message");
        self.surface.post(&Envelope::new(name, args))
    }
}
