//! Host-side bridge for embedding an Elfsquad showcase surface.
//!
//! Wraps the `wry` crate to provide:
//! - A showcase page mounted as a child webview of a host window
//! - Bidirectional relay of named `{name, args}` messages
//! - Typed registration for the showcase's inbound event set
//! - Outbound sends with configuration payload sanitization

pub mod container;
pub mod errors;
pub mod events;
pub mod frame;
pub mod ipc;
pub mod receiver;
pub mod sanitize;

pub use container::{ContainerResolver, ContainerSlot};
pub use errors::FrameError;
pub use events::ShowcaseEvent;
pub use frame::{CallbackRegistry, EventCallback, FrameConfig, ShowcaseFrame, SurfaceHandle};
pub use ipc::{Envelope, EnvelopePort};
pub use receiver::MessageReceiver;
