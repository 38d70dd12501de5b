use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;

use crate::container::{ensure_mountable, resolve_slot, ContainerResolver};
use crate::errors::FrameError;
use crate::ipc::SHOWCASE_INIT_SCRIPT;
use crate::receiver::MessageReceiver;

use super::registry::CallbackRegistry;
use super::{FrameConfig, ShowcaseFrame, SurfaceHandle};

impl ShowcaseFrame<SurfaceHandle> {
    /// Mount a showcase into the container named by `selector`.
    ///
    /// Resolution and mounting happen synchronously; the returned frame is
    /// usable immediately. The embedded page keeps loading in the
    /// background: callbacks may be registered and messages sent right
    /// away, and a send racing the page load is delivered to the surface
    /// but may be dropped by the not-yet-listening page.
    pub fn mount<R: ContainerResolver>(
        resolver: &R,
        selector: &str,
        config: FrameConfig,
    ) -> Result<Self, FrameError> {
        let slot = resolve_slot(resolver, selector)?;
        Self::mount_in(slot.window, slot.bounds, config)
    }

    /// Mount a showcase directly into a region of `window`.
    pub fn mount_in<W: HasWindowHandle>(
        window: &W,
        bounds: wry::Rect,
        config: FrameConfig,
    ) -> Result<Self, FrameError> {
        ensure_mountable(window)?;

        let registry = Arc::new(Mutex::new(CallbackRegistry::new()));
        let receiver = MessageReceiver::new(Arc::clone(&registry));

        // The handler's clone is the installed subscription; it lives as
        // long as the webview, so dropping the frame detaches the listener.
        let subscription = receiver.clone();
        let webview = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_url(&config.url)
            .with_initialization_script(SHOWCASE_INIT_SCRIPT)
            .with_ipc_handler(move |request| subscription.accept(request.body()))
            .with_focused(false)
            .build_as_child(window)?;

        debug!(url = %config.url, "showcase mounted");

        Ok(Self {
            surface: SurfaceHandle::new(webview, config.url),
            registry,
            receiver,
        })
    }
}
