//! Container resolution: turning a host-side selector into a mount target.
//!
//! The host owns the mapping from selector strings to window regions (named
//! panes, layout slots); the bridge only consumes it while mounting.

use wry::raw_window_handle::HasWindowHandle;

use crate::errors::FrameError;

/// A resolved container: the window to mount into and the region the
/// surface occupies within it.
pub struct ContainerSlot<'a, W> {
    pub window: &'a W,
    pub bounds: wry::Rect,
}

/// Host-side lookup from a container selector to a mountable slot.
pub trait ContainerResolver {
    type Target: HasWindowHandle;

    /// Resolve `selector`, or `None` when no container matches.
    fn resolve(&self, selector: &str) -> Option<ContainerSlot<'_, Self::Target>>;
}

/// Resolve `selector` and verify the result can host a child surface.
pub(crate) fn resolve_slot<'r, R: ContainerResolver>(
    resolver: &'r R,
    selector: &str,
) -> Result<ContainerSlot<'r, R::Target>, FrameError> {
    let slot = resolver.resolve(selector).ok_or_else(|| {
        FrameError::ContainerResolution(format!("no container matches selector '{selector}'"))
    })?;
    ensure_mountable(slot.window)?;
    Ok(slot)
}

/// Verify that `window` exposes a live window handle.
pub(crate) fn ensure_mountable<W: HasWindowHandle>(window: &W) -> Result<(), FrameError> {
    window
        .window_handle()
        .map(|_| ())
        .map_err(|e| FrameError::ContainerResolution(format!("target is not mountable: {e}")))
}
