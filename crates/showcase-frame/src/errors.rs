//! Error types for frame construction and message delivery.

/// Errors raised by [`ShowcaseFrame`](crate::ShowcaseFrame) operations.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The container selector resolved to nothing, or the resolved target
    /// cannot host a child surface. Raised synchronously while mounting.
    #[error("container resolution failed: {0}")]
    ContainerResolution(String),

    /// The embedded surface's inbound channel is unavailable. Raised per
    /// send; the callback registry is unaffected.
    #[error("showcase channel unavailable: {0}")]
    NoChannel(String),

    /// The underlying webview could not be created.
    #[error("surface error: {0}")]
    Surface(#[from] wry::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_resolution_display() {
        let err = FrameError::ContainerResolution("no container matches selector '#left'".into());
        assert_eq!(
            err.to_string(),
            "container resolution failed: no container matches selector '#left'"
        );
    }

    #[test]
    fn no_channel_display() {
        let err = FrameError::NoChannel("surface detached".into());
        assert_eq!(
            err.to_string(),
            "showcase channel unavailable: surface detached"
        );
    }
}
