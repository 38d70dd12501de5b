use wry::WebView;

use crate::errors::FrameError;
use crate::ipc::{js_post_envelope, Envelope, EnvelopePort};

/// Handle to the mounted showcase surface.
///
/// Read-only exposure of the embedded webview, plus the controls a host
/// needs to keep a child surface placed correctly as its layout changes.
pub struct SurfaceHandle {
    webview: WebView,
    current_url: String,
}

impl SurfaceHandle {
    pub(super) fn new(webview: WebView, url: String) -> Self {
        Self {
            webview,
            current_url: url,
        }
    }

    /// Address the surface was mounted with.
    pub fn url(&self) -> &str {
        &self.current_url
    }

    /// Set the surface bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the surface.
    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    /// The underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl EnvelopePort for SurfaceHandle {
    fn post(&self, envelope: &Envelope) -> Result<(), FrameError> {
        let script = js_post_envelope(envelope);
        self.webview
            .evaluate_script(&script)
            .map_err(|e| FrameError::NoChannel(e.to_string()))
    }
}
