/// Options for mounting a showcase frame.
///
/// The container itself is passed to [`mount`](super::ShowcaseFrame::mount)
/// or [`mount_in`](super::ShowcaseFrame::mount_in) alongside these options.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Address of the showcase page to embed.
    pub url: String,
}

impl FrameConfig {
    /// Config that loads the showcase at `url`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
