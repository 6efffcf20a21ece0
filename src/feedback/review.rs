use tracing::{info, warn};

/// Store listing for the original app; the review prompt deep-links straight
/// to the reviews tab.
pub const REVIEW_URL: &str = "itms-apps://itunes.apple.com/WebObjects/MZStore.woa/wa/viewContentsUserReviews?id=1126783712&onlyLatestVersion=true&pageNumber=0&sortOrdering=1&type=Purple+Software";

/// External review surface. Fire-and-forget; no result is consumed.
pub trait ReviewPrompt: Send + Sync {
    fn open_review(&self);
}

/// Opens the deep link through the platform opener. Failure to spawn the
/// opener is logged and dropped.
pub struct DeepLinkReviewPrompt {
    url: String,
}

impl DeepLinkReviewPrompt {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for DeepLinkReviewPrompt {
    fn default() -> Self {
        Self::new(REVIEW_URL)
    }
}

impl ReviewPrompt for DeepLinkReviewPrompt {
    fn open_review(&self) {
        info!("opening review deep link");

        #[cfg(target_os = "macos")]
        let opener = "open";
        #[cfg(not(target_os = "macos"))]
        let opener = "xdg-open";

        if let Err(e) = std::process::Command::new(opener).arg(&self.url).spawn() {
            warn!("failed to open review deep link: {}", e);
        }
    }
}
