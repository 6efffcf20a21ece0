pub mod policy;
pub mod review;
pub mod sender;
pub mod survey;

pub use policy::{eligible, FeedbackThresholds, APP_OPEN, TIMER_RESET};
pub use review::{DeepLinkReviewPrompt, ReviewPrompt, REVIEW_URL};
pub use sender::{FeedbackSender, HttpFeedbackSender, LogFeedbackSender};
pub use survey::{Survey, SurveyEffect, SurveyInput, SurveyQuestion};
