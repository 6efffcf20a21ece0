pub mod coordinator;
pub mod dialogs;
pub mod pages;
pub mod paging;


pub use coordinator::Coordinator;
pub use dialogs::{DialogHost, SurveyDriver};
pub use pages::{HistoryEvent, HistoryPage, TimerEvent, TimerPage};
pub use paging::{PagedSurface, PageIndex};
