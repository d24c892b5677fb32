pub mod api;
pub mod dialog;
pub mod list;
pub mod models;
pub mod notify;

pub use api::{ApiClient, ApiError};
pub use dialog::DialogOutcome;
pub use list::aggregator::{AggregationState, ExpenseGroup, ExpenseSource, PagedGroupAggregator};
pub use list::SearchCriteria;
pub use notify::{LogNotifier, Notifier};
