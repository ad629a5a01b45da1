//! Route-level pages. Each page subscribes to the language signal (if the
//! platform provides one) so it re-renders on locale changes.

mod dashboard;
pub use dashboard::Dashboard;

mod jobs;
pub use jobs::Jobs;

mod partners;
pub use partners::Partners;

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
