//! Per-view aggregations over the daily table.
//!
//! Every function here is pure: it borrows the loaded rows and returns a new
//! summary, leaving the table untouched.

pub mod demand;
pub mod overview;
pub mod types;
pub mod user_pattern;
pub mod utility;
pub mod weather;

pub use demand::demand;
pub use overview::overview;
pub use types::Summary;
pub use user_pattern::user_pattern;
pub use weather::weather;
