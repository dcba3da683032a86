mod info;
mod report;

pub use info::info;
pub use report::{report, ReportOptions};
