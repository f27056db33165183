pub mod record;
pub mod report;
pub mod rules;

pub use record::{compute_duration, AttendanceRecord};
pub use report::{classify_batch, AttendanceReport};
pub use rules::RuleTable;
