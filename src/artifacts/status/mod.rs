pub mod report;

pub use report::StatusReport;
