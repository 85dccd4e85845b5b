pub mod stage1_normalize;
pub mod stage2_aggregate;
pub mod stage3_report;

pub use stage1_normalize::normalize;
pub use stage2_aggregate::aggregate;
pub use stage3_report::write_reports;
