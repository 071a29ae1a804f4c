pub mod math;
pub mod report;
