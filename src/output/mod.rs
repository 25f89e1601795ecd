//! Console tables and the CSV results report

pub mod report;
pub mod table;
