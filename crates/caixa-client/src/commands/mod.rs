pub mod month;
pub mod months;
pub mod report;
