pub mod cli;
pub mod files;
pub mod lint;
pub mod report;
