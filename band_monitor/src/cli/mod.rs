pub mod clear;
pub mod history;
pub mod info;
pub mod log;
