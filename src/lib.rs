pub mod app;
pub mod qpick;
pub mod report;
