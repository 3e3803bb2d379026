pub mod add;
pub mod backup;
pub mod chart;
pub mod form;
pub mod log;
pub mod query;
pub mod repository;
pub mod reset;
pub mod timeline;
