pub mod record;
pub mod timeline_row;

pub use record::{COLUMNS, EventRecord, Table};
pub use timeline_row::TimelineRow;
