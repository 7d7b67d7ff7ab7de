//! Application services - Use case implementations

mod command_dispatcher;
pub mod report_formatter;

pub use command_dispatcher::{CommandDispatcher, DispatchSummary, DispatcherConfig};
pub use report_formatter::{DEFAULT_ICON_URL, ReportFormatter};
