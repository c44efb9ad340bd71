pub mod formatter;
pub mod reporter;

pub use reporter::{MessageTransport, deliver_report, send_report};
