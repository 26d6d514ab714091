//! Front ends for nlsh: the interactive console, the HTTP terminal, and a
//! one-shot `interpret` report.

pub mod cli;
pub mod config;
pub mod http;
mod interpret;
pub mod logging;
pub mod repl;

pub use interpret::InterpretReport;
pub use interpret::interpret_report;
