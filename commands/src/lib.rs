//! Commands behind the nlsh prompt.
//!
//! [`Shell`] is the session both front ends drive: it resolves a line into
//! [`Invocation`](nlsh_interpreter::Invocation)s and runs them against the
//! real filesystem and process table.

mod dispatch;
mod error;
pub mod fs;
mod literal;
pub mod monitor;
mod shell;
pub mod system;

pub use dispatch::CommandOutcome;
pub use dispatch::execute;
pub use error::FsError;
pub use error::Result;
pub use literal::parse_literal;
pub use shell::Resolution;
pub use shell::Shell;
pub use shell::ShellSettings;
