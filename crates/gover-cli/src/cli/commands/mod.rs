//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod checksum;
mod update;

pub use check::run_check;
pub use checksum::run_checksum;
pub use update::run_update;
