//! Command implementations for rulesync-cli

pub mod clean;
pub mod completions;
pub mod init;
pub mod list;
pub mod merge;
pub mod sync;

pub use clean::run_clean;
pub use completions::run_completions;
pub use init::run_init;
pub use list::run_list;
pub use merge::run_merge;
pub use sync::run_sync;
