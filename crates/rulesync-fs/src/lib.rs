//! Filesystem layer for rulesync
//!
//! Provides the directory-copy primitives the sync engine is built on, plus
//! atomic file writes for durable state.

pub mod copy;
pub mod error;
pub mod io;

pub use copy::{
    FileEntry, copy_dir, dir_exists, ensure_dir, has_rule_files, list_dir, remove_dir_all,
};
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_text};
