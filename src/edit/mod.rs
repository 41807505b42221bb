//! Format-preserving config file editing.
//!
//! The config file is hand-maintained YAML full of comments and deliberate
//! formatting, so structural parse/re-serialize editing is off the table
//! (serializers drop comments and re-flow the document). This module edits
//! the file as plain lines instead: a single scan pass that suppresses the
//! entries to remove and copies every other line through byte-for-byte.
//!
//! Only one shape of edit is supported: removing an entry from a top-level
//! list section such as `sub-urls:`.

mod remover;


pub use remover::{remove_list_entry, remove_sub_url, SUB_URLS_KEY};
