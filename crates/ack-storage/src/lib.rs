//! ack-storage - Storage library for review-ack
//!
//! This crate reads the cached JSON export of review comments and writes
//! updated bodies back to it.

pub mod comment_file;

pub use comment_file::CommentFile;
