//! ack-core - Core library for review-ack
//!
//! This crate provides the comment reconciliation logic: classifying review
//! comments as addressed or pending, building status-marked bodies, selecting
//! and applying updates, and rendering status reports.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod store;
pub mod batch;
pub mod report;

pub use error::{AckError, Result};
pub use types::*;
