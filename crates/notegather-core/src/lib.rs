//! Notegather Core Library
//!
//! Collects a bounded, ordered set of related notes from a markdown vault
//! and concatenates them into one text blob. Notes are found either by
//! following links outward from a root note or by recent activity.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod graph;
pub mod journal;
pub mod links;
pub mod logging;
pub mod note;
pub mod recent;
pub mod sanitize;
pub mod vault;
