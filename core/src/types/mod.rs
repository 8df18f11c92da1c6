//! Shared value types and settings.

pub mod config;
