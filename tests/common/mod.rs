//! Common test utilities for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: reference instants and calendar-step helpers

#![allow(dead_code)]

pub mod fixtures;
