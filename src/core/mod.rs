//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Run report model (ReportItem)
//! - Rendering functions for different report formats
//! - Output path helpers
//! - Input file reading
//! - Common utilities

pub mod file_reader;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
