//! Transformation module.
//!
//! This module handles spell CSV to JSON transformation:
//! - Title case: Text normalization for spell fields
//! - Mapper: Raw rows to spell records
//! - Pipeline: Main conversion pipeline

pub mod mapper;
pub mod pipeline;
pub mod title_case;

pub use mapper::{map_row, Normalization};
pub use pipeline::*;
pub use title_case::title_case;
