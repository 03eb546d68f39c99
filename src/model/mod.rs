//! # Student Record Model
//!
//! The record shape accepted at the HTTP boundary and the filter
//! vocabulary shared by the REST layer and the store adapters.

pub mod filter;
pub mod student;

pub use filter::StudentFilter;
pub use student::{Address, Student};
