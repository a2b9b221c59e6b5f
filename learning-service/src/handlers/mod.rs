//! HTTP handlers for the learning service.

pub mod app;
pub mod extract;
pub mod generate;
