//! Service modules for business logic

pub mod build_processor;
pub mod demo;

pub use build_processor::BuildProcessor;
pub use demo::{DemoOutcome, DemoRunner, DemoState};
