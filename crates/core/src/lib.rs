pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod logging;
pub mod marker;
pub mod operation;
pub mod registry;
pub mod security;
pub mod target;
pub mod writer;

pub use error::Result;
pub use generator::{Generation, GenerationContext, GenerationOutcome, ModelGenerator};
