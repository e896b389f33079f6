// ABOUTME: Template rendering module for zpodgen
// ABOUTME: Provides the Handlebars engine and built-in helper functions

pub mod engine;
pub mod error;
pub mod helpers;

pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
