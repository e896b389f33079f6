// ABOUTME: Main library module for the zpodgen artifact generator
// ABOUTME: Exports all core modules and provides the public API

pub mod api;
pub mod cli;
pub mod context;
pub mod model;
pub mod template;

// Re-export commonly used types
pub use api::ApiClient;
pub use cli::{App, Args, Config};
pub use context::{Assembler, MgmtNetwork, TemplateContext};
pub use model::{Component, DnsRecord, Network, Setting, Zpod};
pub use template::TemplateEngine;

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
