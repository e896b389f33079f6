// ABOUTME: Template context construction from inventory records
// ABOUTME: Provides CIDR derivation, shortcut indexing, and namespace assembly

pub mod assembler;
pub mod error;
pub mod network;
pub mod shortcuts;

pub use assembler::{Assembler, MgmtNetwork, TemplateContext};
pub use error::{ContextError, Result};
pub use network::{derive, DerivedNetwork};
pub use shortcuts::{index_components, index_settings, sanitize_name};
