//! Tree formatting and display
//!
//! This module provides the two text renderings of a reconstructed tree and
//! the ways of printing them:
//!
//! # Module Structure
//!
//! - `utils` - Shared line-art drawing (connectors, continuation prefixes)
//! - `plain` - Unannotated listing, files before directories
//! - `enhanced` - Annotated listing with sizes, filters and a summary line
//! - `console` - Colored stdout output
//! - `json` - JSON output

mod console;
mod enhanced;
mod json;
mod plain;
mod utils;

pub use console::{print_rendered, write_rendered};
pub use enhanced::{EnhancedFormatter, render_enhanced};
pub use json::{JsonReport, print_json};
pub use plain::{PlainFormatter, render_plain};
pub use utils::{EMPTY_DIRECTORY, NodeLabel, connector, continuation_prefix, format_tree};
