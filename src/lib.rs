//! Site configuration for a static site build.
//!
//! The configuration is resolved once, from literal defaults and the build
//! environment, then handed to consumers by reference:
//!
//! ```rust,no_run
//! let config = siteconfig::load()?;
//! println!("{} at {}", config.title, config.url);
//! # Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use siteconfig_config::*;
pub use siteconfig_core::*;

pub use format::Format;

mod format;
