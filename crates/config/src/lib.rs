mod config;
mod search;

pub mod vars;

pub use self::config::*;
pub use self::search::*;
