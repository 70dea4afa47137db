//! CLI commands

mod stamp;

pub use stamp::StampCommand;
