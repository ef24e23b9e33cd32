//! CLI command implementations

pub mod config;
pub mod info;
pub mod parse;
pub mod status;
pub mod write;

pub use config::execute as config;
pub use info::execute as info;
pub use parse::execute as parse;
pub use status::execute as status;
pub use write::execute as write;
