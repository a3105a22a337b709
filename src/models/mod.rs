// Data models for mcp-deepl
// Author: kelexine (https://github.com/kelexine)

pub mod deepl;
pub mod params;
pub mod results;

pub use params::*;
pub use results::*;
