mod config;
mod error;
mod field_map;
mod identity;
mod oauth_tokens;
mod playlist;
mod profile;
mod resource;
mod token;

pub use config::*;
pub use error::*;
pub use field_map::*;
pub use identity::*;
pub use oauth_tokens::*;
pub use playlist::*;
pub use profile::*;
pub use resource::*;
pub use token::*;
