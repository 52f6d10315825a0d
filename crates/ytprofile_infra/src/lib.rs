mod http;
mod oauth;

pub use http::*;
pub use oauth::*;
