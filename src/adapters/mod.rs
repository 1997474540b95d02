// Adapters layer: concrete implementations of the domain ports (document page, http content).

pub mod dom_page;
pub mod http;

pub use dom_page::roles;
pub use http::HttpContentSource;
