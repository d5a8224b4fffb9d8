pub mod config;
pub mod fixture;
pub mod form;

pub use config::*;
pub use fixture::*;
pub use form::*;
