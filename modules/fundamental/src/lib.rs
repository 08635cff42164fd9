pub mod endpoints;
pub mod error;
pub mod graph;
pub mod hero;
pub mod hero_power;
pub mod openapi;
pub mod power;
pub mod serializer;
pub mod validation;

pub use endpoints::configure;
pub use error::Error;
pub use openapi::openapi;
