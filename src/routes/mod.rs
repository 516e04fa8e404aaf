pub mod gallery;
pub mod routes;

pub use routes::*;
