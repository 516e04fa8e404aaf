pub mod dto;
pub mod gallery;
pub mod service;

pub use dto::*;
pub use gallery::*;
