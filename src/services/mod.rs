pub mod explorer;
pub mod gallery;
pub mod renderer;

pub use explorer::*;
pub use gallery::*;
pub use renderer::*;
