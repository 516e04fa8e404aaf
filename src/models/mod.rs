pub mod page;
pub mod token;

pub use page::*;
pub use token::*;
