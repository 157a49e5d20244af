pub mod form;
pub mod pointer;

pub use form::*;
pub use pointer::*;
