//! Client credentials and the access tokens they are exchanged for.

pub mod credentials;
pub mod token;

pub use credentials::*;
pub use token::*;
