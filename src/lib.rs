pub mod baseconv;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod poly;
pub mod rational;
pub mod recon;

pub use crate::error::Error;
