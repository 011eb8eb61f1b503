//! High-level API: the [`GifDitherer`] builder and [`DitherError`].

mod builder;
mod error;

pub use builder::GifDitherer;
pub use error::DitherError;
