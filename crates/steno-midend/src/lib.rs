mod error;
mod normalize;

pub use error::ConversionError;
pub use normalize::{normalize, Normalizer};
