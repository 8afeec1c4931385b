pub mod elements;
pub mod message;
pub mod source;

/// The namespace canonical names are qualified with, unless configured
/// otherwise.
pub const DEFAULT_NAMESPACE: &str = "typing";
