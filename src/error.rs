pub use transform::{ArgumentError, SyntaxError, TypedOmError};

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, TypedOmError>;
