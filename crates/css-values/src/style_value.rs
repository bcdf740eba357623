//! The text contract shared by every typed CSS value.

/// A typed CSS value that carries its canonical CSS text.
///
/// The text is fixed when the value is built, so implementors store it and
/// hand out a borrowed view rather than re-rendering on every call.
pub trait StyleValue {
    /// The canonical CSS text of this value, e.g. `1px` or `scale(2, -1)`.
    fn css_string(&self) -> &str;
}
