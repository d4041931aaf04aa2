use crate::span::{Bytes, Location, Span};

/// An error that can be traced back to a range of the source text.
pub trait PositionalError {
    fn range(&self) -> Span;
    fn location(&self) -> Location;
    fn describe(&self) -> String;

    fn length(&self) -> Bytes {
        self.range().length()
    }
}
