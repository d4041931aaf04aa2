//! Contains the [`Bytes`], [`Span`] and [`Location`] types, which describe source code positions.
use std::{
    fmt::{self, Debug, Display},
    ops::{Add, AddAssign, Sub},
};

/// A byte offset into the source text.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bytes(usize);
impl Bytes {
    pub fn new(pos: usize) -> Self {
        Self(pos)
    }
}
impl Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<Bytes> for usize {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
impl AddAssign<usize> for Bytes {
    fn add_assign(&mut self, rhs: usize) {
        *self = Self(self.0 + rhs)
    }
}
impl Add<usize> for Bytes {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs)
    }
}
impl Sub<Bytes> for Bytes {
    type Output = Self;

    fn sub(self, rhs: Bytes) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// A half-open byte range `start..end` in the source text.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: Bytes,
    end: Bytes,
}
impl Span {
    pub fn new(start: Bytes, end: Bytes) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> Bytes {
        self.end - self.start
    }

    pub fn start(&self) -> Bytes {
        self.start
    }

    pub fn end(&self) -> Bytes {
        self.end
    }

    pub fn lookup<'t>(&self, target: &'t str) -> &'t str {
        &target[self.start.into()..self.end.into()]
    }
}

impl Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A human-facing position: 1-based line and column, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}
impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
impl Default for Location {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_lookup_slices_source() {
        let span = Span::new(Bytes::new(2), Bytes::new(5));

        assert_eq!(span.lookup("a bcd e"), "bcd");
        assert_eq!(span.length(), Bytes::new(3));
    }

    #[test]
    fn location_displays_as_line_and_column() {
        assert_eq!(Location::new(3, 14).to_string(), "3:14");
    }
}
