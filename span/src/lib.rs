use std::ops::Range;

/// A pair of T and the byte range it covers in the template string
pub type Spanned<T> = (T, Span);

/// A byte range locating an expansion marker in the template string
///
/// Spans cover the whole marker, braces included.
pub type Span = Range<usize>;
