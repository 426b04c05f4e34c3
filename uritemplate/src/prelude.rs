pub use crate::Template;
pub use errors::{ExpandError, UnknownOperatorError, UriTemplateError};
pub use span::{Span, Spanned};
pub use types::{Expansion, Operator, Value, Values};
