pub use errors::ExpandError;
pub use errors::UnknownOperatorError;
pub use errors::UriTemplateError;
pub use parser::Template;
pub use parser::expand;
pub use parser::expand_raw;
pub use parser::parse;
pub use span::*;
pub use types::*;

pub mod prelude;
