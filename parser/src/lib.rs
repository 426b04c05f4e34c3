pub use expander::expand;
pub use expander::expand_raw;
pub use parser::parse;
pub use template::Template;

pub mod encoder;
pub mod expander;
pub mod parser;
pub mod template;
