use std::fmt::Display;

use errors::UriTemplateError;
use span::Spanned;
use types::Values;

use crate::expander::{expand, expand_raw};

/// An immutable URI template
///
/// Construction performs no validation; malformed markers surface when
/// [substitute](Template::substitute) is called. One template is reusable
/// across any number of substitutions, concurrently if needed, because
/// the value set is threaded through as a parameter and no call mutates
/// the template.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    template: String,
}

impl Template {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Substitute every expansion marker with the supplied values
    ///
    /// Values are percent-encoded per RFC 3986 before any operator logic
    /// runs. Fails if any marker is malformed, reporting every offender
    /// with its byte span.
    pub fn substitute(&self, values: &Values) -> Result<String, Vec<Spanned<UriTemplateError>>> {
        expand(&self.template, values)
    }

    /// Substitute with the supplied values taken verbatim
    ///
    /// Identical to [substitute](Template::substitute) except supplied
    /// values are not percent-encoded.
    pub fn substitute_raw(
        &self,
        values: &Values,
    ) -> Result<String, Vec<Spanned<UriTemplateError>>> {
        expand_raw(&self.template, values)
    }

    /// The variable names referenced across all markers
    ///
    /// First-seen order, left to right, duplicates removed. A name
    /// repeated in a later marker keeps its first position.
    pub fn variable_names(&self) -> Result<Vec<String>, Vec<Spanned<UriTemplateError>>> {
        let mut names: Vec<String> = vec![];
        let mut expand_errors: Vec<Spanned<UriTemplateError>> = vec![];

        for (expansion, span) in crate::expander::expansions(&self.template) {
            match expansion {
                Ok(expansion) => {
                    for name in expansion.variable_names() {
                        if !names.contains(&name) {
                            names.push(name);
                        }
                    }
                }
                Err(e) => expand_errors.push((e.into(), span)),
            }
        }

        if !expand_errors.is_empty() {
            return Err(expand_errors);
        }

        Ok(names)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.template)
    }
}
