use errors::{ExpandError, UriTemplateError};
use once_cell::sync::Lazy;
use regex::Regex;
use span::{Span, Spanned};
use types::{Expansion, Operator, Value, Values};

use crate::encoder::encode_values;
use crate::parser::parse;

/// An expansion marker: a `{`, one or more non-`}` characters, and the
/// first `}` after them
///
/// Braces do not nest; a second `{` inside the body is body text. In
/// `{{a}}` the marker is `{{a}` and the trailing `}` is a literal.
static MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]+\}").expect("marker pattern is valid"));

/// Expand every marker in `template`, percent-encoding supplied values
pub fn expand(
    template: &str,
    values: &Values,
) -> Result<String, Vec<Spanned<UriTemplateError>>> {
    expand_encoded(template, &encode_values(values))
}

/// Expand every marker in `template` with the supplied values taken
/// verbatim, without percent-encoding
pub fn expand_raw(
    template: &str,
    values: &Values,
) -> Result<String, Vec<Spanned<UriTemplateError>>> {
    expand_encoded(template, values)
}

/// Parse every marker in `template` in document order, with each
/// marker's byte span
pub fn expansions(
    template: &str,
) -> impl Iterator<Item = (Result<Expansion, ExpandError>, Span)> + '_ {
    MARKER_PATTERN.find_iter(template).map(|marker| {
        let body = &template[marker.start() + 1..marker.end() - 1];

        (parse(body), marker.range())
    })
}

fn expand_encoded(
    template: &str,
    values: &Values,
) -> Result<String, Vec<Spanned<UriTemplateError>>> {
    let mut expand_errors: Vec<Spanned<UriTemplateError>> = vec![];

    let mut output = String::with_capacity(template.len());
    let mut literal_start = 0;

    for marker in MARKER_PATTERN.find_iter(template) {
        output.push_str(&template[literal_start..marker.start()]);
        literal_start = marker.end();

        // marker body without the enclosing braces
        let body = &template[marker.start() + 1..marker.end() - 1];

        match parse(body) {
            Ok(expansion) => output.push_str(&replace_marker(&expansion, values)),
            Err(e) => expand_errors.push((e.into(), marker.range())),
        }
    }

    output.push_str(&template[literal_start..]);

    if !expand_errors.is_empty() {
        return Err(expand_errors);
    }

    Ok(output)
}

/// Compute one marker's replacement text
///
/// Replacement text is never re-scanned for markers.
fn replace_marker(expansion: &Expansion, values: &Values) -> String {
    let vars = expansion.bind(values);

    match &expansion.operator {
        None => vars
            .first()
            .map(|(_, value)| value.flatten())
            .unwrap_or_default(),
        Some(name) => match name.parse::<Operator>() {
            Ok(operator) => apply_operator(operator, &vars, &expansion.arg),
            // future operators expand to nothing
            Err(_) => String::new(),
        },
    }
}

fn apply_operator(operator: Operator, vars: &[(String, Value)], arg: &str) -> String {
    match operator {
        Operator::Prefix => operation_prefix(vars, arg),
        Operator::Suffix => operation_suffix(vars, arg),
        Operator::Join => operation_join(vars, arg),
        Operator::List => operation_list(vars, arg),
        Operator::Opt => operation_opt(vars, arg),
        Operator::Neg => operation_neg(vars, arg),
    }
}

/// First variable's value with list elements joined by `arg`
fn first_value_joined(vars: &[(String, Value)], arg: &str) -> String {
    match vars.first() {
        Some((_, Value::Scalar(s))) => s.clone(),
        Some((_, Value::List(l))) => l.join(arg),
        None => String::new(),
    }
}

/// `prefix`: prepend `arg` to the first variable's value, or nothing if
/// the value is empty
fn operation_prefix(vars: &[(String, Value)], arg: &str) -> String {
    match first_value_joined(vars, arg) {
        joined if joined.is_empty() => String::new(),
        joined => format!("{arg}{joined}"),
    }
}

/// `suffix`: append `arg` to the first variable's value, or nothing if
/// the value is empty
fn operation_suffix(vars: &[(String, Value)], arg: &str) -> String {
    match first_value_joined(vars, arg) {
        joined if joined.is_empty() => String::new(),
        joined => format!("{joined}{arg}"),
    }
}

/// `join`: emit `name=value` for every non-empty variable, sorted by
/// name ascending, concatenated with `arg`
fn operation_join(vars: &[(String, Value)], arg: &str) -> String {
    let mut pairs: Vec<&(String, Value)> =
        vars.iter().filter(|(_, value)| !value.is_empty()).collect();

    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    pairs
        .iter()
        .map(|(name, value)| format!("{name}={}", value.flatten()))
        .collect::<Vec<String>>()
        .join(arg)
}

/// `list`: join the first variable's elements with `arg`; scalars yield
/// nothing
fn operation_list(vars: &[(String, Value)], arg: &str) -> String {
    match vars.first() {
        Some((_, Value::List(l))) => l.join(arg),
        _ => String::new(),
    }
}

/// `opt`: `arg` if any variable is non-empty, nothing otherwise
fn operation_opt(vars: &[(String, Value)], arg: &str) -> String {
    if vars.iter().any(|(_, value)| !value.is_empty()) {
        arg.to_string()
    } else {
        String::new()
    }
}

/// `neg`: `arg` if all variables are empty, nothing otherwise
fn operation_neg(vars: &[(String, Value)], arg: &str) -> String {
    if vars.iter().all(|(_, value)| value.is_empty()) {
        arg.to_string()
    } else {
        String::new()
    }
}
