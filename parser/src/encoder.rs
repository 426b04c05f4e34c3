use types::{Value, Values};

/// Percent-encode a single value per RFC 3986
///
/// Unreserved characters (`A-Z a-z 0-9 - _ . ~`) pass through, everything
/// else becomes `%XX` with uppercase hex. List elements are encoded
/// independently.
pub fn encode(value: &Value) -> Value {
    match value {
        Value::Scalar(s) => Value::Scalar(urlencoding::encode(s).into_owned()),
        Value::List(l) => Value::List(
            l.iter()
                .map(|element| urlencoding::encode(element).into_owned())
                .collect(),
        ),
    }
}

/// Percent-encode every supplied value before any operator logic runs
///
/// Only caller-supplied values are encoded. Operator arguments and
/// variable defaults come from the template itself and are substituted
/// verbatim.
pub fn encode_values(values: &Values) -> Values {
    values
        .iter()
        .map(|(name, value)| (name.clone(), encode(value)))
        .collect()
}
