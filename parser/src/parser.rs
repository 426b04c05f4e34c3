use errors::ExpandError;
use types::Expansion;

/// Parse one expansion marker body in to an [Expansion]
///
/// The body is the marker content with the enclosing braces stripped.
/// Grammar: `-opname|arg|var,...` or a bare variable list. A body with a
/// `|` that does not split in to exactly three fields is malformed and
/// fails with [ExpandError::MalformedExpansion].
pub fn parse(body: &str) -> Result<Expansion, ExpandError> {
    let (operator, arg, vars_part) = if body.contains('|') {
        let fields: Vec<&str> = body.split('|').collect();

        match fields.as_slice() {
            [op, arg, vars] => (strip_operator_marker(op), *arg, *vars),
            _ => {
                return Err(ExpandError::MalformedExpansion {
                    fields: fields.len(),
                })
            }
        }
    } else {
        ("", "", body)
    };

    let mut variables: Vec<(String, String)> = vec![];

    for spec in vars_part.split(',') {
        // `name=default`, split on the first `=` only; later `=` belong
        // to the default value
        let (name, default) = match spec.split_once('=') {
            Some((name, default)) => (name, default),
            None => (spec, ""),
        };

        // a repeated name collapses to one entry, last default wins
        match variables.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = default.to_string(),
            None => variables.push((name.to_string(), default.to_string())),
        }
    }

    Ok(Expansion {
        operator: Some(operator.to_string()).filter(|op| !op.is_empty()),
        arg: arg.to_string(),
        variables,
    })
}

/// The grammar writes operators as `-name`; drop the leading marker
/// character, whatever it is
fn strip_operator_marker(op: &str) -> &str {
    let mut chars = op.chars();
    chars.next();
    chars.as_str()
}
