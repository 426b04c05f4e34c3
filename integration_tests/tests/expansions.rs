use std::collections::HashMap;

use pretty_assertions::assert_eq;
use rstest::rstest;
use uritemplate::prelude::*;

fn values(pairs: &[(&str, Value)]) -> Values {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[rstest]
#[case("{x}", "v", "v")]
#[case("{x}", "hello world", "hello%20world")]
#[case("{x}", "a&b", "a%26b")]
#[case("{x}", "a|b", "a%7Cb")]
fn plain_substitution_is_encoding(#[case] template: &str, #[case] value: &str, #[case] expected: &str) {
    let template = Template::new(template);
    let values = values(&[("x", Value::from(value))]);

    assert_eq!(Ok(expected.to_string()), template.substitute(&values));
}

#[rstest]
#[case(&[], "wilma")]
#[case(&[("foo", Value::from("barney"))], "barney")]
fn default_fallback(#[case] bindings: &[(&str, Value)], #[case] expected: &str) {
    let template = Template::new("{foo=wilma}");

    assert_eq!(Ok(expected.to_string()), template.substitute(&values(bindings)));
}

#[test]
fn join_orders_alphabetically_not_by_declaration() {
    let template = Template::new("{-join|#|foo=wilma,bar=barney}");

    assert_eq!(
        Ok("bar=barney#foo=wilma".to_string()),
        template.substitute(&values(&[]))
    );
}

#[test]
fn join_skips_empty_variables_without_stray_separators() {
    let template = Template::new("{-join|/|foo,bar}");

    assert_eq!(Ok(String::new()), template.substitute(&values(&[])));
}

#[rstest]
#[case(Value::from(["10", "20", "30"].as_slice()), "10,20,30")]
#[case(Value::List(vec![]), "")]
fn list_joins_sequences(#[case] qux: Value, #[case] expected: &str) {
    let template = Template::new("{-list|,|qux}");

    assert_eq!(
        Ok(expected.to_string()),
        template.substitute(&values(&[("qux", qux)]))
    );
}

/// For any value set, exactly one of `opt`/`neg` yields the argument
#[rstest]
#[case(&[])]
#[case(&[("foo", Value::from("fred"))])]
#[case(&[("foo", Value::List(vec![]))])]
#[case(&[("foo", Value::from(["a"].as_slice()))])]
#[case(&[("bar", Value::from("a"))])]
#[case(&[("foo", Value::from("")), ("bar", Value::from(""))])]
fn opt_and_neg_are_complementary(#[case] bindings: &[(&str, Value)]) {
    let opt = Template::new("{-opt|&|foo,bar}");
    let neg = Template::new("{-neg|&|foo,bar}");
    let bindings = values(bindings);

    let opt_result = opt.substitute(&bindings).unwrap();
    let neg_result = neg.substitute(&bindings).unwrap();

    assert_eq!("&", format!("{opt_result}{neg_result}"));
}

#[test]
fn markers_concatenate_in_template_order() {
    let template = Template::new("http://example.org/{a}{b}/{a_b}");
    let values = values(&[
        ("a", Value::from("foo")),
        ("b", Value::from("bar")),
        ("a_b", Value::from("baz")),
    ]);

    assert_eq!(
        Ok("http://example.org/foobar/baz".to_string()),
        template.substitute(&values)
    );
}

/// Braces do not nest: the marker in `{{a}}` runs from the outer `{` to
/// the first `}`, naming a variable literally called `{a`
#[test]
fn nested_braces_are_not_supported() {
    let template = Template::new("{{a}}");

    assert_eq!(
        Ok("}".to_string()),
        template.substitute(&values(&[("a", Value::from("foo"))]))
    );
    assert_eq!(
        Ok("foo}".to_string()),
        template.substitute(&values(&[("{a", Value::from("foo"))]))
    );
}

/// Defaults split on the first `=` only and support no escaping of `,`
/// or `=` inside default values
#[rstest]
#[case("{foo=a=b}", "a=b")]
#[case("{foo=a,bar}", "a")]
fn default_values_have_no_escaping(#[case] template: &str, #[case] expected: &str) {
    let template = Template::new(template);

    assert_eq!(Ok(expected.to_string()), template.substitute(&values(&[])));
}

/// A malformed marker fails the whole call; well-formed markers in the
/// same template do not mask the failure
#[test]
fn malformed_expansion_fails_the_call() {
    let template = Template::new("/ok/{a}/bad/{-join|&|a|b}");

    assert_eq!(
        Err(vec![(
            UriTemplateError::ExpandError(ExpandError::MalformedExpansion { fields: 4 }),
            12..25,
        )]),
        template.substitute(&values(&[("a", Value::from("x"))]))
    );
}

#[test]
fn unrecognized_operator_is_a_silent_no_op() {
    let template = Template::new("/{-frobnicate|&|foo}/");

    assert_eq!(
        Ok("//".to_string()),
        template.substitute(&values(&[("foo", Value::from("x"))]))
    );
}

#[test]
fn variable_names_are_first_seen_order_without_duplicates() {
    let template =
        Template::new("/{-suffix|/|a}{-opt|data|points}{-neg|@|a}{-prefix|#|b}");

    assert_eq!(
        Ok(vec!["a".to_string(), "points".to_string(), "b".to_string()]),
        template.variable_names()
    );
}

#[test]
fn substitution_does_not_consume_the_template() {
    let template = Template::new("{-opt|?|q}{-join|&|q}");
    let with_query = values(&[("q", Value::from("search term"))]);

    assert_eq!(
        Ok("?q=search%20term".to_string()),
        template.substitute(&with_query)
    );
    assert_eq!(Ok(String::new()), template.substitute(&values(&[])));
    assert_eq!(
        Ok("?q=search%20term".to_string()),
        template.substitute(&with_query)
    );
}

#[test]
fn values_deserialize_from_json() {
    let values: HashMap<String, Value> = serde_json::from_str(
        r#"{"userID": "joe", "categories": ["a", "b"]}"#,
    )
    .unwrap();

    let template = Template::new("/{userID}{-opt|/-/|categories}{-list|/|categories}");

    assert_eq!(Ok("/joe/-/a/b".to_string()), template.substitute(&values));
}
