use errors::UnknownOperatorError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

/// A caller-supplied value bound to a template variable
///
/// Values are either a single string or a sequence of strings. Sequences
/// are consumed by the list-style operators; in scalar positions they
/// render as their elements joined with `,`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    /// A scalar is empty iff zero-length; a list iff it has no elements
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Scalar(s) => s.is_empty(),
            Value::List(l) => l.is_empty(),
        }
    }

    /// Render the value in a scalar position
    pub fn flatten(&self) -> String {
        match self {
            Value::Scalar(s) => s.clone(),
            Value::List(l) => l.join(","),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(String::new())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<String>> for Value {
    fn from(l: Vec<String>) -> Self {
        Value::List(l)
    }
}

impl From<&[&str]> for Value {
    fn from(l: &[&str]) -> Self {
        Value::List(l.iter().map(|s| s.to_string()).collect())
    }
}

/// Caller-supplied bindings from variable name to value
pub type Values = HashMap<String, Value>;

/// Operator controlling how an expansion's variables combine
///
/// Syntax: `{-opname|arg|var,...}`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operator {
    Prefix,
    Suffix,
    Join,
    List,
    Opt,
    Neg,
}

impl FromStr for Operator {
    type Err = UnknownOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prefix" => Ok(Operator::Prefix),
            "suffix" => Ok(Operator::Suffix),
            "join" => Ok(Operator::Join),
            "list" => Ok(Operator::List),
            "opt" => Ok(Operator::Opt),
            "neg" => Ok(Operator::Neg),
            other => Err(UnknownOperatorError(other.to_string())),
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Operator::Prefix => "prefix",
                Operator::Suffix => "suffix",
                Operator::Join => "join",
                Operator::List => "list",
                Operator::Opt => "opt",
                Operator::Neg => "neg",
            }
        )
    }
}

/// One `{...}` marker's parsed body
///
/// `variables` keeps specification order; a name repeated in the body
/// collapses to a single entry whose default is the last one written.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Expansion {
    /// Operator name as written, `None` for plain substitution
    pub operator: Option<String>,
    pub arg: String,
    /// Variable name → default value, in specification order
    pub variables: Vec<(String, String)>,
}

impl Expansion {
    /// The variable names referenced by this expansion, in order
    pub fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Overlay supplied values on the parsed defaults
    ///
    /// Variables absent from `values` fall back to their default as a
    /// scalar. Defaults come from the template itself and are never
    /// percent-encoded.
    pub fn bind(&self, values: &Values) -> Vec<(String, Value)> {
        self.variables
            .iter()
            .map(|(name, default)| {
                let value = values
                    .get(name)
                    .cloned()
                    .unwrap_or_else(|| Value::Scalar(default.clone()));

                (name.clone(), value)
            })
            .collect()
    }
}
