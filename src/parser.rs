use crate::{Error, Matrix, Result};
use nom::{
    character::complete::{digit1, multispace0},
    combinator::map_res,
    sequence::preceded,
    IResult,
};
use std::path::Path;

/// Pattern and target graph read from one instance file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub pattern: Matrix,
    pub target: Matrix,
}

/// Parse a single unsigned integer, skipping any leading whitespace or newlines
fn parse_usize(input: &str) -> IResult<&str, usize> {
    preceded(multispace0, map_res(digit1, |s: &str| s.parse::<usize>()))(input)
}

/// Parse a vertex count followed by n×n row-major weights.
///
/// The matrix is labelled in diagnostics so a failed read names the graph and
/// the entry that could not be read.
fn parse_matrix<'a>(input: &'a str, label: &str) -> Result<(&'a str, Matrix)> {
    let (mut remaining, n) = parse_usize(input)
        .map_err(|_| Error::parse(format!("could not read size of {} graph", label)))?;

    let mut matrix = Matrix::new(n);
    for i in 0..n {
        for j in 0..n {
            let (rest, weight) = parse_usize(remaining).map_err(|_| {
                Error::parse(format!(
                    "could not read {} matrix element ({}, {})",
                    label, i, j
                ))
            })?;
            matrix[(i, j)] = weight;
            remaining = rest;
        }
    }

    Ok((remaining, matrix))
}

/// Parse a pattern graph followed by a target graph.
///
/// Whitespace is the only separator, so row breaks are optional. Anything after
/// the target matrix is ignored.
pub fn parse_instance(input: &str) -> Result<Instance> {
    let (input, pattern) = parse_matrix(input, "first")?;
    let (_, target) = parse_matrix(input, "second")?;
    Ok(Instance { pattern, target })
}

/// Parse input file containing two graph descriptions
pub fn parse_input_file(path: &Path) -> Result<Instance> {
    let content = std::fs::read_to_string(path)?;
    parse_instance(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_instance() {
        let input = "2\n0 1\n1 0\n3\n0 2 0\n2 0 0\n0 0 0\n";
        let instance = parse_instance(input).unwrap();
        assert_eq!(instance.pattern.size(), 2);
        assert_eq!(instance.pattern.get(1, 0), 1);
        assert_eq!(instance.target.size(), 3);
        assert_eq!(instance.target.get(0, 1), 2);
    }

    #[test]
    fn test_layout_is_free_form() {
        let compact = parse_instance("1 7 2 0 1 2 0").unwrap();
        let spread = parse_instance("\r\n1\n\n7\n2\n0   1\r\n\t2 0\n").unwrap();
        assert_eq!(compact, spread);
        assert_eq!(compact.pattern.get(0, 0), 7);
    }

    #[test]
    fn test_short_input_names_missing_element() {
        let err = parse_instance("2\n0 1\n1 0\n2\n0 1\n1").unwrap_err();
        match err {
            Error::Parse(msg) => assert!(msg.contains("second matrix element (1, 1)"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_and_negative() {
        let err = parse_instance("2\n0 x\n1 0\n").unwrap_err();
        assert!(matches!(&err, Error::Parse(msg) if msg.contains("first matrix element (0, 1)")));
        assert!(parse_instance("1\n-3\n1\n0\n").is_err());
    }

    #[test]
    fn test_missing_size() {
        let err = parse_instance("1\n0\n").unwrap_err();
        assert!(matches!(&err, Error::Parse(msg) if msg.contains("size of second graph")));
    }
}
