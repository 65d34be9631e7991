//! Message template parser using winnow.
//!
//! Handles the action subset message catalogs use:
//! - Literal text, copied verbatim (a lone `{` or `}` is literal)
//! - Field actions: `{{.Count}}`, `{{ .User.Name }}`, `{{.}}`
//! - Comments: `{{/* translator note */}}`
//!
//! Everything after an opening `{{` is committed: any other action is an
//! error rather than literal text.

use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{rest, take_until, take_while};

use super::ast::{CompiledTemplate, FieldPath, Segment};
use super::error::{ParseError, calculate_position};

/// Parse a template source into an AST.
pub fn parse_template(input: &str) -> Result<CompiledTemplate, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(segments) => Ok(CompiledTemplate { segments }),
        Err(_) => {
            let (line, column) = calculate_position(input, remaining);
            if !remaining.contains("}}") {
                return Err(ParseError::UnexpectedEof { line, column });
            }
            Err(ParseError::Syntax {
                line,
                column,
                message: format!(
                    "unexpected character in action: '{}'",
                    remaining.chars().next().unwrap_or('?')
                ),
            })
        }
    }
}

/// Parse a complete template into segments, dropping comments.
fn template(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let segments: Vec<Option<Segment>> = repeat(0.., alt((action, literal))).parse_next(input)?;
    Ok(merge_literals(segments.into_iter().flatten()))
}

/// Merge literals that were separated by a dropped comment.
fn merge_literals(segments: impl Iterator<Item = Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            field @ Segment::Field(_) => result.push(field),
        }
    }
    result
}

/// Literal text up to the next `{{` or the end of input.
fn literal(input: &mut &str) -> ModalResult<Option<Segment>> {
    alt((
        take_until(1.., "{{"),
        rest.verify(|text: &str| !text.is_empty()),
    ))
    .map(|text: &str| Some(Segment::Literal(text.to_string())))
    .parse_next(input)
}

/// Parse an action: `{{` ws (comment | field) ws `}}`. Comments yield `None`.
fn action(input: &mut &str) -> ModalResult<Option<Segment>> {
    preceded(
        "{{",
        cut_err(terminated(
            delimited(ws, alt((comment.value(None), field.map(Some))), ws),
            "}}",
        )),
    )
    .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse a comment: `/*` ... `*/`.
fn comment(input: &mut &str) -> ModalResult<()> {
    delimited("/*", take_until(0.., "*/"), "*/")
        .void()
        .parse_next(input)
}

/// Parse a field substitution: `.` alone, or `.Name` (`.Name`)*.
fn field(input: &mut &str) -> ModalResult<Segment> {
    '.'.parse_next(input)?;
    let Some(first) = opt(identifier).parse_next(input)? else {
        return Ok(Segment::Field(FieldPath::root()));
    };
    let rest: Vec<&str> = repeat(0.., preceded('.', identifier)).parse_next(input)?;
    let mut path = Vec::with_capacity(rest.len() + 1);
    path.push(first.to_string());
    path.extend(rest.into_iter().map(str::to_string));
    Ok(Segment::Field(FieldPath(path)))
}

/// Parse an identifier: a letter or `_`, then letters, digits or `_`.
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1, is_ident_start),
        take_while(0.., is_ident_cont),
    )
        .take()
        .parse_next(input)
}

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_between_literals_merge() {
        let parsed = parse_template("a{{/* note */}}b").unwrap();
        assert_eq!(parsed.segments, vec![Segment::Literal("ab".to_string())]);
    }

    #[test]
    fn nested_path() {
        let parsed = parse_template("{{ .User.Name }}").unwrap();
        assert_eq!(
            parsed.segments,
            vec![Segment::Field(FieldPath(vec![
                "User".to_string(),
                "Name".to_string()
            ]))]
        );
    }
}
