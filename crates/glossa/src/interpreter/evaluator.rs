//! Template execution.

use crate::interpreter::error::RenderError;
use crate::parser::ast::{CompiledTemplate, FieldPath, Segment};
use crate::types::Value;

/// Execute a compiled template against optional data.
///
/// Literal segments are copied; each field segment is looked up by walking
/// its path through nested maps and formatted with the value's `Display`.
pub fn eval_template(
    template: &CompiledTemplate,
    data: Option<&Value>,
) -> Result<String, RenderError> {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Field(path) => {
                let value = resolve_field(path, data)?;
                output.push_str(&value.to_string());
            }
        }
    }
    Ok(output)
}

/// Follow a field path from the root data value.
fn resolve_field<'a>(path: &FieldPath, data: Option<&'a Value>) -> Result<&'a Value, RenderError> {
    let mut current = data.ok_or_else(|| RenderError::NoData {
        path: path.to_string(),
    })?;
    for field in path.components() {
        let Value::Map(map) = current else {
            return Err(RenderError::NotAMap {
                path: path.to_string(),
                field: field.clone(),
                value: current.to_string(),
            });
        };
        current = map.get(field).ok_or_else(|| RenderError::MissingField {
            path: path.to_string(),
            field: field.clone(),
        })?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_template;
    use crate::types::Data;

    #[test]
    fn root_path_renders_whole_value() {
        let template = parse_template("[{{.}}]").unwrap();
        let data = Value::from(7);
        assert_eq!(eval_template(&template, Some(&data)).unwrap(), "[7]");
    }

    #[test]
    fn nested_lookup_stops_at_scalars() {
        let template = parse_template("{{.User.Name.First}}").unwrap();
        let data = Value::from(Data::new().with("User", Data::new().with("Name", "Ada")));
        assert_eq!(
            eval_template(&template, Some(&data)),
            Err(RenderError::NotAMap {
                path: ".User.Name.First".to_string(),
                field: "First".to_string(),
                value: "Ada".to_string(),
            })
        );
    }
}
