//! Splitting `translate` arguments into a plural count and template data.

use crate::types::{Data, Value};

/// The field under which a count is exposed to templates, and from which an
/// implicit count is read.
pub const COUNT_FIELD: &str = "Count";

/// The maximum number of arguments `translate` accepts.
pub(crate) const MAX_ARGS: usize = 2;

/// Arguments after count detection and `Count` injection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Arguments {
    /// The value to classify, if any.
    pub count: Option<Value>,
    /// The value templates render against.
    pub data: Option<Value>,
}

impl Arguments {
    /// Interpret up to two arguments.
    ///
    /// A leading number or string is the count and the optional second
    /// argument is the data; otherwise the first argument is the data. An
    /// explicit count is exposed to templates as `Count`, either in a map of
    /// its own or added to map data. Without an explicit count, a `Count`
    /// field in map data becomes the count. Non-map data is passed through
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if more than two arguments are given.
    pub fn parse(args: &[Value]) -> Self {
        assert!(
            args.len() <= MAX_ARGS,
            "translate accepts at most {MAX_ARGS} arguments (count, data), got {}",
            args.len()
        );

        let (count, data) = match args {
            [] => (None, None),
            [first, rest @ ..] if first.is_count() => (Some(first.clone()), rest.first().cloned()),
            [first, ..] => (None, Some(first.clone())),
        };

        match (count, data) {
            (Some(count), None) => {
                let mut fields = Data::new();
                fields.insert(COUNT_FIELD, count.clone());
                Arguments {
                    count: Some(count),
                    data: Some(Value::Map(fields)),
                }
            }
            (Some(count), Some(Value::Map(mut fields))) => {
                fields.insert(COUNT_FIELD, count.clone());
                Arguments {
                    count: Some(count),
                    data: Some(Value::Map(fields)),
                }
            }
            (None, Some(Value::Map(fields))) => Arguments {
                count: fields.get(COUNT_FIELD).cloned(),
                data: Some(Value::Map(fields)),
            },
            (count, data) => Arguments { count, data },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        assert_eq!(
            Arguments::parse(&[]),
            Arguments {
                count: None,
                data: None
            }
        );
    }

    #[test]
    fn count_alone_becomes_count_field() {
        let parsed = Arguments::parse(&[Value::from(3)]);
        assert_eq!(parsed.count, Some(Value::from(3)));
        assert_eq!(
            parsed.data,
            Some(Value::from(Data::new().with("Count", 3)))
        );
    }

    #[test]
    fn count_is_injected_into_map_data() {
        let parsed = Arguments::parse(&[Value::from("2"), Data::new().with("Name", "Ada").into()]);
        assert_eq!(
            parsed.data,
            Some(Value::from(
                Data::new().with("Count", "2").with("Name", "Ada")
            ))
        );
    }

    #[test]
    fn implicit_count_from_data() {
        let parsed = Arguments::parse(&[Data::new().with("Count", 1).into()]);
        assert_eq!(parsed.count, Some(Value::from(1)));
    }

    #[test]
    fn data_first_ignores_second_argument_as_count() {
        let parsed = Arguments::parse(&[Value::from(true), Value::from(4)]);
        assert_eq!(parsed.count, None);
        assert_eq!(parsed.data, Some(Value::from(true)));
    }

    #[test]
    #[should_panic(expected = "at most 2 arguments")]
    fn three_arguments_panic() {
        let _ = Arguments::parse(&[Value::from(1), Value::from(2), Value::from(3)]);
    }
}
