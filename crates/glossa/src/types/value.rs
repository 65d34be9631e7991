use std::collections::{BTreeMap, HashMap};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A runtime value passed to [`Translator::translate`](crate::Translator::translate)
/// as a plural count or as template data.
///
/// Numbers and strings can serve as a count; maps carry named template fields.
///
/// # Example
///
/// ```
/// use glossa::{Data, Value};
///
/// // Integers become Value::Number
/// let count: Value = 42.into();
///
/// // Decimal strings keep their written precision
/// let price: Value = "1.50".into();
///
/// // Maps expose named fields to templates
/// let data: Value = Data::new().with("Name", "Alice").into();
/// # let _ = (count, price, data);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed integer.
    Number(i64),

    /// An unsigned integer too large for `Number`.
    Unsigned(u64),

    /// A floating-point number.
    Float(f64),

    /// A string, possibly a decimal literal such as `"1.50"`.
    String(String),

    /// A boolean.
    Bool(bool),

    /// Named fields, opaque to everything but template field access.
    Map(Data),
}

impl Value {
    /// Build a map value from a record's named fields.
    pub fn from_fields<T: Fields + ?Sized>(record: &T) -> Self {
        Value::Map(record.fields())
    }

    /// Whether this value can be a plural count: any number or string.
    ///
    /// Strings are not validated here; a non-numeric string is reported when
    /// the count is classified.
    pub fn is_count(&self) -> bool {
        matches!(
            self,
            Value::Number(_) | Value::Unsigned(_) | Value::Float(_) | Value::String(_)
        )
    }

    /// Get this value as a map, if it is one.
    pub fn as_map(&self) -> Option<&Data> {
        match self {
            Value::Map(data) => Some(data),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a signed integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Unsigned(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Map(data) => write!(f, "{data}"),
        }
    }
}

/// Named template fields.
///
/// Keys iterate in sorted order, so rendering a whole map is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Data(BTreeMap<String, Value>);

impl Data {
    /// An empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, consuming and returning `self`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a field named `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Data {
    /// Formats as `map[key:value ...]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("map[")?;
        for (index, (key, value)) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("]")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, Value>> for Data {
    fn from(map: HashMap<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, Value>> for Data {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

/// A record that exposes its public named fields to templates.
///
/// Only the top level is flattened. A nested record should be inserted as a
/// [`Value::Map`] of its own fields; templates reach into it with
/// `{{.Outer.Inner}}`.
///
/// ```
/// use glossa::{Data, Fields, Value};
///
/// struct Order {
///     count: u32,
///     customer: String,
/// }
///
/// impl Fields for Order {
///     fn fields(&self) -> Data {
///         Data::new()
///             .with("Count", self.count)
///             .with("Customer", self.customer.as_str())
///     }
/// }
///
/// let order = Order { count: 3, customer: "Ada".into() };
/// let value = Value::from_fields(&order);
/// assert_eq!(value.as_map().unwrap().get("Count"), Some(&Value::Number(3)));
/// ```
pub trait Fields {
    /// The record's named fields.
    fn fields(&self) -> Data;
}

impl Fields for Data {
    fn fields(&self) -> Data {
        self.clone()
    }
}

impl Fields for HashMap<String, Value> {
    fn fields(&self) -> Data {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

// From implementations for common types

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(i64::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Value::Unsigned(n), Value::Number)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(n as u64)
    }
}

impl From<isize> for Value {
    fn from(n: isize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    /// Widens through the shortest decimal form, so `0.1f32` becomes `0.1`.
    fn from(n: f32) -> Self {
        Value::Float(n.to_string().parse().unwrap_or(f64::from(n)))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Data> for Value {
    fn from(data: Data) -> Self {
        Value::Map(data)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(map: HashMap<String, Value>) -> Self {
        Value::Map(map.into())
    }
}
