use aws_sdk_dynamodb::types::AttributeValue;

/// A positional argument bound to a `$N` placeholder.
///
/// Only strings and signed integers have a key attribute representation; the
/// remaining variants exist so that callers get a typed
/// [`ParseError::UnsupportedType`](super::ParseError::UnsupportedType) instead
/// of a silent conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    String(String),
    Int {
        value: i128,
        type_name: &'static str,
    },
    Unsigned {
        value: u128,
        type_name: &'static str,
    },
    Float {
        value: f64,
        type_name: &'static str,
    },
    Bool(bool),
    List(Vec<Arg>),
    Null,
}

impl Arg {
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::String(_) => "string",
            Arg::Int { type_name, .. }
            | Arg::Unsigned { type_name, .. }
            | Arg::Float { type_name, .. } => type_name,
            Arg::Bool(_) => "bool",
            Arg::List(_) => "list",
            Arg::Null => "null",
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::String(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::String(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::String(value.clone())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

macro_rules! impl_from_number {
    ($variant:ident, $repr:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::$variant {
                        value: value as $repr,
                        type_name: stringify!($ty),
                    }
                }
            }
        )+
    };
}

impl_from_number!(Int, i128, i8, i16, i32, i64, i128, isize);
impl_from_number!(Unsigned, u128, u8, u16, u32, u64, usize);
impl_from_number!(Float, f64, f32, f64);

/// Builds a `Vec<Arg>` from heterogeneous values.
///
/// ```
/// let args = onetable::args!["123", 25];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::expr::Arg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::expr::Arg::from($arg)),+]
    };
}

/// Attribute value usable as a key or as a bound expression value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    S(String),
    /// Canonical base-10 text of an integer.
    N(String),
}

impl AttrValue {
    pub fn to_attribute_value(&self) -> AttributeValue {
        self.clone().into()
    }
}

impl From<AttrValue> for AttributeValue {
    fn from(value: AttrValue) -> Self {
        match value {
            AttrValue::S(text) => AttributeValue::S(text),
            AttrValue::N(number) => AttributeValue::N(number),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedType {
    pub type_name: &'static str,
}

pub fn classify(arg: &Arg) -> Result<AttrValue, UnsupportedType> {
    match arg {
        Arg::String(text) => Ok(AttrValue::S(text.clone())),
        Arg::Int { value, .. } => Ok(AttrValue::N(value.to_string())),
        other => Err(UnsupportedType {
            type_name: other.type_name(),
        }),
    }
}
