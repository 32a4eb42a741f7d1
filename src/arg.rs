use std::fmt;

/// A single substitution value for a message template.
///
/// Templates are filled positionally, so every caller-supplied value is
/// converted into one of these variants up front. `Display` holds a value
/// that was already rendered through its `Display` impl and only supports
/// the string-like verbs.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i128),
    Float(f64),
    Bool(bool),
    Display(String),
}

impl Arg {
    /// Captures any displayable value as an opaque argument.
    pub fn display(value: &impl fmt::Display) -> Self {
        Arg::Display(value.to_string())
    }

    /// Type name used inside substitution diagnostics such as `%!d(string=abc)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float64",
            Arg::Bool(_) => "bool",
            Arg::Display(_) => "value",
        }
    }

    /// Infers a variant from free-form text, e.g. a command-line word.
    pub fn parse_loose(text: &str) -> Self {
        if let Ok(n) = text.parse::<i128>() {
            return Arg::Int(n);
        }
        if text.chars().any(|c| c.is_ascii_digit()) {
            if let Ok(f) = text.parse::<f64>() {
                return Arg::Float(f);
            }
        }
        match text {
            "true" => Arg::Bool(true),
            "false" => Arg::Bool(false),
            _ => Arg::Str(text.to_string()),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) | Arg::Display(s) => f.write_str(s),
            Arg::Int(n) => write!(f, "{n}"),
            Arg::Float(x) => write!(f, "{x}"),
            Arg::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Arg::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<isize> for Arg {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Arg::Int(value as i128)
    }
}

impl From<usize> for Arg {
    fn from(value: usize) -> Self {
        Arg::Int(value as i128)
    }
}
