use std::fmt;

/// Weight given to a name that has no `-q` in front of it.
pub const DEFAULT_WEIGHT: f64 = 1.0;

///
/// A single candidate: the name as typed, and its relative weight ("q").
///
/// Names are never normalised, so the same name given twice is two entries.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub weight: f64,
}

impl Entry {
    pub fn new(name: impl Into<String>, weight: f64) -> Entry {
        Entry {
            name: name.into(),
            weight,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (q={})", self.name, self.weight)
    }
}
