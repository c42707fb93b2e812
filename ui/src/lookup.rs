/// Result of a read that never fails but may substitute a default.
///
/// `Found` carries the real value; `Fallback` carries the documented default
/// (index 0, the `"other"` color, an empty/neutral option value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    Fallback(T),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Lookup::Fallback(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Lookup::Found(value) | Lookup::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Lookup::Found(value) | Lookup::Fallback(value) => value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::Fallback(value) => Lookup::Fallback(f(value)),
        }
    }

    /// The real value, or `None` if a fallback was substituted.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Fallback(_) => None,
        }
    }
}
