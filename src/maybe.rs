//! A two-state container used as the sentinel of the reducer protocol.
//!
//! # Maybe vs Option
//!
//! `Maybe<T>` carries the same information as `Option<T>`, but it is reserved for
//! control signalling: "no accumulator yet", "no element", "stop". Keeping that
//! channel in its own type means a pipeline whose elements are themselves
//! `Option`s can never confuse a user's `None` with a protocol signal:
//!
//! ```rust
//! use transducers::Maybe;
//!
//! let element: Maybe<Option<i32>> = Maybe::present(None);
//! assert!(element.is_present());
//! assert_eq!(element.into_option(), Some(None));
//! ```
//!
//! Conversions to and from `Option` are provided for the edges where a value
//! leaves the protocol.

/// Either nothing, or a value.
///
/// # Example
///
/// ```rust
/// use transducers::Maybe;
///
/// let acc = Maybe::present(40);
/// let elem = Maybe::present(2);
///
/// assert_eq!(acc.zip(elem, |a, b| a + b), Maybe::present(42));
/// assert_eq!(Maybe::<i32>::empty().get_or_else(0), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value.
    #[default]
    Empty,
    /// A value, whatever it is.
    Present(T),
}

impl<T> Maybe<T> {
    // ========== Constructors ==========

    /// Create an empty `Maybe`.
    #[inline]
    pub fn empty() -> Self {
        Maybe::Empty
    }

    /// Wrap a value.
    #[inline]
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if there is no value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transducers::Maybe;
    ///
    /// assert!(Maybe::<()>::empty().is_empty());
    /// assert!(!Maybe::present(()).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Maybe::Empty)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    // ========== Transformations ==========

    /// Apply `f` to the present value, propagating emptiness.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transducers::Maybe;
    ///
    /// assert_eq!(Maybe::present(21).map(|x| x * 2), Maybe::present(42));
    /// assert_eq!(Maybe::<i32>::empty().map(|x| x * 2), Maybe::empty());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Empty => Maybe::Empty,
            Maybe::Present(value) => Maybe::Present(f(value)),
        }
    }

    /// Chain a computation that may itself produce nothing.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Empty => Maybe::Empty,
            Maybe::Present(value) => f(value),
        }
    }

    /// Combine two present values. Empty if either side is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transducers::Maybe;
    ///
    /// let sum = Maybe::present(1).zip(Maybe::present(2), |a, b| a + b);
    /// assert_eq!(sum, Maybe::present(3));
    ///
    /// let none = Maybe::present(1).zip(Maybe::<i32>::empty(), |a, b| a + b);
    /// assert!(none.is_empty());
    /// ```
    #[inline]
    pub fn zip<U, R, F>(self, other: Maybe<U>, f: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present(f(a, b)),
            _ => Maybe::Empty,
        }
    }

    // ========== Fallbacks ==========

    /// The present value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Maybe::Empty => default,
            Maybe::Present(value) => value,
        }
    }

    /// The present value, or the result of `f`. `f` only runs when empty.
    #[inline]
    pub fn get_or_else_with<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Empty => f(),
            Maybe::Present(value) => value,
        }
    }

    /// `self` if present, otherwise `fallback`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transducers::Maybe;
    ///
    /// assert_eq!(Maybe::empty().or(Maybe::present(1)), Maybe::present(1));
    /// assert_eq!(Maybe::present(2).or(Maybe::present(1)), Maybe::present(2));
    /// ```
    #[inline]
    pub fn or(self, fallback: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Empty => fallback,
            present => present,
        }
    }

    /// `self` if present, otherwise the result of `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Empty => f(),
            present => present,
        }
    }

    // ========== Conversions ==========

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Empty => Maybe::Empty,
            Maybe::Present(value) => Maybe::Present(value),
        }
    }

    /// Leave the protocol: `Present(v)` becomes `Some(v)`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Empty => None,
            Maybe::Present(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Present(value),
            None => Maybe::Empty,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Maybe;

    // Serialized through the `Option` form: `null` for empty.
    impl<T: Serialize> Serialize for Maybe<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.as_ref().into_option().serialize(serializer)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Option::<T>::deserialize(deserializer).map(Maybe::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_wraps_null_like_values() {
        let nothing_inside: Maybe<Option<i32>> = Maybe::present(None);
        assert!(nothing_inside.is_present());
        assert!(!nothing_inside.is_empty());

        let unit = Maybe::present(());
        assert!(unit.is_present());
    }

    #[test]
    fn default_is_empty() {
        let m: Maybe<String> = Maybe::default();
        assert!(m.is_empty());
    }

    #[test]
    fn map_propagates_emptiness() {
        assert_eq!(Maybe::present("ab").map(str::len), Maybe::present(2));
        assert_eq!(Maybe::<&str>::empty().map(str::len), Maybe::empty());
    }

    #[test]
    fn and_then_can_empty_a_value() {
        let halve = |x: i32| {
            if x % 2 == 0 {
                Maybe::present(x / 2)
            } else {
                Maybe::empty()
            }
        };
        assert_eq!(Maybe::present(8).and_then(halve), Maybe::present(4));
        assert_eq!(Maybe::present(7).and_then(halve), Maybe::empty());
    }

    #[test]
    fn zip_needs_both_sides() {
        let a = Maybe::present(2);
        let b = Maybe::present(3);
        assert_eq!(a.zip(b, |x, y| x * y), Maybe::present(6));
        assert_eq!(a.zip(Maybe::<i32>::empty(), |x, y| x * y), Maybe::empty());
        assert_eq!(Maybe::<i32>::empty().zip(b, |x, y| x * y), Maybe::empty());
    }

    #[test]
    fn get_or_else_with_is_lazy() {
        let mut calls = 0;
        let value = Maybe::present(1).get_or_else_with(|| {
            calls += 1;
            0
        });
        assert_eq!(value, 1);
        assert_eq!(calls, 0);

        let value = Maybe::empty().get_or_else_with(|| {
            calls += 1;
            9
        });
        assert_eq!(value, 9);
        assert_eq!(calls, 1);
    }

    #[test]
    fn or_and_or_else_prefer_present_self() {
        assert_eq!(Maybe::present(1).or(Maybe::present(2)), Maybe::present(1));
        assert_eq!(Maybe::empty().or_else(|| Maybe::present(2)), Maybe::present(2));
        assert_eq!(Maybe::<i32>::empty().or(Maybe::empty()), Maybe::empty());
    }

    #[test]
    fn option_conversions() {
        assert_eq!(Maybe::from(Some(3)), Maybe::present(3));
        assert_eq!(Maybe::<i32>::from(None), Maybe::empty());
        let back: Option<i32> = Maybe::present(3).into();
        assert_eq!(back, Some(3));
        assert_eq!(Maybe::present(3).as_ref(), Maybe::present(&3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_option_encoding() {
        let json = serde_json::to_string(&Maybe::present(5)).unwrap();
        assert_eq!(json, "5");
        let json = serde_json::to_string(&Maybe::<i32>::empty()).unwrap();
        assert_eq!(json, "null");

        let back: Maybe<i32> = serde_json::from_str("7").unwrap();
        assert_eq!(back, Maybe::present(7));
        let back: Maybe<i32> = serde_json::from_str("null").unwrap();
        assert!(back.is_empty());
    }
}
