//! A vector that always holds at least one element.
//!
//! `NonEmptyVec` is the error list of [`Validation::Invalid`](super::Validation):
//! an invalid result always carries at least one error, and the type makes
//! that impossible to violate.

use std::fmt;

use crate::typeclass::Semigroup;

/// A vector guaranteed to contain at least one element.
///
/// # Examples
///
/// ```rust
/// use effectual::control::NonEmptyVec;
///
/// let errors = NonEmptyVec::new("missing name", vec!["bad age"]);
/// assert_eq!(errors.head(), &"missing name");
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmptyVec<T> {
    /// Builds a vector from its first element and the rest.
    #[inline]
    pub const fn new(head: T, tail: Vec<T>) -> Self {
        Self { head, tail }
    }

    /// Builds a one-element vector.
    #[inline]
    pub const fn singleton(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Converts a `Vec`, returning `None` when it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effectual::control::NonEmptyVec;
    ///
    /// assert!(NonEmptyVec::from_vec(Vec::<i32>::new()).is_none());
    /// assert_eq!(NonEmptyVec::from_vec(vec![1, 2]).map(|v| v.len()), Some(2));
    /// ```
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        let mut elements = values.into_iter();
        let head = elements.next()?;
        Some(Self::new(head, elements.collect()))
    }

    /// The first element.
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Consumes the vector, keeping only the first element.
    #[inline]
    pub fn into_head(self) -> T {
        self.head
    }

    /// Every element after the first.
    #[inline]
    pub fn tail(&self) -> &[T] {
        &self.tail
    }

    /// The last element.
    #[inline]
    pub fn last(&self) -> &T {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of elements, never zero.
    #[inline]
    pub const fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element at the end.
    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Appends every element of `other`, keeping order.
    #[must_use]
    pub fn concat(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    /// Transforms each element, preserving order and length.
    pub fn map<U, F>(self, mut function: F) -> NonEmptyVec<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyVec {
            head: function(self.head),
            tail: self.tail.into_iter().map(function).collect(),
        }
    }

    /// Iterates from the first element to the last.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Converts into a plain `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.head);
        values.extend(self.tail);
        values
    }
}

impl<T> Semigroup for NonEmptyVec<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<T> IntoIterator for NonEmptyVec<T> {
    type Item = T;
    type IntoIter = std::iter::Chain<std::iter::Once<T>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<T: fmt::Display> fmt::Display for NonEmptyVec<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmptyVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptyVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        Self::from_vec(values)
            .ok_or_else(|| serde::de::Error::invalid_length(0, &"at least one element"))
    }
}
