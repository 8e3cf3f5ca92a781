use crate::raw;
use crate::{CapacityError, DEFAULT_CAPACITY};

use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::marker::PhantomData;

/// The default hash builder.
///
/// Unlike [`RandomState`](std::collections::hash_map::RandomState), this builder
/// is unkeyed, so an element hashes to the same value in every run and the
/// table's probe sequences are reproducible.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// An open-addressing hash set.
///
/// Elements are stored directly in a single slot array whose length is always
/// prime. Collisions are resolved by double hashing, and the table doubles in
/// size (rounded up to the next prime) once it becomes more than half full.
/// See the [crate-level documentation](crate) for details.
pub struct HashSet<T, S = DefaultHashBuilder> {
    raw: raw::HashSet<T, S>,
}

/// A builder for a [`HashSet`].
///
/// # Examples
///
/// ```rust
/// use probeset::{DefaultHashBuilder, HashSet};
///
/// let set: HashSet<i32> = HashSet::builder()
///     // Set the initial capacity.
///     .capacity(2048)
///     // Set the hasher.
///     .hasher(DefaultHashBuilder::default())
///     // Construct the hash set.
///     .build();
///
/// assert_eq!(set.capacity(), 2053);
/// ```
pub struct HashSetBuilder<T, S = DefaultHashBuilder> {
    hasher: S,
    capacity: usize,
    _t: PhantomData<T>,
}

impl<T> HashSetBuilder<T> {
    /// Set the hash builder used to turn an element's [`Hash`] implementation
    /// into a hash code.
    ///
    /// The `hasher` should be deterministic for probe sequences to be
    /// reproducible across runs.
    pub fn hasher<S>(self, hasher: S) -> HashSetBuilder<T, S> {
        HashSetBuilder {
            hasher,
            capacity: self.capacity,
            _t: PhantomData,
        }
    }
}

impl<T, S> HashSetBuilder<T, S> {
    /// Set the capacity hint of the set.
    ///
    /// The table is allocated with the smallest prime number of slots that is
    /// at least `capacity`, and at least [`MIN_CAPACITY`](crate::MIN_CAPACITY).
    pub fn capacity(self, capacity: usize) -> HashSetBuilder<T, S> {
        HashSetBuilder {
            capacity,
            hasher: self.hasher,
            _t: PhantomData,
        }
    }

    /// Construct a [`HashSet`] from the builder, using the configured options.
    ///
    /// # Panics
    ///
    /// Panics if the capacity hint is zero or exceeds
    /// [`MAX_CAPACITY`](crate::MAX_CAPACITY). See [`HashSetBuilder::try_build`]
    /// for a fallible version.
    pub fn build(self) -> HashSet<T, S> {
        match self.try_build() {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// Construct a [`HashSet`] from the builder, returning an error if the
    /// capacity hint is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::{CapacityError, HashSet};
    ///
    /// let err = HashSet::<u32>::builder().capacity(0).try_build().unwrap_err();
    /// assert_eq!(err, CapacityError::Zero);
    /// ```
    pub fn try_build(self) -> Result<HashSet<T, S>, CapacityError> {
        Ok(HashSet {
            raw: raw::HashSet::new(self.capacity, self.hasher)?,
        })
    }
}

impl<T, S> fmt::Debug for HashSetBuilder<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSetBuilder")
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> HashSet<T> {
    /// Creates an empty `HashSet` sized for bulk workloads.
    ///
    /// The set is allocated using the [`DEFAULT_CAPACITY`] hint, which
    /// produces a table of 200,117 slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    /// let set: HashSet<&str> = HashSet::new();
    /// assert_eq!(set.capacity(), 200_117);
    /// ```
    pub fn new() -> HashSet<T> {
        HashSet::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `HashSet` with the specified capacity hint.
    ///
    /// The table is allocated with the smallest prime number of slots that is
    /// at least `capacity`. Hints below [`MIN_CAPACITY`](crate::MIN_CAPACITY)
    /// are rounded up to it.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or exceeds [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    /// let set: HashSet<&str> = HashSet::with_capacity(10);
    /// assert_eq!(set.capacity(), 11);
    /// ```
    pub fn with_capacity(capacity: usize) -> HashSet<T> {
        HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates an empty `HashSet` with the specified capacity hint, returning
    /// an error if the hint is zero or too large.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::{CapacityError, HashSet};
    ///
    /// assert!(HashSet::<u8>::try_with_capacity(10).is_ok());
    /// assert_eq!(HashSet::<u8>::try_with_capacity(0).unwrap_err(), CapacityError::Zero);
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<HashSet<T>, CapacityError> {
        HashSet::builder().capacity(capacity).try_build()
    }

    /// Returns a builder for a `HashSet`.
    ///
    /// The builder can be used for more complex configuration, such as using
    /// a custom hash builder.
    pub fn builder() -> HashSetBuilder<T> {
        HashSetBuilder {
            capacity: DEFAULT_CAPACITY,
            hasher: DefaultHashBuilder::default(),
            _t: PhantomData,
        }
    }
}

impl<T, S> Default for HashSet<T, S>
where
    S: Default,
{
    fn default() -> Self {
        HashSet::with_hasher(S::default())
    }
}

impl<T, S> HashSet<T, S> {
    /// Creates an empty `HashSet` with the [`DEFAULT_CAPACITY`] hint which will
    /// use the given hash builder to hash elements.
    pub fn with_hasher(hash_builder: S) -> HashSet<T, S> {
        HashSet::with_capacity_and_hasher(DEFAULT_CAPACITY, hash_builder)
    }

    /// Creates an empty `HashSet` with the specified capacity hint, using
    /// `hash_builder` to hash elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or exceeds [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::{DefaultHashBuilder, HashSet};
    ///
    /// let mut set = HashSet::with_capacity_and_hasher(10, DefaultHashBuilder::default());
    /// set.insert(1);
    /// ```
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> HashSet<T, S> {
        HashSetBuilder {
            capacity,
            hasher: hash_builder,
            _t: PhantomData,
        }
        .build()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    ///
    /// set.insert(1);
    /// set.insert(2);
    /// assert!(set.len() == 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set is empty. Otherwise returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// set.insert("a");
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in the backing table.
    ///
    /// This is always a prime number. The table grows once more than half of
    /// its slots are occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(10);
    /// assert_eq!(set.capacity(), 11);
    ///
    /// set.extend(0..6);
    /// assert_eq!(set.capacity(), 23);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns a reference to the set's [`BuildHasher`].
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.raw.hasher
    }

    /// Clears the set, removing all values.
    ///
    /// The backing table keeps its capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    ///
    /// set.insert(1);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(!set.contains(&1));
    /// ```
    #[doc(alias = "make_empty")]
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear()
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all values `v` for which `f(&v)` returns `false`.
    /// The elements are visited in unsorted (and unspecified) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set: HashSet<i32> = (0..8).collect();
    /// set.retain(|&v| v % 2 == 0);
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set.contains(&1), false);
    /// assert_eq!(set.contains(&2), true);
    /// ```
    #[inline]
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.retain(f)
    }

    /// An iterator visiting all values in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let set = HashSet::from([
    ///     "a",
    ///     "b",
    ///     "c"
    /// ]);
    ///
    /// for val in set.iter() {
    ///     println!("val: {val}");
    /// }
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: self.raw.iter(),
        }
    }
}

impl<T, S> HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the set contains a value equal to `value`.
    ///
    /// The value may be any borrowed form of the set's value type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the value type.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    /// set.insert(1);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&2), false);
    /// ```
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the value in the set equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    /// set.insert(1);
    /// assert_eq!(set.get(&1), Some(&1));
    /// assert_eq!(set.get(&2), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.raw.get(value)
    }

    /// Inserts a value into the set.
    ///
    /// If the set did not have an equal value present, `true` is returned.
    ///
    /// If the set did have an equal value present, `false` is returned and the
    /// stored value is not updated. This matters for types that can be `==`
    /// without being identical.
    ///
    /// Inserting may grow the table, reinserting every element into a new
    /// table of at least twice the size.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    /// assert_eq!(set.insert(37), true);
    /// assert_eq!(set.is_empty(), false);
    ///
    /// assert_eq!(set.insert(37), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Removes a value from the set, returning whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set = HashSet::with_capacity(16);
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), true);
    /// assert_eq!(set.remove(&1), false);
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the value in the set equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use probeset::HashSet;
    ///
    /// let mut set: HashSet<String> = HashSet::with_capacity(16);
    /// set.insert("a".to_owned());
    /// assert_eq!(set.take("a"), Some("a".to_owned()));
    /// assert_eq!(set.take("a"), None);
    /// ```
    #[inline]
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.raw.take(value)
    }
}

impl<T, S> Clone for HashSet<T, S>
where
    T: Clone,
    S: Clone,
{
    fn clone(&self) -> HashSet<T, S> {
        HashSet {
            raw: self.raw.clone(),
        }
    }
}

impl<T, S> PartialEq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|value| other.contains(value))
    }
}

impl<T, S> Eq for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
}

impl<T, S> fmt::Debug for HashSet<T, S>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, S> Extend<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for HashSet<T, S>
where
    T: Copy + Hash + Eq + 'a,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for HashSet<T, DefaultHashBuilder>
where
    T: Hash + Eq,
{
    fn from(arr: [T; N]) -> Self {
        HashSet::from_iter(arr)
    }
}

impl<T, S> FromIterator<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();

        // Size the table so the lower bound fits without growing.
        let (lower, _) = iter.size_hint();
        let capacity = lower
            .saturating_mul(2)
            .saturating_add(1)
            .min(crate::MAX_CAPACITY);

        let mut set = HashSet::with_capacity_and_hasher(capacity, S::default());
        set.extend(iter);
        set
    }
}

impl<'a, T, S> IntoIterator for &'a HashSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over a set's values.
///
/// This struct is created by the [`iter`](HashSet::iter) method on [`HashSet`]. See its documentation for details.
pub struct Iter<'a, T> {
    raw: raw::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(Iter {
                raw: self.raw.clone(),
            })
            .finish()
    }
}
