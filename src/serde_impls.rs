use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt::{self, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use crate::HashSet;

struct SetVisitor<T, S> {
    _marker: PhantomData<HashSet<T, S>>,
}

impl<T, S> Serialize for HashSet<T, S>
where
    T: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl<'de, T, S> Deserialize<'de> for HashSet<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: Default + BuildHasher,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

impl<T, S> SetVisitor<T, S> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<'de, T, S> Visitor<'de> for SetVisitor<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: Default + BuildHasher,
{
    type Value = HashSet<T, S>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a set")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        // The size hint comes from the input, so only trust it up to a point.
        const MAX_PREALLOCATE: usize = 4096;

        let mut values = match access.size_hint() {
            // Room for every element without growing.
            Some(size) => HashSet::with_capacity_and_hasher(
                size.min(MAX_PREALLOCATE) * 2 + 1,
                S::default(),
            ),
            None => HashSet::default(),
        };

        while let Some(value) = access.next_element()? {
            values.insert(value);
        }

        Ok(values)
    }
}

#[cfg(test)]
mod test {
    use crate::HashSet;

    use serde::de::value::{Error, SeqDeserializer};
    use serde::Deserialize;

    #[test]
    fn test_set() {
        let mut set: HashSet<u8> = HashSet::with_capacity(16);

        set.insert(0);
        set.insert(1);
        set.insert(2);
        set.insert(3);
        set.insert(4);

        let serialized = serde_json::to_string(&set).unwrap();
        let deserialized = serde_json::from_str(&serialized).unwrap();

        assert_eq!(set, deserialized);
    }

    #[test]
    fn test_empty() {
        let set: HashSet<String> = serde_json::from_str("[]").unwrap();
        assert!(set.is_empty());

        let set: HashSet<String> = serde_json::from_str(r#"["a", "b", "a"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("a"));
        assert!(set.contains("b"));
    }

    #[test]
    fn test_untrusted_size_hint() {
        // An input that claims far more elements than it holds.
        struct Claims(usize);

        impl Iterator for Claims {
            type Item = u32;

            fn next(&mut self) -> Option<u32> {
                None
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.0, Some(self.0))
            }
        }

        let deserializer = SeqDeserializer::<_, Error>::new(Claims(1 << 40));
        let set = HashSet::<u32>::deserialize(deserializer).unwrap();

        assert!(set.is_empty());
        assert!(set.capacity() <= 4 * 4096);
    }
}
