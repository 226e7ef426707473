use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Deserializes either a JSON object or an array of entry objects into a
/// `Vec<T>`, keeping document order.
///
/// Object form `{"R1": 11.42, "PP": 9.16}` maps each `(key, value)` pair
/// through `T::from`. Array form deserializes `T` directly. `null` yields an
/// empty list.
pub(crate) fn ordered_entries<'de, D, T, V>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + From<(String, V)>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_any(EntriesVisitor::<T, V>(PhantomData))
}

struct EntriesVisitor<T, V>(PhantomData<fn() -> (T, V)>);

impl<'de, T, V> Visitor<'de> for EntriesVisitor<T, V>
where
    T: Deserialize<'de> + From<(String, V)>,
    V: Deserialize<'de>,
{
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object of labelled values or an array of entries")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            entries.push(T::from((key, value)));
        }
        Ok(entries)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(entry) = seq.next_element::<T>()? {
            entries.push(entry);
        }
        Ok(entries)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Vec::new())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Vec::new())
    }
}
