use super::ResultArray;
use crate::types::alloc_type::{BTreeMap, Vec};
use crate::types::NonEmptyVec;

impl<T, E> ResultArray<T, E> {
    /// Buckets the `Ok` values by `key_fn`, in first-occurrence order of the key.
    ///
    /// Each bucket keeps its values in their relative order. `Err` elements are
    /// not distributed into buckets: they follow all buckets as individual
    /// `Err` entries, in their original relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let words = ResultArray::from(vec![Ok("apple"), Err(404), Ok("avocado"), Ok("bean")]);
    /// let grouped = words.group(|w| w.chars().next());
    ///
    /// let groups: Vec<_> = grouped
    ///     .into_iter()
    ///     .map(|r| r.map(|(key, bucket)| (key, bucket.into_vec())))
    ///     .collect();
    /// assert_eq!(
    ///     groups,
    ///     vec![
    ///         Ok((Some('a'), vec!["apple", "avocado"])),
    ///         Ok((Some('b'), vec!["bean"])),
    ///         Err(404),
    ///     ]
    /// );
    /// ```
    pub fn group<K, O>(self, key_fn: O) -> ResultArray<(K, NonEmptyVec<T>), E>
    where
        K: Ord + Clone,
        O: FnMut(&T) -> K,
    {
        self.group_by_encoding(key_fn, K::clone)
    }

    /// Buckets the `Ok` values by `key_fn`, comparing keys through `encode`.
    ///
    /// Two keys land in the same bucket when their encodings are equal; each
    /// bucket reports the first key that produced it. Use this when the key
    /// type has no meaningful ordering of its own, or when logically equal keys
    /// must be recognised through a canonical form. The encoding must be
    /// deterministic: an encoding that depends on e.g. map iteration order
    /// splits logically equal keys across buckets.
    ///
    /// Ordering of buckets and placement of errors follow [`group`](Self::group).
    pub fn group_by_encoding<K, S, O, C>(
        self,
        mut key_fn: O,
        mut encode: C,
    ) -> ResultArray<(K, NonEmptyVec<T>), E>
    where
        S: Ord,
        O: FnMut(&T) -> K,
        C: FnMut(&K) -> S,
    {
        let keyed = self.results.into_iter().map(|result| {
            result.map(|value| {
                let key = key_fn(&value);
                let encoded = encode(&key);
                (key, encoded, value)
            })
        });
        bucket(keyed)
    }

    /// Splits the `Ok` values into consecutive buckets of at most `size` values.
    ///
    /// Buckets are keyed by their position (`0`, `1`, ...) and cover the value
    /// ranges `[0, size)`, `[size, 2 * size)`, ...; the last one may be shorter.
    /// Only `Ok` values advance the position. `Err` elements follow all buckets.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::ResultArray;
    ///
    /// let batches = ResultArray::<_, ()>::ok([1, 2, 3, 4, 5]).batch(2);
    /// let shapes: Vec<_> = batches
    ///     .oks()
    ///     .into_iter()
    ///     .map(|(index, bucket)| (index, bucket.into_vec()))
    ///     .collect();
    /// assert_eq!(shapes, vec![(0, vec![1, 2]), (1, vec![3, 4]), (2, vec![5])]);
    /// ```
    #[track_caller]
    pub fn batch(self, size: usize) -> ResultArray<(usize, NonEmptyVec<T>), E> {
        assert!(size != 0, "batch size must be non-zero");
        let mut position = 0usize;
        self.group(move |_| {
            let key = position / size;
            position += 1;
            key
        })
    }
}

/// Distributes pre-keyed values into buckets in first-occurrence order,
/// appending the errors afterwards.
pub(super) fn bucket<K, S, T, E, I>(keyed: I) -> ResultArray<(K, NonEmptyVec<T>), E>
where
    S: Ord,
    I: IntoIterator<Item = Result<(K, S, T), E>>,
{
    let mut slots: BTreeMap<S, usize> = BTreeMap::new();
    let mut buckets: Vec<(K, NonEmptyVec<T>)> = Vec::new();
    let mut errors: Vec<E> = Vec::new();

    for entry in keyed {
        match entry {
            Ok((key, encoded, value)) => match slots.get(&encoded) {
                Some(&slot) => buckets[slot].1.push(value),
                None => {
                    slots.insert(encoded, buckets.len());
                    buckets.push((key, NonEmptyVec::new(value)));
                },
            },
            Err(error) => errors.push(error),
        }
    }

    buckets.into_iter().map(Ok).chain(errors.into_iter().map(Err)).collect()
}
