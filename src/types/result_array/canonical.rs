use super::{group::bucket, ResultArray};
use crate::types::alloc_type::{String, Vec};
use crate::types::NonEmptyVec;
use serde::Serialize;

/// Encodes `key` as canonical JSON.
///
/// The key goes through [`serde_json::Value`] and every object in it is
/// sorted by key before encoding, so two maps or structs holding the same
/// entries encode identically regardless of insertion or field order. This
/// holds even when serde_json's `preserve_order` feature is enabled
/// elsewhere in the build.
///
/// # Errors
///
/// Fails when `key` cannot be represented as JSON, e.g. a map with
/// non-string keys.
///
/// # Examples
///
/// ```
/// use result_rail::types::canonical_key;
/// use std::collections::HashMap;
///
/// let mut first = HashMap::new();
/// first.insert("region", "eu");
/// first.insert("tier", "gold");
///
/// let mut second = HashMap::new();
/// second.insert("tier", "gold");
/// second.insert("region", "eu");
///
/// assert_eq!(canonical_key(&first).unwrap(), canonical_key(&second).unwrap());
/// ```
pub fn canonical_key<K>(key: &K) -> Result<String, serde_json::Error>
where
    K: Serialize + ?Sized,
{
    let mut value = serde_json::to_value(key)?;
    value.sort_all_objects();
    serde_json::to_string(&value)
}

impl<T, E> ResultArray<T, E> {
    /// Buckets the `Ok` values by `key_fn`, comparing keys by their
    /// [`canonical_key`] encoding.
    ///
    /// Structured keys that are logically equal share a bucket even when they
    /// are not `Ord` or were built in a different order. Ordering of buckets
    /// and placement of errors follow [`group`](Self::group).
    ///
    /// # Errors
    ///
    /// Fails with the first key that cannot be encoded.
    pub fn group_canonical<K, O>(
        self,
        mut key_fn: O,
    ) -> Result<ResultArray<(K, NonEmptyVec<T>), E>, serde_json::Error>
    where
        K: Serialize,
        O: FnMut(&T) -> K,
    {
        let mut keyed = Vec::with_capacity(self.results.len());
        for result in self.results {
            keyed.push(match result {
                Ok(value) => {
                    let key = key_fn(&value);
                    let encoded = canonical_key(&key)?;
                    Ok((key, encoded, value))
                },
                Err(error) => Err(error),
            });
        }
        Ok(bucket(keyed))
    }
}
