//! Grouping and Lookup: the key-ordered group table behind GroupBy, ToLookup,
//! Join and GroupJoin.

use std::hash::Hash;
use std::sync::Arc;

use enumq_core::compare::{Equaler, HashEqual};
use enumq_core::error::{require, Error, Result};
use enumq_core::source::SliceEnumerator;
use enumq_core::Enumerator;

use crate::set::KeyIndex;

/// A key and the elements that share it, in original relative order.
///
/// A grouping is itself an enumerator over its elements. Clones share the
/// element buffer but start with a fresh cursor.
#[derive(Debug)]
pub struct Grouping<K, V> {
    key: K,
    elements: SliceEnumerator<V>,
}

impl<K, V> Grouping<K, V> {
    pub fn new(key: K, elements: Vec<V>) -> Self {
        Self {
            key,
            elements: SliceEnumerator::new(elements),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[V] {
        self.elements.as_slice()
    }

    /// Independent cursor over the group's elements.
    pub fn enumerator(&self) -> SliceEnumerator<V> {
        self.elements.clone()
    }
}

impl<K: Clone, V> Clone for Grouping<K, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            elements: self.elements.clone(),
        }
    }
}

impl<K, V: Clone> Enumerator for Grouping<K, V> {
    type Item = V;

    fn advance(&mut self) -> bool {
        self.elements.advance()
    }

    fn current(&self) -> Option<V> {
        self.elements.current()
    }

    fn restart(&mut self) {
        self.elements.restart()
    }
}

/// Groups keyed by an equality strategy, in order of first key occurrence.
pub struct Lookup<K, V, Q> {
    index: KeyIndex<K, Q>,
    groups: Arc<[Grouping<K, V>]>,
}

impl<K: Clone, V, Q: Equaler<K>> Lookup<K, V, Q> {
    /// Pull every remaining element of `source` and group it.
    pub fn build<E, KF, VF>(source: &mut E, key: KF, element: VF, equaler: Q) -> Self
    where
        E: Enumerator + ?Sized,
        KF: Fn(&E::Item) -> K,
        VF: Fn(E::Item) -> V,
    {
        let mut index = KeyIndex::new(equaler);
        let mut buckets: Vec<Vec<V>> = Vec::new();
        while source.advance() {
            let Some(item) = source.current() else {
                continue;
            };
            let (slot, appended) = index.entry(key(&item));
            if appended {
                buckets.push(Vec::new());
            }
            buckets[slot].push(element(item));
        }
        let groups: Vec<Grouping<K, V>> = index
            .keys()
            .iter()
            .cloned()
            .zip(buckets)
            .map(|(k, vs)| Grouping::new(k, vs))
            .collect();
        #[cfg(feature = "tracing")]
        tracing::trace!(groups = groups.len(), "lookup built");
        Self {
            index,
            groups: groups.into(),
        }
    }

    /// Position of the group for `key` in first-occurrence order.
    pub fn position(&self, key: &K) -> Option<usize> {
        self.index.position(key)
    }

    pub fn get(&self, key: &K) -> Option<&Grouping<K, V>> {
        self.position(key).map(|i| &self.groups[i])
    }

    pub fn contains(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn group_at(&self, i: usize) -> Option<&Grouping<K, V>> {
        self.groups.get(i)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Cursor over the groups; shares the group buffer.
    pub fn enumerator(&self) -> SliceEnumerator<Grouping<K, V>> {
        SliceEnumerator::new(Arc::clone(&self.groups))
    }
}

pub(crate) fn same<T>(item: T) -> T {
    item
}

/// Group the remaining elements of `source` by hashed key.
pub fn to_lookup<E, KF, K>(
    source: Option<E>,
    key: Option<KF>,
) -> Result<Lookup<K, E::Item, HashEqual>>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    K: Hash + Eq + Clone,
{
    let mut source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    Ok(Lookup::build(&mut source, key, same, HashEqual))
}

/// Like [`to_lookup`] with an element selector and an equality strategy
/// (`None` means structural equality).
pub fn to_lookup_sel<E, KF, VF, K, V, Q>(
    source: Option<E>,
    key: Option<KF>,
    element: Option<VF>,
    equaler: Option<Q>,
) -> Result<Lookup<K, V, Option<Q>>>
where
    E: Enumerator,
    KF: Fn(&E::Item) -> K,
    VF: Fn(E::Item) -> V,
    K: PartialEq + Clone,
    Q: Equaler<K>,
{
    let mut source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let element = require(element, Error::NilSelector)?;
    Ok(Lookup::build(&mut source, key, element, equaler))
}
