//! OrderedEnumerable: deferred, stable, buffered sort.
//!
//! Nothing is pulled when the ordered sequence is built. The first
//! `advance()` drains the upstream into a buffer, stable-sorts it with the
//! composed ordering and then serves it by index. `restart()` rewinds over
//! that buffer; [`OrderedEnumerable::get_enumerator`] hands out a fresh
//! instance that restarts the upstream and sorts again.
//!
//! ThenBy never re-sorts an existing buffer. It composes the ordering and
//! returns a new, unsorted OrderedEnumerable over the same upstream.

use std::cell::RefCell;
use std::rc::Rc;

use enumq_core::compare::{Lesser, Order, Reverse};
use enumq_core::config::BufferConfig;
use enumq_core::enumerator::to_vec_with;
use enumq_core::error::{require, Error, Result};
use enumq_core::source::SliceEnumerator;
use enumq_core::Enumerator;

use super::lesser::{KeyLesser, ThenLesser};
use super::stable::stable_sort;

pub struct OrderedEnumerable<E: Enumerator, L> {
    source: Rc<RefCell<E>>,
    lesser: Rc<L>,
    cfg: BufferConfig,
    // Instances from `get_enumerator` rewind the upstream before buffering.
    restart_source: bool,
    sorted: Option<SliceEnumerator<E::Item>>,
}

/// Composed ordering after a ThenBy on an ordering `L`.
pub type ThenByLesser<L, F, L2> = ThenLesser<Rc<L>, KeyLesser<F, L2>>;

impl<E: Enumerator, L: Lesser<E::Item>> OrderedEnumerable<E, L> {
    pub fn new(source: E, lesser: L) -> Self {
        Self {
            source: Rc::new(RefCell::new(source)),
            lesser: Rc::new(lesser),
            cfg: BufferConfig::default(),
            restart_source: false,
            sorted: None,
        }
    }

    /// Size the sort buffer from `cfg`.
    pub fn with_config(mut self, cfg: BufferConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// A new, unsorted enumerator over the same upstream and ordering.
    pub fn get_enumerator(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            lesser: Rc::clone(&self.lesser),
            cfg: self.cfg.clone(),
            restart_source: true,
            sorted: None,
        }
    }

    /// True once this instance has buffered and sorted its input.
    pub fn is_sorted(&self) -> bool {
        self.sorted.is_some()
    }

    fn then_with<L2>(self, secondary: L2) -> OrderedEnumerable<E, ThenLesser<Rc<L>, L2>>
    where
        L2: Lesser<E::Item>,
    {
        OrderedEnumerable {
            source: self.source,
            lesser: Rc::new(ThenLesser::new(self.lesser, secondary)),
            cfg: self.cfg,
            // Once this instance has drained the upstream, the composed
            // ordering has to pull it again from the start.
            restart_source: self.restart_source || self.sorted.is_some(),
            sorted: None,
        }
    }

    /// Break ties by an ascending key.
    pub fn then_by<F, K>(self, key: F) -> OrderedEnumerable<E, ThenByLesser<L, F, Order>>
    where
        F: Fn(&E::Item) -> K,
        K: PartialOrd,
    {
        self.then_with(KeyLesser::ascending(key, Order))
    }

    /// Break ties by a key under an explicit ordering.
    pub fn then_by_ls<F, K, L2>(
        self,
        key: F,
        lesser: L2,
    ) -> OrderedEnumerable<E, ThenByLesser<L, F, L2>>
    where
        F: Fn(&E::Item) -> K,
        L2: Lesser<K>,
    {
        self.then_with(KeyLesser::ascending(key, lesser))
    }

    pub fn then_by_descending<F, K>(self, key: F) -> OrderedEnumerable<E, ThenByLesser<L, F, Order>>
    where
        F: Fn(&E::Item) -> K,
        K: PartialOrd,
    {
        self.then_with(KeyLesser::descending(key, Order))
    }

    pub fn then_by_descending_ls<F, K, L2>(
        self,
        key: F,
        lesser: L2,
    ) -> OrderedEnumerable<E, ThenByLesser<L, F, L2>>
    where
        F: Fn(&E::Item) -> K,
        L2: Lesser<K>,
    {
        self.then_with(KeyLesser::descending(key, lesser))
    }

    fn sort(&mut self) {
        let mut source = self.source.borrow_mut();
        if self.restart_source {
            source.restart();
        }
        let items = to_vec_with(&mut *source, &self.cfg);
        drop(source);
        let lesser = &self.lesser;
        let items = stable_sort(items, &|a: &E::Item, b: &E::Item| lesser.less(a, b));
        #[cfg(feature = "tracing")]
        tracing::trace!(len = items.len(), "ordered buffer sorted");
        self.sorted = Some(SliceEnumerator::new(items));
    }
}

impl<E, L> Enumerator for OrderedEnumerable<E, L>
where
    E: Enumerator,
    E::Item: Clone,
    L: Lesser<E::Item>,
{
    type Item = E::Item;

    fn advance(&mut self) -> bool {
        if self.sorted.is_none() {
            self.sort();
        }
        self.sorted.as_mut().map_or(false, |s| s.advance())
    }

    fn current(&self) -> Option<E::Item> {
        self.sorted.as_ref().and_then(|s| s.current())
    }

    fn restart(&mut self) {
        if let Some(s) = self.sorted.as_mut() {
            s.restart();
        }
    }
}

/// Sort by an ascending key.
pub fn order_by<E, F, K>(
    source: Option<E>,
    key: Option<F>,
) -> Result<OrderedEnumerable<E, KeyLesser<F, Order>>>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    K: PartialOrd,
{
    let source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let ordering = KeyLesser::ascending(key, Order);
    Ok(OrderedEnumerable::new(source, ordering))
}

/// Sort by a key under an explicit ordering.
pub fn order_by_ls<E, F, K, L>(
    source: Option<E>,
    key: Option<F>,
    lesser: Option<L>,
) -> Result<OrderedEnumerable<E, KeyLesser<F, L>>>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let lesser = require(lesser, Error::NilComparer)?;
    let ordering = KeyLesser::ascending(key, lesser);
    Ok(OrderedEnumerable::new(source, ordering))
}

pub fn order_by_descending<E, F, K>(
    source: Option<E>,
    key: Option<F>,
) -> Result<OrderedEnumerable<E, KeyLesser<F, Order>>>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    K: PartialOrd,
{
    let source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let ordering = KeyLesser::descending(key, Order);
    Ok(OrderedEnumerable::new(source, ordering))
}

pub fn order_by_descending_ls<E, F, K, L>(
    source: Option<E>,
    key: Option<F>,
    lesser: Option<L>,
) -> Result<OrderedEnumerable<E, KeyLesser<F, L>>>
where
    E: Enumerator,
    F: Fn(&E::Item) -> K,
    L: Lesser<K>,
{
    let source = require(source, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let lesser = require(lesser, Error::NilComparer)?;
    let ordering = KeyLesser::descending(key, lesser);
    Ok(OrderedEnumerable::new(source, ordering))
}

/// Sort elements by their own ordering.
pub fn order<E>(source: Option<E>) -> Result<OrderedEnumerable<E, Order>>
where
    E: Enumerator,
    E::Item: PartialOrd,
{
    let source = require(source, Error::NilSource)?;
    Ok(OrderedEnumerable::new(source, Order))
}

pub fn order_ls<E, L>(source: Option<E>, lesser: Option<L>) -> Result<OrderedEnumerable<E, L>>
where
    E: Enumerator,
    L: Lesser<E::Item>,
{
    let source = require(source, Error::NilSource)?;
    let lesser = require(lesser, Error::NilComparer)?;
    Ok(OrderedEnumerable::new(source, lesser))
}

pub fn order_descending<E>(source: Option<E>) -> Result<OrderedEnumerable<E, Reverse<Order>>>
where
    E: Enumerator,
    E::Item: PartialOrd,
{
    let source = require(source, Error::NilSource)?;
    Ok(OrderedEnumerable::new(source, Reverse(Order)))
}

pub fn order_descending_ls<E, L>(
    source: Option<E>,
    lesser: Option<L>,
) -> Result<OrderedEnumerable<E, Reverse<L>>>
where
    E: Enumerator,
    L: Lesser<E::Item>,
{
    let source = require(source, Error::NilSource)?;
    let lesser = require(lesser, Error::NilComparer)?;
    Ok(OrderedEnumerable::new(source, Reverse(lesser)))
}

pub fn then_by<E, L, F, K>(
    ordered: Option<OrderedEnumerable<E, L>>,
    key: Option<F>,
) -> Result<OrderedEnumerable<E, ThenByLesser<L, F, Order>>>
where
    E: Enumerator,
    L: Lesser<E::Item>,
    F: Fn(&E::Item) -> K,
    K: PartialOrd,
{
    let ordered = require(ordered, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    Ok(ordered.then_by(key))
}

pub fn then_by_ls<E, L, F, K, L2>(
    ordered: Option<OrderedEnumerable<E, L>>,
    key: Option<F>,
    lesser: Option<L2>,
) -> Result<OrderedEnumerable<E, ThenByLesser<L, F, L2>>>
where
    E: Enumerator,
    L: Lesser<E::Item>,
    F: Fn(&E::Item) -> K,
    L2: Lesser<K>,
{
    let ordered = require(ordered, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let lesser = require(lesser, Error::NilComparer)?;
    Ok(ordered.then_by_ls(key, lesser))
}

pub fn then_by_descending<E, L, F, K>(
    ordered: Option<OrderedEnumerable<E, L>>,
    key: Option<F>,
) -> Result<OrderedEnumerable<E, ThenByLesser<L, F, Order>>>
where
    E: Enumerator,
    L: Lesser<E::Item>,
    F: Fn(&E::Item) -> K,
    K: PartialOrd,
{
    let ordered = require(ordered, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    Ok(ordered.then_by_descending(key))
}

pub fn then_by_descending_ls<E, L, F, K, L2>(
    ordered: Option<OrderedEnumerable<E, L>>,
    key: Option<F>,
    lesser: Option<L2>,
) -> Result<OrderedEnumerable<E, ThenByLesser<L, F, L2>>>
where
    E: Enumerator,
    L: Lesser<E::Item>,
    F: Fn(&E::Item) -> K,
    L2: Lesser<K>,
{
    let ordered = require(ordered, Error::NilSource)?;
    let key = require(key, Error::NilSelector)?;
    let lesser = require(lesser, Error::NilComparer)?;
    Ok(ordered.then_by_descending_ls(key, lesser))
}
