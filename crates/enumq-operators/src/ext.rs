//! Fluent, panicking convenience layer.
//!
//! Every method forwards to the fallible free function of the same name and
//! aborts via [`must`] on error. Callers who want to handle argument errors
//! use the free functions directly.

use std::hash::Hash;

use num_traits::{ToPrimitive, Zero};

use enumq_core::compare::{Equaler, HashEqual, Lesser, Order, Reverse};
use enumq_core::enumerator::{boxed, BoxEnumerator, Iter};
use enumq_core::error::must;
use enumq_core::shared::{tee, Shared};
use enumq_core::source::SliceEnumerator;
use enumq_core::Enumerator;

use crate::aggregate;
use crate::chunk::{self, Chunk};
use crate::group::{self, GroupBy, GroupJoin, Join, Lookup, Same};
use crate::leaf;
use crate::order::{self, KeyLesser, OrderedEnumerable};
use crate::set::{
    self, Distinct, DistinctBy, EqualerSet, Identity, LesserSet, SetFilter, Union, UnionBy,
};
use crate::transform::{self, Concat, Filter, Select, SelectMany, Zip};

pub trait EnumeratorExt: Enumerator + Sized {
    // -- transforms --

    #[track_caller]
    fn select<F, R>(self, selector: F) -> Select<Self, F>
    where
        F: Fn(Self::Item) -> R,
    {
        must(transform::select(Some(self), Some(selector)))
    }

    #[track_caller]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        must(transform::filter(Some(self), Some(predicate)))
    }

    #[track_caller]
    fn concat<B>(self, second: B) -> Concat<Self, B>
    where
        B: Enumerator<Item = Self::Item>,
    {
        must(transform::concat(Some(self), Some(second)))
    }

    #[track_caller]
    fn zip<B, F, R>(self, second: B, selector: F) -> Zip<Self, B, F>
    where
        B: Enumerator,
        F: Fn(Self::Item, B::Item) -> R,
    {
        must(transform::zip(Some(self), Some(second), Some(selector)))
    }

    #[track_caller]
    fn select_many<F, I>(self, selector: F) -> SelectMany<Self, F, I>
    where
        F: Fn(Self::Item) -> I,
        I: Enumerator,
    {
        must(transform::select_many(Some(self), Some(selector)))
    }

    // -- set operators --

    #[track_caller]
    fn distinct(self) -> Distinct<Self, EqualerSet<Self::Item, HashEqual>>
    where
        Self::Item: Hash + Eq + Clone,
    {
        must(set::distinct(Some(self)))
    }

    #[track_caller]
    fn distinct_eq<Q>(self, equaler: Q) -> Distinct<Self, EqualerSet<Self::Item, Option<Q>>>
    where
        Self::Item: PartialEq + Clone,
        Q: Equaler<Self::Item>,
    {
        must(set::distinct_eq(Some(self), Some(equaler)))
    }

    #[track_caller]
    fn distinct_cmp<L>(self, lesser: L) -> Distinct<Self, LesserSet<Self::Item, L>>
    where
        Self::Item: Clone,
        L: Lesser<Self::Item>,
    {
        must(set::distinct_cmp(Some(self), Some(lesser)))
    }

    #[track_caller]
    fn distinct_by<F, K>(self, key: F) -> DistinctBy<Self, F, EqualerSet<K, HashEqual>>
    where
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        must(set::distinct_by(Some(self), Some(key)))
    }

    #[track_caller]
    fn union<B>(self, second: B) -> Union<Self, B, EqualerSet<Self::Item, HashEqual>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        must(set::union(Some(self), Some(second)))
    }

    #[track_caller]
    fn union_eq<B, Q>(
        self,
        second: B,
        equaler: Q,
    ) -> Union<Self, B, EqualerSet<Self::Item, Option<Q>>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: PartialEq + Clone,
        Q: Equaler<Self::Item>,
    {
        must(set::union_eq(Some(self), Some(second), Some(equaler)))
    }

    #[track_caller]
    fn union_cmp<B, L>(self, second: B, lesser: L) -> Union<Self, B, LesserSet<Self::Item, L>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: Clone,
        L: Lesser<Self::Item>,
    {
        must(set::union_cmp(Some(self), Some(second), Some(lesser)))
    }

    #[track_caller]
    fn union_by<B, F, K>(self, second: B, key: F) -> UnionBy<Self, B, F, EqualerSet<K, HashEqual>>
    where
        B: Enumerator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        must(set::union_by(Some(self), Some(second), Some(key)))
    }

    #[track_caller]
    fn intersect<B>(
        self,
        second: B,
    ) -> SetFilter<Self, B, Identity<Self::Item>, EqualerSet<Self::Item, HashEqual>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        must(set::intersect(Some(self), Some(second)))
    }

    #[track_caller]
    fn intersect_eq<B, Q>(
        self,
        second: B,
        equaler: Q,
    ) -> SetFilter<Self, B, Identity<Self::Item>, EqualerSet<Self::Item, Option<Q>>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: PartialEq + Clone,
        Q: Equaler<Self::Item>,
    {
        must(set::intersect_eq(Some(self), Some(second), Some(equaler)))
    }

    #[track_caller]
    fn intersect_cmp<B, L>(
        self,
        second: B,
        lesser: L,
    ) -> SetFilter<Self, B, Identity<Self::Item>, LesserSet<Self::Item, L>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: Clone,
        L: Lesser<Self::Item>,
    {
        must(set::intersect_cmp(Some(self), Some(second), Some(lesser)))
    }

    #[track_caller]
    fn intersect_by<B, F, K>(
        self,
        second: B,
        key: F,
    ) -> SetFilter<Self, B, F, EqualerSet<K, HashEqual>>
    where
        B: Enumerator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        must(set::intersect_by(Some(self), Some(second), Some(key)))
    }

    #[track_caller]
    fn except<B>(
        self,
        second: B,
    ) -> SetFilter<Self, B, Identity<Self::Item>, EqualerSet<Self::Item, HashEqual>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: Hash + Eq + Clone,
    {
        must(set::except(Some(self), Some(second)))
    }

    #[track_caller]
    fn except_eq<B, Q>(
        self,
        second: B,
        equaler: Q,
    ) -> SetFilter<Self, B, Identity<Self::Item>, EqualerSet<Self::Item, Option<Q>>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: PartialEq + Clone,
        Q: Equaler<Self::Item>,
    {
        must(set::except_eq(Some(self), Some(second), Some(equaler)))
    }

    #[track_caller]
    fn except_cmp<B, L>(
        self,
        second: B,
        lesser: L,
    ) -> SetFilter<Self, B, Identity<Self::Item>, LesserSet<Self::Item, L>>
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: Clone,
        L: Lesser<Self::Item>,
    {
        must(set::except_cmp(Some(self), Some(second), Some(lesser)))
    }

    #[track_caller]
    fn except_by<B, F, K>(
        self,
        second: B,
        key: F,
    ) -> SetFilter<Self, B, F, EqualerSet<K, HashEqual>>
    where
        B: Enumerator<Item = Self::Item>,
        F: Fn(&Self::Item) -> K,
        K: Hash + Eq,
    {
        must(set::except_by(Some(self), Some(second), Some(key)))
    }

    // -- grouping --

    #[track_caller]
    fn group_by<KF, K>(
        self,
        key: KF,
    ) -> GroupBy<Self, KF, Same<Self::Item>, HashEqual, K, Self::Item>
    where
        KF: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        must(group::group_by(Some(self), Some(key)))
    }

    #[track_caller]
    fn group_by_eq<KF, K, Q>(
        self,
        key: KF,
        equaler: Q,
    ) -> GroupBy<Self, KF, Same<Self::Item>, Option<Q>, K, Self::Item>
    where
        KF: Fn(&Self::Item) -> K,
        K: PartialEq + Clone,
        Q: Equaler<K>,
    {
        must(group::group_by_eq(Some(self), Some(key), Some(equaler)))
    }

    #[track_caller]
    fn group_by_sel<KF, VF, K, V>(
        self,
        key: KF,
        element: VF,
    ) -> GroupBy<Self, KF, VF, HashEqual, K, V>
    where
        KF: Fn(&Self::Item) -> K,
        VF: Fn(Self::Item) -> V,
        K: Hash + Eq + Clone,
    {
        must(group::group_by_sel(Some(self), Some(key), Some(element)))
    }

    #[track_caller]
    fn to_lookup<KF, K>(self, key: KF) -> Lookup<K, Self::Item, HashEqual>
    where
        KF: Fn(&Self::Item) -> K,
        K: Hash + Eq + Clone,
    {
        must(group::to_lookup(Some(self), Some(key)))
    }

    #[track_caller]
    fn join<I, OK, IK, R, K, T>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> Join<Self, I, OK, IK, R, HashEqual, K>
    where
        I: Enumerator,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(Self::Item, I::Item) -> T,
        K: Hash + Eq + Clone,
    {
        must(group::join(
            Some(self),
            Some(inner),
            Some(outer_key),
            Some(inner_key),
            Some(result),
        ))
    }

    #[track_caller]
    fn group_join<I, OK, IK, R, K, T>(
        self,
        inner: I,
        outer_key: OK,
        inner_key: IK,
        result: R,
    ) -> GroupJoin<Self, I, OK, IK, R, HashEqual, K>
    where
        I: Enumerator,
        OK: Fn(&Self::Item) -> K,
        IK: Fn(&I::Item) -> K,
        R: Fn(Self::Item, SliceEnumerator<I::Item>) -> T,
        K: Hash + Eq + Clone,
    {
        must(group::group_join(
            Some(self),
            Some(inner),
            Some(outer_key),
            Some(inner_key),
            Some(result),
        ))
    }

    #[track_caller]
    fn chunk(self, size: i64) -> Chunk<Self> {
        must(chunk::chunk(Some(self), size))
    }

    // -- ordering --

    #[track_caller]
    fn order(self) -> OrderedEnumerable<Self, Order>
    where
        Self::Item: PartialOrd,
    {
        must(order::order(Some(self)))
    }

    #[track_caller]
    fn order_ls<L>(self, lesser: L) -> OrderedEnumerable<Self, L>
    where
        L: Lesser<Self::Item>,
    {
        must(order::order_ls(Some(self), Some(lesser)))
    }

    #[track_caller]
    fn order_descending(self) -> OrderedEnumerable<Self, Reverse<Order>>
    where
        Self::Item: PartialOrd,
    {
        must(order::order_descending(Some(self)))
    }

    #[track_caller]
    fn order_by<F, K>(self, key: F) -> OrderedEnumerable<Self, KeyLesser<F, Order>>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        must(order::order_by(Some(self), Some(key)))
    }

    #[track_caller]
    fn order_by_ls<F, K, L>(self, key: F, lesser: L) -> OrderedEnumerable<Self, KeyLesser<F, L>>
    where
        F: Fn(&Self::Item) -> K,
        L: Lesser<K>,
    {
        must(order::order_by_ls(Some(self), Some(key), Some(lesser)))
    }

    #[track_caller]
    fn order_by_descending<F, K>(self, key: F) -> OrderedEnumerable<Self, KeyLesser<F, Order>>
    where
        F: Fn(&Self::Item) -> K,
        K: PartialOrd,
    {
        must(order::order_by_descending(Some(self), Some(key)))
    }

    // -- aggregation --

    #[track_caller]
    fn min_value(self) -> Self::Item
    where
        Self::Item: PartialOrd + Clone,
    {
        must(aggregate::min_value(Some(self)))
    }

    #[track_caller]
    fn max_value(self) -> Self::Item
    where
        Self::Item: PartialOrd + Clone,
    {
        must(aggregate::max_value(Some(self)))
    }

    #[track_caller]
    fn min_by<F, K, L>(self, selector: F, lesser: L) -> K
    where
        F: Fn(&Self::Item) -> K,
        L: Lesser<K>,
    {
        must(aggregate::min(Some(self), Some(selector), Some(lesser)))
    }

    #[track_caller]
    fn max_by<F, K, L>(self, selector: F, lesser: L) -> K
    where
        F: Fn(&Self::Item) -> K,
        L: Lesser<K>,
    {
        must(aggregate::max(Some(self), Some(selector), Some(lesser)))
    }

    #[track_caller]
    fn min_el<F, K, L>(self, selector: F, lesser: L) -> Self::Item
    where
        F: Fn(&Self::Item) -> K,
        L: Lesser<K>,
    {
        must(aggregate::min_el(Some(self), Some(selector), Some(lesser)))
    }

    #[track_caller]
    fn max_el<F, K, L>(self, selector: F, lesser: L) -> Self::Item
    where
        F: Fn(&Self::Item) -> K,
        L: Lesser<K>,
    {
        must(aggregate::max_el(Some(self), Some(selector), Some(lesser)))
    }

    #[track_caller]
    fn sum_by<F, N>(self, selector: F) -> N
    where
        F: Fn(Self::Item) -> N,
        N: Zero,
    {
        must(aggregate::sum(Some(self), Some(selector)))
    }

    #[track_caller]
    fn sum_value(self) -> Self::Item
    where
        Self::Item: Zero,
    {
        must(aggregate::sum_value(Some(self)))
    }

    #[track_caller]
    fn average_by<F, N>(self, selector: F) -> f64
    where
        F: Fn(Self::Item) -> N,
        N: ToPrimitive,
    {
        must(aggregate::average(Some(self), Some(selector)))
    }

    #[track_caller]
    fn average_value(self) -> f64
    where
        Self::Item: ToPrimitive,
    {
        must(aggregate::average_value(Some(self)))
    }

    // -- leaves --

    #[track_caller]
    fn count(self) -> usize {
        must(leaf::count(Some(self)))
    }

    #[track_caller]
    fn count_by<P>(self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        must(leaf::count_by(Some(self), Some(predicate)))
    }

    #[track_caller]
    fn contains(self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        must(leaf::contains(Some(self), value))
    }

    #[track_caller]
    fn contains_eq<Q>(self, value: &Self::Item, equaler: Q) -> bool
    where
        Self::Item: PartialEq,
        Q: Equaler<Self::Item>,
    {
        must(leaf::contains_eq(Some(self), value, Some(equaler)))
    }

    #[track_caller]
    fn append(self, element: Self::Item) -> Concat<Self, SliceEnumerator<Self::Item>>
    where
        Self::Item: Clone,
    {
        must(leaf::append(Some(self), element))
    }

    #[track_caller]
    fn prepend(self, element: Self::Item) -> Concat<SliceEnumerator<Self::Item>, Self>
    where
        Self::Item: Clone,
    {
        must(leaf::prepend(Some(self), element))
    }

    #[track_caller]
    fn sequence_equal<B>(self, second: B) -> bool
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: PartialEq,
    {
        must(leaf::sequence_equal(Some(self), Some(second)))
    }

    #[track_caller]
    fn sequence_equal_eq<B, Q>(self, second: B, equaler: Q) -> bool
    where
        B: Enumerator<Item = Self::Item>,
        Self::Item: PartialEq,
        Q: Equaler<Self::Item>,
    {
        must(leaf::sequence_equal_eq(
            Some(self),
            Some(second),
            Some(equaler),
        ))
    }

    #[track_caller]
    fn to_vec(self) -> Vec<Self::Item> {
        must(leaf::to_vec(Some(self)))
    }

    // -- plumbing --

    /// Drive this enumerator with `for` loops and iterator adapters.
    fn iter(self) -> Iter<Self> {
        Iter::new(self)
    }

    fn boxed<'a>(self) -> BoxEnumerator<'a, Self::Item>
    where
        Self: 'a,
    {
        boxed(self)
    }

    /// Entangled handle; see [`Shared`].
    fn shared(self) -> Shared<Self> {
        Shared::new(self)
    }

    fn tee(self) -> (SliceEnumerator<Self::Item>, SliceEnumerator<Self::Item>) {
        tee(self)
    }
}

impl<E: Enumerator> EnumeratorExt for E {}
