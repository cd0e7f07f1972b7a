//! Method-call surface over the free functions.
//!
//! `CursorExt` chains single-use cursors. `SequenceExt` builds reusable lazy
//! pipelines (`map`/`filter`/`take` return new sequences) and runs terminal
//! operations on a fresh cursor per call.

use std::hash::Hash;

use pullseq_core::prelude::{Cursor, Sequence};

use crate::filter::{Filter, Filtered};
use crate::iter::Values;
use crate::map::{Map, Mapped};
use crate::partition::Partition;
use crate::take::{Take, Taken};
use crate::terminal;

pub trait CursorExt: Cursor + Sized {
    fn map<U, F>(self, f: F) -> Map<Self, F, U>
    where
        F: FnMut(&Self::Item) -> U,
    {
        Map::new(self, f)
    }

    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, pred)
    }

    fn take(self, n: usize) -> Take<Self> {
        Take::new(self, n)
    }

    fn find_index<P>(self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::find_index(self, pred)
    }

    fn group_by<K, F>(self, key: F) -> Partition<K, Self::Item>
    where
        Self::Item: Clone,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        terminal::group_by(self, key)
    }

    fn top_k<R, F>(self, score: F, k: usize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        R: PartialOrd,
        F: FnMut(&Self::Item) -> R,
    {
        terminal::top_k(self, score, k)
    }

    fn materialize(self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        terminal::materialize(self)
    }

    /// Hand the cursor to code that wants an `Iterator`.
    fn values(self) -> Values<Self> {
        Values::new(self)
    }
}

impl<C: Cursor> CursorExt for C {}

pub trait SequenceExt: Sequence + Sized {
    fn map<U, F>(self, f: F) -> Mapped<Self, F, U>
    where
        F: FnMut(&Self::Item) -> U + Clone,
    {
        Mapped::new(self, f)
    }

    fn filter<P>(self, pred: P) -> Filtered<Self, P>
    where
        P: FnMut(&Self::Item) -> bool + Clone,
    {
        Filtered::new(self, pred)
    }

    fn take(self, n: usize) -> Taken<Self> {
        Taken::new(self, n)
    }

    fn find_index<P>(&self, pred: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::find_index(self.cursor(), pred)
    }

    fn group_by<K, F>(&self, key: F) -> Partition<K, Self::Item>
    where
        Self::Item: Clone,
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        terminal::group_by(self.cursor(), key)
    }

    fn top_k<R, F>(&self, score: F, k: usize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
        R: PartialOrd,
        F: FnMut(&Self::Item) -> R,
    {
        terminal::top_k(self.cursor(), score, k)
    }

    fn materialize(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        terminal::materialize(self.cursor())
    }
}

impl<S: Sequence> SequenceExt for S {}
