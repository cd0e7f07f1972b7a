//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use pullseq::prelude::*;

/// A scored record with an identity, so tie order is observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub id: &'static str,
    pub score: i64,
    pub category: &'static str,
}

pub fn scored(id: &'static str, score: i64, category: &'static str) -> Scored {
    Scored {
        id,
        score,
        category,
    }
}

/// `[(s=5), (s=9,a), (s=9,b), (s=1)]`
pub fn tie_fixture() -> Collection<Scored> {
    Collection::from(vec![
        scored("five", 5, "mid"),
        scored("a", 9, "high"),
        scored("b", 9, "high"),
        scored("one", 1, "low"),
    ])
}

pub fn ids(items: &[Scored]) -> Vec<&'static str> {
    items.iter().map(|s| s.id).collect()
}

/// Cursor over a vector that counts every `advance` it receives,
/// including the ones that report exhaustion.
pub struct Probe<T> {
    items: Vec<T>,
    pos: Slot<usize>,
    pulls: Rc<Cell<usize>>,
}

impl<T> Probe<T> {
    pub fn new(items: Vec<T>) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let probe = Self {
            items,
            pos: Slot::NotStarted,
            pulls: Rc::clone(&pulls),
        };
        (probe, pulls)
    }
}

impl<T> Cursor for Probe<T> {
    type Item = T;

    fn advance(&mut self) -> bool {
        self.pulls.set(self.pulls.get() + 1);
        let next = match &self.pos {
            Slot::NotStarted => 0,
            Slot::Holding(i) => i + 1,
            Slot::Exhausted => return false,
        };
        if next < self.items.len() {
            self.pos.hold(next);
            true
        } else {
            self.pos.exhaust();
            false
        }
    }

    fn current(&self) -> &T {
        &self.items[*self.pos.get()]
    }

    fn phase(&self) -> Phase {
        self.pos.phase()
    }

    fn bound(&self) -> Bound {
        Bound::Finite
    }
}

/// Drive a cursor to exhaustion, cloning what it yields.
pub fn drain<C>(mut cursor: C) -> Vec<C::Item>
where
    C: Cursor,
    C::Item: Clone,
{
    let mut out = Vec::new();
    while cursor.advance() {
        out.push(cursor.current().clone());
    }
    out
}
