// File: crates/grid-core/src/dimension.rs
// Summary: Ranked record-source contract plus a shareable in-memory adapter for demos and tests.

use std::cell::RefCell;
use std::cmp::Ordering;

/// A dimension over some record set, owned by an external dimensional engine.
///
/// `top(n)` returns up to `n` currently-filtered records in the dimension's own
/// ranking order. The grid component only reads through this handle; filtering
/// happens on the engine side between redraws.
pub trait Dimension<R> {
    fn top(&self, n: usize) -> Vec<R>;
}

/// In-memory dimension: a record vector, a ranking comparator, and a settable
/// filter predicate. This is a stand-in collaborator, not a query engine.
///
/// The filter lives behind a `RefCell` so several charts can hold one shared
/// `Rc<MemoryDimension<_>>` while the host mutates the filter between redraws.
pub struct MemoryDimension<R> {
    records: Vec<R>,
    rank: Box<dyn Fn(&R, &R) -> Ordering>,
    filter: RefCell<Option<Box<dyn Fn(&R) -> bool>>>,
}

impl<R: Clone> MemoryDimension<R> {
    pub fn new(records: Vec<R>, rank: impl Fn(&R, &R) -> Ordering + 'static) -> Self {
        Self {
            records,
            rank: Box::new(rank),
            filter: RefCell::new(None),
        }
    }

    /// Install a filter predicate; subsequent `top` calls see only matching records.
    pub fn filter(&self, pred: impl Fn(&R) -> bool + 'static) {
        *self.filter.borrow_mut() = Some(Box::new(pred));
    }

    /// Drop any installed filter.
    pub fn clear_filter(&self) {
        *self.filter.borrow_mut() = None;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Clone> Dimension<R> for MemoryDimension<R> {
    fn top(&self, n: usize) -> Vec<R> {
        let filter = self.filter.borrow();
        let mut out: Vec<R> = match filter.as_ref() {
            Some(pred) => self.records.iter().filter(|r| pred(r)).cloned().collect(),
            None => self.records.clone(),
        };
        out.sort_by(|a, b| (self.rank)(a, b));
        out.truncate(n);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim() -> MemoryDimension<i32> {
        MemoryDimension::new(vec![3, 1, 4, 1, 5], |a, b| b.cmp(a))
    }

    #[test]
    fn top_ranks_and_caps() {
        let d = dim();
        assert_eq!(d.top(3), vec![5, 4, 3]);
        assert_eq!(d.top(99), vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn filter_applies_before_ranking() {
        let d = dim();
        d.filter(|r| *r < 4);
        assert_eq!(d.top(10), vec![3, 1, 1]);
        d.clear_filter();
        assert_eq!(d.top(10).len(), 5);
    }
}
