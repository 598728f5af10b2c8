use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::sort::{SortDirection, simple_sort_func};

/// Shared, direction-aware row comparator.
///
/// The table passes the active [`SortDirection`] on every comparison and
/// expects the comparator to apply it.
pub struct Comparator<T> {
    func: Rc<dyn Fn(&T, &T, SortDirection) -> Ordering>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Comparator(..)")
    }
}

impl<T: 'static> Comparator<T> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&T, &T, SortDirection) -> Ordering + 'static,
    {
        Self {
            func: Rc::new(func),
        }
    }

    /// Wrap a direction-free comparator; the direction's sign is applied to
    /// its result.
    pub fn plain<F>(func: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Self::new(move |a, b, direction| direction.apply(func(a, b)))
    }

    /// Compare rows by an optional key using [`simple_sort_func`].
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: PartialOrd + 'static,
        F: Fn(&T) -> Option<K> + 'static,
    {
        Self::new(move |a, b, direction| {
            simple_sort_func(key(a).as_ref(), key(b).as_ref(), direction)
        })
    }

    pub fn compare(&self, a: &T, b: &T, direction: SortDirection) -> Ordering {
        (self.func)(a, b, direction)
    }
}
