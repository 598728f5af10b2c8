//! Sort direction and the default comparator.

use std::cmp::Ordering;

/// Direction of the active sort.
///
/// `Descending` is the first-click state and carries the multiplier `+1`;
/// `Ascending` carries `-1`. Comparators receive the direction and apply the
/// sign themselves, so with [`simple_sort_func`] a `Descending` sort orders
/// ordinary values from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Descending,
    Ascending,
}

impl SortDirection {
    /// Numeric sign handed to comparators.
    pub fn multiplier(self) -> i32 {
        match self {
            SortDirection::Descending => 1,
            SortDirection::Ascending => -1,
        }
    }

    /// Multiply a natural ordering by this direction's sign.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Descending => ordering,
            SortDirection::Ascending => ordering.reverse(),
        }
    }
}

/// Default comparator over nullable, orderable values.
///
/// Two missing values are equal. A missing value compares greater than any
/// present one before the direction is applied, so missing values trail under
/// `Descending` and lead under `Ascending`. Present values use their natural
/// order. A value that is not comparable with itself (NaN) counts as
/// missing, which keeps the ordering total.
pub fn simple_sort_func<V>(a: Option<&V>, b: Option<&V>, direction: SortDirection) -> Ordering
where
    V: PartialOrd + ?Sized,
{
    let natural = match (orderable(a), orderable(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    };
    direction.apply(natural)
}

fn orderable<V: PartialOrd + ?Sized>(value: Option<&V>) -> Option<&V> {
    value.filter(|v| v.partial_cmp(v).is_some())
}
