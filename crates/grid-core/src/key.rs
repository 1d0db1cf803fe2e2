// File: crates/grid-core/src/key.rs
// Summary: Ordered key values plus the comparators shared by record sort and section ordering.

use std::cmp::Ordering;
use std::fmt;

/// A grouping or sort key derived from a record.
///
/// Numbers order before text; numbers compare via `f64::total_cmp` so NaN has
/// a stable position instead of poisoning the sort.
#[derive(Clone, Debug)]
pub enum Key {
    Number(f64),
    Text(String),
}

impl Key {
    pub fn number(n: impl Into<f64>) -> Self {
        Key::Number(n.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Key::Text(s.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Key::Number(n) => Some(*n),
            Key::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Number(_) => None,
            Key::Text(s) => Some(s),
        }
    }
}

// Equality must agree with the total_cmp-based Ord below, so NaN keys
// coalesce into one section instead of each starting its own.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Number(a), Key::Number(b)) => a.total_cmp(b),
            (Key::Text(a), Key::Text(b)) => a.cmp(b),
            (Key::Number(_), Key::Text(_)) => Ordering::Less,
            (Key::Text(_), Key::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0" so labels read naturally.
            Key::Number(n) if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Key::Number(n) => write!(f, "{n}"),
            Key::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<f64> for Key {
    fn from(n: f64) -> Self {
        Key::Number(n)
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Number(n as f64)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Number(n as f64)
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Key::Number(n as f64)
    }
}

/// Boxed comparator used for both the record sort and the section-key ordering.
pub type OrderFn = Box<dyn Fn(&Key, &Key) -> Ordering>;

/// Default comparator: natural ascending `Key` order.
pub fn ascending(a: &Key, b: &Key) -> Ordering {
    a.cmp(b)
}

/// Reversed comparator.
pub fn descending(a: &Key, b: &Key) -> Ordering {
    b.cmp(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sort_before_text() {
        let mut keys = vec![Key::text("a"), Key::number(2.0), Key::number(1.0)];
        keys.sort();
        assert_eq!(keys, vec![Key::number(1.0), Key::number(2.0), Key::text("a")]);
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(Key::number(3.0).to_string(), "3");
        assert_eq!(Key::number(3.5).to_string(), "3.5");
        assert_eq!(Key::text("Tier A").to_string(), "Tier A");
    }

    #[test]
    fn nan_keys_are_equal_to_each_other() {
        assert_eq!(Key::number(f64::NAN), Key::number(f64::NAN));
        assert_ne!(Key::number(f64::NAN), Key::number(1.0));
        assert_eq!(
            ascending(&Key::number(f64::NAN), &Key::number(f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn variant_views_expose_only_their_own_arm() {
        assert_eq!(Key::number(2.5).as_number(), Some(2.5));
        assert_eq!(Key::number(2.5).as_text(), None);
        assert_eq!(Key::text("a").as_text(), Some("a"));
        assert_eq!(Key::text("a").as_number(), None);
    }

    #[test]
    fn descending_reverses_ascending() {
        let a = Key::text("a");
        let b = Key::text("b");
        assert_eq!(ascending(&a, &b), Ordering::Less);
        assert_eq!(descending(&a, &b), Ordering::Greater);
    }
}
