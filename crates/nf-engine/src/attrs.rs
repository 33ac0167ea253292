//! Set operations over attribute-name lists.
//!
//! Attribute lists are declaration-ordered `Vec<String>` treated as sets;
//! these helpers keep the first-occurrence order so every derived table's
//! column order stays deterministic.

pub(crate) fn contains(set: &[String], attribute: &str) -> bool {
    set.iter().any(|a| a == attribute)
}

/// True when every element of `a` occurs in `b`.
pub(crate) fn is_subset(a: &[String], b: &[String]) -> bool {
    a.iter().all(|item| contains(b, item))
}

/// Equality as sets, ignoring order and multiplicity.
pub(crate) fn set_eq(a: &[String], b: &[String]) -> bool {
    is_subset(a, b) && is_subset(b, a)
}

/// True when `a` is a subset of `b` but not equal to it.
pub(crate) fn is_strict_subset(a: &[String], b: &[String]) -> bool {
    is_subset(a, b) && !is_subset(b, a)
}

pub(crate) fn intersects(a: &[String], b: &[String]) -> bool {
    a.iter().any(|item| contains(b, item))
}

pub(crate) fn push_unique(set: &mut Vec<String>, attribute: &str) {
    if !contains(set, attribute) {
        set.push(attribute.to_string());
    }
}

/// `a ∪ b`, keeping the order of first occurrence.
pub(crate) fn union(a: &[String], b: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        push_unique(&mut out, item);
    }
    out
}

/// `a − b`, keeping the order of `a`.
pub(crate) fn difference(a: &[String], b: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    for item in a {
        if !contains(b, item) {
            push_unique(&mut out, item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn subset_and_strictness() {
        let key = set(&["A", "B"]);
        assert!(is_subset(&set(&["A"]), &key));
        assert!(is_strict_subset(&set(&["A"]), &key));
        assert!(!is_strict_subset(&set(&["B", "A"]), &key));
        assert!(set_eq(&set(&["B", "A"]), &key));
        assert!(!is_subset(&set(&["A", "C"]), &key));
    }

    #[test]
    fn union_and_difference_keep_first_occurrence_order() {
        assert_eq!(
            union(&set(&["B", "A"]), &set(&["A", "C"])),
            set(&["B", "A", "C"])
        );
        assert_eq!(
            difference(&set(&["A", "B", "C"]), &set(&["B"])),
            set(&["A", "C"])
        );
    }
}
