// File: crates/grid-core/src/reconcile.rs
// Summary: Enter/update/exit joins between a data sequence and existing child nodes.
// Notes:
// - Two join shapes only, scoped to what the grid component needs: keyed for
//   section containers, positional for item nodes within a section. The
//   asymmetry is deliberate and matched by the tests.
// - Surviving nodes are never re-populated; only enter nodes get content.

use crate::key::Key;
use crate::surface::Element;

/// Keyed join over the children of `parent` that carry `class`.
///
/// One child per datum, matched by key: surviving children keep their content
/// untouched, missing ones are created via `on_enter` (the join stamps class
/// and key), absent ones are removed. Children without `class` are left in
/// place ahead of the joined set; joined children end up in data order.
pub fn join_keyed<T>(
    parent: &mut Element,
    class: &str,
    data: &[T],
    key_of: impl Fn(&T) -> Key,
    mut on_enter: impl FnMut(&T) -> Element,
) {
    let mut others = Vec::new();
    let mut pool = Vec::new();
    for child in parent.children.drain(..) {
        if child.has_class(class) {
            pool.push(child);
        } else {
            others.push(child);
        }
    }

    let mut joined = Vec::with_capacity(data.len());
    for datum in data {
        let key = key_of(datum);
        let existing = pool
            .iter()
            .position(|c| c.key.as_ref() == Some(&key))
            .map(|i| pool.remove(i));
        match existing {
            Some(el) => joined.push(el),
            None => {
                let mut el = on_enter(datum);
                el.class = Some(class.to_owned());
                el.key = Some(key);
                joined.push(el);
            }
        }
    }
    // whatever is left in the pool exits

    others.extend(joined);
    parent.children = others;
}

/// Positional join over all children of `parent`.
///
/// Children are matched by index: surplus nodes are removed, missing ones are
/// appended via `on_enter`, and surviving nodes are not rewritten — content
/// changes in the underlying record are invisible unless the set's size or
/// order changes.
pub fn join_positional<T>(
    parent: &mut Element,
    data: &[T],
    mut on_enter: impl FnMut(&T) -> Element,
) {
    parent.children.truncate(data.len());
    for datum in data.iter().skip(parent.children.len()) {
        parent.children.push(on_enter(datum));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(html: &str) -> Element {
        let mut el = Element::new("div");
        el.html = html.to_owned();
        el
    }

    #[test]
    fn keyed_join_reuses_matching_nodes_without_refresh() {
        let mut parent = Element::new("div");
        join_keyed(&mut parent, "sec", &["a", "b"], |d| Key::from(*d), |d| {
            item(&format!("first:{d}"))
        });
        assert_eq!(parent.children.len(), 2);

        // second pass with changed enter content: survivors keep old content
        join_keyed(&mut parent, "sec", &["b", "c"], |d| Key::from(*d), |d| {
            item(&format!("second:{d}"))
        });
        let htmls: Vec<&str> = parent.children.iter().map(|c| c.html.as_str()).collect();
        assert_eq!(htmls, vec!["first:b", "second:c"]);
        assert_eq!(parent.children[0].key, Some(Key::from("b")));
    }

    #[test]
    fn keyed_join_leaves_unclassed_children_alone() {
        let mut parent = Element::new("div");
        parent.children.push(item("static header"));
        join_keyed(&mut parent, "sec", &["a"], |d| Key::from(*d), |_| item("a"));
        assert_eq!(parent.children.len(), 2);
        assert_eq!(parent.children[0].html, "static header");
    }

    #[test]
    fn positional_join_truncates_and_appends() {
        let mut parent = Element::new("div");
        join_positional(&mut parent, &[1, 2, 3], |d| item(&format!("v{d}")));
        assert_eq!(parent.children.len(), 3);

        // shrink: tail removed, head untouched even though enter content differs
        join_positional(&mut parent, &[9], |d| item(&format!("v{d}")));
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].html, "v1");

        // grow: survivors untouched, new tail entered
        join_positional(&mut parent, &[9, 8], |d| item(&format!("v{d}")));
        assert_eq!(parent.children[0].html, "v1");
        assert_eq!(parent.children[1].html, "v8");
    }
}
