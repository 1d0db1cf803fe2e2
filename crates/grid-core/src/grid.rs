// File: crates/grid-core/src/grid.rs
// Summary: DataGrid component: nest/sort/slice pipeline over a dimension, rendered as sectioned lists.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use serde::Serialize;

use crate::dimension::Dimension;
use crate::error::GridError;
use crate::key::{ascending, Key, OrderFn};
use crate::reconcile::{join_keyed, join_positional};
use crate::surface::{Element, Surface};

/// CSS class stamped on each top-level section container.
pub const GRID_SECTION_CLASS: &str = "grid-section";
/// CSS class stamped on each item node within a section.
pub const GRID_ITEM_CLASS: &str = "grid-item";

const DEFAULT_SIZE: usize = 999;

/// Derives a key from a record.
pub type KeyFn<R> = Box<dyn Fn(&R) -> Key>;
/// Renders one record to HTML.
pub type HtmlFn<R> = Box<dyn Fn(&R) -> String>;
/// Renders one section's label HTML from its key and member records.
pub type SectionHtmlFn<R> = Box<dyn Fn(&Key, &[R]) -> String>;

/// One section of the nested output: a distinct key and its member records in
/// their already-sorted-and-sliced relative order.
#[derive(Clone, Debug)]
pub struct SectionEntry<R> {
    pub key: Key,
    pub values: Vec<R>,
}

/// Grid component: renders the dimension's top records as
/// sectioned HTML lists under the anchor node, re-deriving everything on each
/// render or redraw.
///
/// All accessors are late-bound: swapping one between renders affects the next
/// render, including the default section label, which always reflects the key
/// produced by the current section accessor.
pub struct DataGrid<R> {
    anchor: String,
    dimension: Rc<dyn Dimension<R>>,
    section: Option<KeyFn<R>>,
    size: usize,
    html: Option<HtmlFn<R>>,
    html_section: Option<SectionHtmlFn<R>>,
    sort_by: Option<KeyFn<R>>,
    order: OrderFn,
    begin_slice: usize,
    end_slice: Option<usize>,
}

impl<R> DataGrid<R> {
    /// `anchor` is the class selector of this grid's root node on the surface.
    pub fn new(anchor: impl Into<String>, dimension: Rc<dyn Dimension<R>>) -> Self {
        Self {
            anchor: anchor.into(),
            dimension,
            section: None,
            size: DEFAULT_SIZE,
            html: None,
            html_section: None,
            sort_by: None,
            order: Box::new(ascending),
            begin_slice: 0,
            end_slice: None,
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Grouping key function. Left unset, every record lands in one catch-all
    /// section keyed by the empty string.
    pub fn set_section(&mut self, f: impl Fn(&R) -> Key + 'static) -> &mut Self {
        self.section = Some(Box::new(f));
        self
    }

    pub fn section(&self) -> Option<&KeyFn<R>> {
        self.section.as_ref()
    }

    /// Cap on records fetched from the dimension (default 999).
    pub fn set_size(&mut self, size: usize) -> &mut Self {
        self.size = size;
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Per-item HTML renderer. Left unset, items render a diagnostic string
    /// containing the JSON encoding of the record.
    pub fn set_html(&mut self, f: impl Fn(&R) -> String + 'static) -> &mut Self {
        self.html = Some(Box::new(f));
        self
    }

    pub fn html(&self) -> Option<&HtmlFn<R>> {
        self.html.as_ref()
    }

    /// Per-section label renderer. Left unset, sections render an `<h1>` with
    /// the section key.
    pub fn set_html_section(&mut self, f: impl Fn(&Key, &[R]) -> String + 'static) -> &mut Self {
        self.html_section = Some(Box::new(f));
        self
    }

    pub fn html_section(&self) -> Option<&SectionHtmlFn<R>> {
        self.html_section.as_ref()
    }

    /// Per-item sort key. Left unset, records sort by their canonical JSON
    /// encoding (a stable stand-in for identity over opaque records).
    pub fn set_sort_by(&mut self, f: impl Fn(&R) -> Key + 'static) -> &mut Self {
        self.sort_by = Some(Box::new(f));
        self
    }

    pub fn sort_by(&self) -> Option<&KeyFn<R>> {
        self.sort_by.as_ref()
    }

    /// Comparator used for both the record sort and the section-key ordering
    /// (default ascending).
    pub fn set_order(&mut self, f: impl Fn(&Key, &Key) -> std::cmp::Ordering + 'static) -> &mut Self {
        self.order = Box::new(f);
        self
    }

    pub fn order(&self) -> &OrderFn {
        &self.order
    }

    /// Pagination start index into the sorted sequence (default 0).
    pub fn set_begin_slice(&mut self, begin: usize) -> &mut Self {
        self.begin_slice = begin;
        self
    }

    pub fn begin_slice(&self) -> usize {
        self.begin_slice
    }

    /// Pagination end index, exclusive; `None` means unbounded.
    pub fn set_end_slice(&mut self, end: Option<usize>) -> &mut Self {
        self.end_slice = end;
        self
    }

    pub fn end_slice(&self) -> Option<usize> {
        self.end_slice
    }

    /// Renamed to [`set_section`](Self::set_section); forwards with a one-time advisory.
    #[deprecated(note = "renamed to set_section")]
    pub fn set_group(&mut self, f: impl Fn(&R) -> Key + 'static) -> &mut Self {
        static WARNED: AtomicBool = AtomicBool::new(false);
        warn_once(&WARNED, "set_group is deprecated, use set_section instead");
        self.set_section(f)
    }

    /// Renamed to [`set_html_section`](Self::set_html_section); forwards with a one-time advisory.
    #[deprecated(note = "renamed to set_html_section")]
    pub fn set_html_group(&mut self, f: impl Fn(&Key, &[R]) -> String + 'static) -> &mut Self {
        static WARNED: AtomicBool = AtomicBool::new(false);
        warn_once(&WARNED, "set_html_group is deprecated, use set_html_section instead");
        self.set_html_section(f)
    }
}

impl<R: Serialize> DataGrid<R> {
    /// The core pipeline: fetch top-`size`, stable-sort, slice, group.
    ///
    /// Section keys come out ordered by the configured comparator; members
    /// keep their sorted-and-sliced relative order.
    pub fn nest_entries(&self) -> Vec<SectionEntry<R>> {
        let records = self.dimension.top(self.size);

        let mut keyed: Vec<(Key, R)> = records
            .into_iter()
            .map(|r| (self.sort_key(&r), r))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| (self.order)(a, b));

        let len = keyed.len();
        let begin = self.begin_slice.min(len);
        let end = self.end_slice.map_or(len, |e| e.min(len)).max(begin);

        let mut sections: Vec<SectionEntry<R>> = Vec::new();
        for (_, record) in keyed.drain(..).skip(begin).take(end - begin) {
            let key = match &self.section {
                Some(f) => f(&record),
                None => Key::text(""),
            };
            match sections.iter_mut().find(|s| s.key == key) {
                Some(section) => section.values.push(record),
                None => sections.push(SectionEntry {
                    key,
                    values: vec![record],
                }),
            }
        }
        sections.sort_by(|a, b| (self.order)(&a.key, &b.key));
        sections
    }

    /// Full render: clear prior section containers, re-derive the nesting, and
    /// join sections (keyed) then items (positional) into the anchor node.
    pub fn render(&mut self, surface: &mut Surface) -> Result<(), GridError> {
        let entries = self.nest_entries();
        log::debug!(
            "rendering grid '{}': {} sections",
            self.anchor,
            entries.len()
        );

        let anchor = surface.select_class(&self.anchor)?;
        anchor
            .children
            .retain(|c| !c.has_class(GRID_SECTION_CLASS));

        join_keyed(
            anchor,
            GRID_SECTION_CLASS,
            &entries,
            |e| e.key.clone(),
            |e| {
                let mut el = Element::new("div");
                el.html = self.section_label(&e.key, &e.values);
                el
            },
        );

        for entry in &entries {
            let container = anchor
                .children
                .iter_mut()
                .find(|c| c.has_class(GRID_SECTION_CLASS) && c.key.as_ref() == Some(&entry.key));
            if let Some(container) = container {
                join_positional(container, &entry.values, |r| {
                    let mut el = Element::with_class("div", GRID_ITEM_CLASS);
                    el.html = self.item_html(r);
                    el
                });
            }
        }
        Ok(())
    }

    /// Same full recomputation as [`render`](Self::render); no incremental path.
    pub fn redraw(&mut self, surface: &mut Surface) -> Result<(), GridError> {
        self.render(surface)
    }

    fn sort_key(&self, record: &R) -> Key {
        match &self.sort_by {
            Some(f) => f(record),
            None => Key::Text(serde_json::to_string(record).unwrap_or_default()),
        }
    }

    fn item_html(&self, record: &R) -> String {
        match &self.html {
            Some(f) => f(record),
            None => format!(
                "you need to provide an html() handler: {}",
                serde_json::to_string(record).unwrap_or_default()
            ),
        }
    }

    fn section_label(&self, key: &Key, values: &[R]) -> String {
        match &self.html_section {
            Some(f) => f(key, values),
            None => format!("<h1 class=\"grid-section-title\">{key}</h1>"),
        }
    }
}

fn warn_once(flag: &AtomicBool, message: &str) {
    if !flag.swap(true, AtomicOrdering::Relaxed) {
        log::warn!("{message}");
    }
}
