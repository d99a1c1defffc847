// src/core/select.rs
//! Declarative cell lookup inside one table row.
//!
//! A [`FieldRule`] names a `<td>` by one of four strategies ([`CellRule`]) and
//! optionally a nested element inside it ([`InnerRule`]) that holds the text.
//! Class matching is on the *exact* class token set (order-insensitive):
//! `no-wrap text-right` does not match a cell classed
//! `no-wrap market-cap text-right`. The page relies on this to tell the plain
//! numeric columns apart from the market-cap and supply columns.

use std::collections::BTreeSet;

use scraper::ElementRef;

/// Exact set of class tokens, parsed from a space-separated string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSet(BTreeSet<String>);

impl ClassSet {
    pub fn new(classes: &str) -> Self {
        Self(classes.split_whitespace().map(String::from).collect())
    }

    pub fn matches(&self, el: &ElementRef) -> bool {
        let found: BTreeSet<&str> = el.value().classes().collect();
        found.len() == self.0.len() && self.0.iter().all(|c| found.contains(c.as_str()))
    }
}

/// How to pick the cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellRule {
    /// First `<td>` carrying exactly these classes
    ByClass(ClassSet),
    /// First `<td>` whose attribute `name` equals `value`
    ByDataAttribute { name: String, value: String },
    /// The n-th `<td>` of the row (0-based)
    ByPosition(usize),
    /// The n-th `<td>` among those carrying exactly these classes (0-based)
    ByClassAt { classes: ClassSet, nth: usize },
}

/// Element inside the cell that holds the display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InnerRule {
    pub tag: String,
    pub classes: Option<ClassSet>,
}

impl InnerRule {
    pub fn tag(tag: &str) -> Self {
        Self { tag: s!(tag), classes: None }
    }

    pub fn tag_with_classes(tag: &str, classes: &str) -> Self {
        Self { tag: s!(tag), classes: Some(ClassSet::new(classes)) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub cell: CellRule,
    pub inner: Option<InnerRule>,
}

impl FieldRule {
    pub fn cell(cell: CellRule) -> Self {
        Self { cell, inner: None }
    }

    pub fn nested(cell: CellRule, inner: InnerRule) -> Self {
        Self { cell, inner: Some(inner) }
    }
}

/// All `<td>` elements under `row`, in document order.
pub fn cells<'a>(row: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    row.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
}

/// Locate the cell a rule points at.
pub fn find_cell<'a>(row: ElementRef<'a>, rule: &CellRule) -> Option<ElementRef<'a>> {
    match rule {
        CellRule::ByClass(classes) => cells(row).find(|td| classes.matches(td)),
        CellRule::ByDataAttribute { name, value } => {
            cells(row).find(|td| td.value().attr(name) == Some(value.as_str()))
        }
        CellRule::ByPosition(n) => cells(row).nth(*n),
        CellRule::ByClassAt { classes, nth } => {
            cells(row).filter(|td| classes.matches(td)).nth(*nth)
        }
    }
}

/// First descendant of `cell` satisfying `inner`.
pub fn find_inner<'a>(cell: ElementRef<'a>, inner: &InnerRule) -> Option<ElementRef<'a>> {
    cell.descendants()
        .skip(1) // the cell itself
        .filter_map(ElementRef::wrap)
        .find(|el| {
            el.value().name().eq_ignore_ascii_case(&inner.tag)
                && inner.classes.as_ref().is_none_or(|c| c.matches(el))
        })
}

/// Element whose text a field rule resolves to.
pub fn find_field<'a>(row: ElementRef<'a>, rule: &FieldRule) -> Option<ElementRef<'a>> {
    let cell = find_cell(row, &rule.cell)?;
    match &rule.inner {
        Some(inner) => find_inner(cell, inner),
        None => Some(cell),
    }
}

/// Concatenated text of all descendant text nodes.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}
