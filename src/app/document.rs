//! Document - Presentation Context
//!
//! In-memory model of the parts of a page the preference managers touch: class
//! lists and attributes of the root and body elements, `<meta>` hints, and
//! events dispatched for document-level listeners.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use crate::eventing::SiteEvent;

/// Which element an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The root (`<html>`) element
    Root,
    Body,
}

/// Class list and attributes of one element
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|class| class == name)
    }

    pub fn add_class(&mut self, name: &str) {
        if !self.has_class(name) {
            self.classes.push(name.to_string());
        }
    }

    pub fn remove_class(&mut self, name: &str) {
        self.classes.retain(|class| class != name);
    }

    /// Space-separated class list
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    /// Replace the whole class list. Duplicates and blanks are dropped.
    pub fn set_class_name(&mut self, class_name: &str) {
        self.classes.clear();
        for name in class_name.split_whitespace() {
            self.add_class(name);
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// Point-in-time copy of the whole document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentSnapshot {
    pub root: Element,
    pub body: Element,
    pub meta: BTreeMap<String, String>,
    pub events: Vec<SiteEvent>,
}

#[derive(Debug, Default)]
struct DocumentInner {
    root: Element,
    body: Element,
    meta: BTreeMap<String, String>,
    events: Vec<SiteEvent>,
}

impl DocumentInner {
    fn element(&self, target: Target) -> &Element {
        match target {
            Target::Root => &self.root,
            Target::Body => &self.body,
        }
    }

    fn element_mut(&mut self, target: Target) -> &mut Element {
        match target {
            Target::Root => &mut self.root,
            Target::Body => &mut self.body,
        }
    }
}

/// Shared handle to the page. Clones address the same document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against one element
    pub fn update(&self, target: Target, f: impl FnOnce(&mut Element)) {
        f(self.inner.borrow_mut().element_mut(target));
    }

    pub fn has_class(&self, target: Target, name: &str) -> bool {
        self.inner.borrow().element(target).has_class(name)
    }

    pub fn add_class(&self, target: Target, name: &str) {
        self.update(target, |element| element.add_class(name));
    }

    pub fn remove_class(&self, target: Target, name: &str) {
        self.update(target, |element| element.remove_class(name));
    }

    pub fn class_name(&self, target: Target) -> String {
        self.inner.borrow().element(target).class_name()
    }

    pub fn set_class_name(&self, target: Target, class_name: &str) {
        self.update(target, |element| element.set_class_name(class_name));
    }

    pub fn attribute(&self, target: Target, name: &str) -> Option<String> {
        self.inner
            .borrow()
            .element(target)
            .attribute(name)
            .map(str::to_string)
    }

    pub fn set_attribute(&self, target: Target, name: &str, value: &str) {
        self.update(target, |element| element.set_attribute(name, value));
    }

    /// Content of `<meta name=..>`
    pub fn meta(&self, name: &str) -> Option<String> {
        self.inner.borrow().meta.get(name).cloned()
    }

    /// Create or update `<meta name=.. content=..>`
    pub fn set_meta(&self, name: &str, content: &str) {
        self.inner
            .borrow_mut()
            .meta
            .insert(name.to_string(), content.to_string());
    }

    pub fn dispatch(&self, event: SiteEvent) {
        self.inner.borrow_mut().events.push(event);
    }

    /// Events dispatched so far, oldest first
    pub fn events(&self) -> Vec<SiteEvent> {
        self.inner.borrow().events.clone()
    }

    /// Drain dispatched events
    pub fn take_events(&self) -> Vec<SiteEvent> {
        std::mem::take(&mut self.inner.borrow_mut().events)
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let inner = self.inner.borrow();
        DocumentSnapshot {
            root: inner.root.clone(),
            body: inner.body.clone(),
            meta: inner.meta.clone(),
            events: inner.events.clone(),
        }
    }
}
