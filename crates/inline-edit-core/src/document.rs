//! Document model for inline editing.
//!
//! The edit lifecycle never touches markup directly. Everything it needs from
//! the surrounding document (finding elements, reading and writing attributes,
//! content and widget values, toggling visibility) goes through the
//! [`Document`] capability trait.
//!
//! [`ElementTree`] is the in-process implementation: an arena of elements
//! with stable [`ElementId`] keys and parent-child ownership, where removing
//! an element from the tree destroys its whole subtree.
//!
//! # Content Model
//!
//! Each element carries a display text and an ordered list of child
//! elements. [`Document::set_content`] replaces both (the text is set, the
//! children are destroyed), which is the equivalent of replacing an element's
//! inner markup with plain text.
//!
//! To put markup back later, take a [`ContentSnapshot`] first and keep the
//! children alive with [`Document::detach_children`];
//! [`Document::restore_content`] re-attaches the very same elements.
//!
//! # Example
//!
//! ```
//! use inline_edit_core::{Document, ElementTree};
//!
//! let mut doc = ElementTree::new();
//! let table = doc.create_element("table");
//! let row = doc.append_element(table, "tr").unwrap();
//! let cell = doc.append_element(row, "td").unwrap();
//! doc.set_attribute(cell, "inlineEdit-type", "text").unwrap();
//! doc.set_content(cell, "Widget").unwrap();
//!
//! assert_eq!(doc.closest(cell, "tr").unwrap(), Some(row));
//! assert_eq!(doc.attribute(cell, "inlineedit-type").unwrap().as_deref(), Some("text"));
//! ```

use slotmap::{SlotMap, new_key_type};

use crate::error::{DocumentError, DocumentResult};

new_key_type! {
    /// A unique identifier for an element in a document.
    ///
    /// `ElementId`s are stable handles that remain valid while the element is
    /// part of the document. They become invalid when the element is destroyed.
    pub struct ElementId;
}

/// An element's own text and child list, captured for
/// [`Document::restore_content`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSnapshot {
    text: String,
    children: Vec<ElementId>,
}

impl ContentSnapshot {
    /// The element's own text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The children, in document order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Capability set the edit lifecycle needs from a document.
///
/// All operations on an unknown element fail with
/// [`DocumentError::InvalidElementId`]. Attribute names are case-insensitive.
pub trait Document {
    /// Create a detached element with the given tag.
    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Get the element's tag name (lowercase).
    fn tag(&self, id: ElementId) -> DocumentResult<&str>;

    /// Get the element's parent, if attached.
    fn parent(&self, id: ElementId) -> DocumentResult<Option<ElementId>>;

    /// Get the element's children in document order.
    fn children(&self, id: ElementId) -> DocumentResult<Vec<ElementId>>;

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent.
    fn append_child(&mut self, parent: ElementId, child: ElementId) -> DocumentResult<()>;

    /// Read an attribute value.
    fn attribute(&self, id: ElementId, name: &str) -> DocumentResult<Option<String>>;

    /// Set (or overwrite) an attribute.
    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> DocumentResult<()>;

    /// Remove an attribute. Removing an absent attribute is not an error.
    fn remove_attribute(&mut self, id: ElementId, name: &str) -> DocumentResult<()>;

    /// Get the element's own display text, without its children's.
    fn content(&self, id: ElementId) -> DocumentResult<String>;

    /// Replace the element's content with text, destroying all its children.
    fn set_content(&mut self, id: ElementId, content: &str) -> DocumentResult<()>;

    /// Replace the element's content with a single child element.
    fn replace_content(&mut self, id: ElementId, child: ElementId) -> DocumentResult<()>;

    /// Detach every child of `id` without destroying it and return them in
    /// document order.
    fn detach_children(&mut self, id: ElementId) -> DocumentResult<Vec<ElementId>>;

    /// Remove an element and all its descendants.
    fn destroy(&mut self, id: ElementId) -> DocumentResult<()>;

    /// Get the live value of a form widget.
    ///
    /// For `select` elements this is the value of the selected option, or of
    /// the first option when none is marked selected.
    fn value(&self, id: ElementId) -> DocumentResult<Option<String>>;

    /// Set the live value of a form widget.
    ///
    /// For `select` elements this marks the option with a matching value as
    /// selected and clears the mark on every other option.
    fn set_value(&mut self, id: ElementId, value: &str) -> DocumentResult<()>;

    /// Show or hide an element.
    fn set_visible(&mut self, id: ElementId, visible: bool) -> DocumentResult<()>;

    /// Check whether an element is shown.
    fn is_visible(&self, id: ElementId) -> DocumentResult<bool>;

    /// Check whether the element's `class` attribute contains `class`.
    fn has_class(&self, id: ElementId, class: &str) -> DocumentResult<bool> {
        Ok(self
            .attribute(id, "class")?
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class)))
    }

    /// Get the rendered text of an element: its own text followed by the text
    /// of every descendant in document order.
    fn text_content(&self, id: ElementId) -> DocumentResult<String> {
        let mut text = self.content(id)?;
        for descendant in self.descendants(id)? {
            text.push_str(&self.content(descendant)?);
        }
        Ok(text)
    }

    /// Capture the element's own text and child list.
    ///
    /// The snapshot holds handles, not copies: the children must stay alive
    /// (attached or detached) until the snapshot is restored or released.
    fn snapshot_content(&self, id: ElementId) -> DocumentResult<ContentSnapshot> {
        Ok(ContentSnapshot {
            text: self.content(id)?,
            children: self.children(id)?,
        })
    }

    /// Put back the content captured in `snapshot`.
    ///
    /// Current children that are not part of the snapshot are destroyed, the
    /// snapshot's children are re-attached in their original order.
    fn restore_content(&mut self, id: ElementId, snapshot: &ContentSnapshot) -> DocumentResult<()> {
        for child in self.detach_children(id)? {
            if !snapshot.children.contains(&child) {
                self.destroy(child)?;
            }
        }
        self.set_content(id, &snapshot.text)?;
        for &child in &snapshot.children {
            self.append_child(id, child)?;
        }
        Ok(())
    }

    /// Destroy the snapshot's children that are still alive and detached.
    ///
    /// Children that were re-attached somewhere or already destroyed are left
    /// alone.
    fn release_snapshot(&mut self, snapshot: &ContentSnapshot) -> DocumentResult<()> {
        for &child in &snapshot.children {
            if let Ok(None) = self.parent(child) {
                self.destroy(child)?;
            }
        }
        Ok(())
    }

    /// Get all ancestors from immediate parent to root.
    fn ancestors(&self, id: ElementId) -> DocumentResult<Vec<ElementId>> {
        let mut result = Vec::new();
        let mut current = self.parent(id)?;
        while let Some(current_id) = current {
            result.push(current_id);
            current = self.parent(current_id)?;
        }
        Ok(result)
    }

    /// Get all descendants in depth-first pre-order, excluding `id` itself.
    fn descendants(&self, id: ElementId) -> DocumentResult<Vec<ElementId>> {
        let mut result = Vec::new();
        let mut stack: Vec<ElementId> = self.children(id)?.into_iter().rev().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.children(current)?.into_iter().rev());
        }
        Ok(result)
    }

    /// Find descendants of `scope` with the given tag.
    fn find_by_tag(&self, scope: ElementId, tag: &str) -> DocumentResult<Vec<ElementId>> {
        let mut found = Vec::new();
        for id in self.descendants(scope)? {
            if self.tag(id)?.eq_ignore_ascii_case(tag) {
                found.push(id);
            }
        }
        Ok(found)
    }

    /// Find descendants of `scope` carrying the given class.
    fn find_by_class(&self, scope: ElementId, class: &str) -> DocumentResult<Vec<ElementId>> {
        let mut found = Vec::new();
        for id in self.descendants(scope)? {
            if self.has_class(id, class)? {
                found.push(id);
            }
        }
        Ok(found)
    }

    /// Find the element itself or its nearest ancestor with the given tag.
    fn closest(&self, id: ElementId, tag: &str) -> DocumentResult<Option<ElementId>> {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if self.tag(current_id)?.eq_ignore_ascii_case(tag) {
                return Ok(Some(current_id));
            }
            current = self.parent(current_id)?;
        }
        Ok(None)
    }

    /// Get the selected `option` child of a `select`, falling back to the
    /// first option.
    fn selected_option(&self, select: ElementId) -> DocumentResult<Option<ElementId>> {
        let mut first = None;
        for child in self.children(select)? {
            if !self.tag(child)?.eq_ignore_ascii_case("option") {
                continue;
            }
            if self.attribute(child, "selected")?.is_some() {
                return Ok(Some(child));
            }
            if first.is_none() {
                first = Some(child);
            }
        }
        Ok(first)
    }
}

/// Internal data stored for each element.
#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    /// Attributes in insertion order, names lowercased.
    attributes: Vec<(String, String)>,
    text: String,
    value: Option<String>,
    visible: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            text: String::new(),
            value: None,
            visible: true,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// Arena-backed in-memory document.
///
/// Uses SlotMap storage for stable element IDs and efficient parent-child
/// relationship management.
#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    elements: SlotMap<ElementId, ElementData>,
}

impl ElementTree {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            elements: SlotMap::with_key(),
        }
    }

    /// Create an element and append it to `parent`.
    pub fn append_element(&mut self, parent: ElementId, tag: &str) -> DocumentResult<ElementId> {
        let id = self.create_element(tag);
        self.append_child(parent, id)?;
        Ok(id)
    }

    /// Check if an element exists in the document.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of live elements, attached or not.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the document holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn data(&self, id: ElementId) -> DocumentResult<&ElementData> {
        self.elements.get(id).ok_or(DocumentError::InvalidElementId)
    }

    fn data_mut(&mut self, id: ElementId) -> DocumentResult<&mut ElementData> {
        self.elements
            .get_mut(id)
            .ok_or(DocumentError::InvalidElementId)
    }

    /// Remove `id` from its parent's child list.
    fn detach(&mut self, id: ElementId) {
        let old_parent = self.elements.get_mut(id).and_then(|d| d.parent.take());
        if let Some(parent_id) = old_parent {
            if let Some(parent_data) = self.elements.get_mut(parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }
    }

    fn clear_children(&mut self, id: ElementId) -> DocumentResult<()> {
        for child in self.detach_children(id)? {
            self.destroy(child)?;
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, potential_ancestor: ElementId, id: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return true;
            }
            current = self.elements.get(current_id).and_then(|d| d.parent);
        }
        false
    }
}

impl Document for ElementTree {
    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = self.elements.insert(ElementData::new(tag));
        tracing::trace!(target: "inline_edit_core::document", ?id, tag, "created element");
        id
    }

    fn tag(&self, id: ElementId) -> DocumentResult<&str> {
        Ok(self.data(id)?.tag.as_str())
    }

    fn parent(&self, id: ElementId) -> DocumentResult<Option<ElementId>> {
        Ok(self.data(id)?.parent)
    }

    fn children(&self, id: ElementId) -> DocumentResult<Vec<ElementId>> {
        Ok(self.data(id)?.children.clone())
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) -> DocumentResult<()> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(DocumentError::InvalidElementId);
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(DocumentError::CircularParentage);
        }

        self.detach(child);
        self.data_mut(child)?.parent = Some(parent);
        self.data_mut(parent)?.children.push(child);
        Ok(())
    }

    fn attribute(&self, id: ElementId, name: &str) -> DocumentResult<Option<String>> {
        Ok(self
            .data(id)?
            .attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.clone()))
    }

    fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> DocumentResult<()> {
        let data = self.data_mut(id)?;
        match data
            .attributes
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some(pos) => data.attributes[pos].1 = value.to_string(),
            None => data
                .attributes
                .push((name.to_ascii_lowercase(), value.to_string())),
        }
        Ok(())
    }

    fn remove_attribute(&mut self, id: ElementId, name: &str) -> DocumentResult<()> {
        self.data_mut(id)?
            .attributes
            .retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        Ok(())
    }

    fn content(&self, id: ElementId) -> DocumentResult<String> {
        Ok(self.data(id)?.text.clone())
    }

    fn set_content(&mut self, id: ElementId, content: &str) -> DocumentResult<()> {
        self.clear_children(id)?;
        self.data_mut(id)?.text = content.to_string();
        Ok(())
    }

    fn replace_content(&mut self, id: ElementId, child: ElementId) -> DocumentResult<()> {
        if !self.contains(child) {
            return Err(DocumentError::InvalidElementId);
        }
        self.detach(child);
        self.set_content(id, "")?;
        self.append_child(id, child)
    }

    fn detach_children(&mut self, id: ElementId) -> DocumentResult<Vec<ElementId>> {
        let children = std::mem::take(&mut self.data_mut(id)?.children);
        for &child in &children {
            if let Some(data) = self.elements.get_mut(child) {
                data.parent = None;
            }
        }
        Ok(children)
    }

    #[tracing::instrument(skip(self), target = "inline_edit_core::document", level = "trace")]
    fn destroy(&mut self, id: ElementId) -> DocumentResult<()> {
        let doomed = self.descendants(id)?;
        self.detach(id);
        for child_id in doomed {
            self.elements.remove(child_id);
        }
        self.elements.remove(id);
        Ok(())
    }

    fn value(&self, id: ElementId) -> DocumentResult<Option<String>> {
        let data = self.data(id)?;
        if data.tag != "select" {
            return Ok(data.value.clone());
        }
        match self.selected_option(id)? {
            // An option without a value attribute submits its label.
            Some(option) => match self.attribute(option, "value")? {
                Some(value) => Ok(Some(value)),
                None => Ok(Some(self.content(option)?)),
            },
            None => Ok(None),
        }
    }

    fn set_value(&mut self, id: ElementId, value: &str) -> DocumentResult<()> {
        if self.data(id)?.tag != "select" {
            self.data_mut(id)?.value = Some(value.to_string());
            return Ok(());
        }
        for option in self.children(id)? {
            if self.attribute(option, "value")?.as_deref() == Some(value) {
                self.set_attribute(option, "selected", "selected")?;
            } else {
                self.remove_attribute(option, "selected")?;
            }
        }
        Ok(())
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) -> DocumentResult<()> {
        self.data_mut(id)?.visible = visible;
        Ok(())
    }

    fn is_visible(&self, id: ElementId) -> DocumentResult<bool> {
        Ok(self.data(id)?.visible)
    }
}

static_assertions::assert_impl_all!(ElementTree: Send, Sync);
