//! Active annotation tracking.
//!
//! Hovering or focusing an annotation (its marker or its list entry) makes it
//! active; leaving or blurring clears it. The selection only stores the id and
//! notifies subscribers, which re-render the highlighted marker and list item.

use crate::model::AnnotationId;

/// A change of the active annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<AnnotationId>,
    pub current: Option<AnnotationId>,
}

impl SelectionChange {
    /// Whether `id` changed highlight state in this change.
    pub fn affects(&self, id: &str) -> bool {
        self.previous.as_deref() == Some(id) || self.current.as_deref() == Some(id)
    }
}

type Subscriber = Box<dyn FnMut(&SelectionChange)>;

/// Holds the active annotation id.
#[derive(Default)]
pub struct Selection {
    active: Option<AnnotationId>,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active annotation.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Register a callback run synchronously on every change.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&SelectionChange) + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    /// Set the active annotation. Returns the change, or `None` if the id was
    /// already active.
    pub fn set_active(&mut self, id: Option<&str>) -> Option<SelectionChange> {
        if self.active.as_deref() == id {
            return None;
        }

        let change = SelectionChange {
            previous: self.active.take(),
            current: id.map(str::to_owned),
        };
        self.active = change.current.clone();
        log::trace!("Active annotation: {:?}", self.active);

        for subscriber in &mut self.subscribers {
            subscriber(&change);
        }
        Some(change)
    }

    /// Clear the active annotation.
    pub fn clear(&mut self) -> Option<SelectionChange> {
        self.set_active(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_set_and_clear() {
        let mut selection = Selection::new();
        assert_eq!(selection.active(), None);

        let change = selection.set_active(Some("a1")).unwrap();
        assert_eq!(change.previous, None);
        assert_eq!(change.current.as_deref(), Some("a1"));
        assert!(selection.is_active("a1"));

        let change = selection.clear().unwrap();
        assert_eq!(change.previous.as_deref(), Some("a1"));
        assert_eq!(change.current, None);
        assert!(!selection.is_active("a1"));
    }

    #[test]
    fn test_repeat_is_not_a_change() {
        let mut selection = Selection::new();
        selection.set_active(Some("a1"));
        assert_eq!(selection.set_active(Some("a1")), None);
        selection.clear();
        assert_eq!(selection.clear(), None);
    }

    #[test]
    fn test_switch_reports_both_ids() {
        let mut selection = Selection::new();
        selection.set_active(Some("a1"));
        let change = selection.set_active(Some("a2")).unwrap();
        assert!(change.affects("a1"));
        assert!(change.affects("a2"));
        assert!(!change.affects("a3"));
    }

    #[test]
    fn test_subscribers_notified_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut selection = Selection::new();
        {
            let seen = Rc::clone(&seen);
            selection.subscribe(move |change| seen.borrow_mut().push(change.current.clone()));
        }

        selection.set_active(Some("a1"));
        selection.set_active(Some("a1"));
        selection.set_active(None);

        assert_eq!(*seen.borrow(), vec![Some("a1".to_string()), None]);
    }
}
