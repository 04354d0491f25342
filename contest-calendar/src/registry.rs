use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::Arc;

/// Stable identifier of the page element a widget is attached to.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElementId(Arc<str>);

impl ElementId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns at most one widget per page element.
///
/// Widgets are removed explicitly with [`AttachedWidgetRegistry::detach`]
/// when their element goes away, and dropped with the registry otherwise.
///
/// ```
/// use contest_calendar::AttachedWidgetRegistry;
///
/// let mut registry = AttachedWidgetRegistry::new();
/// assert_eq!(registry.attach("popup", 1), None);
/// assert_eq!(registry.attach("popup", 2), Some(1));
/// assert_eq!(registry.get("popup"), Some(&2));
///
/// assert_eq!(registry.detach("popup"), Some(2));
/// assert!(registry.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct AttachedWidgetRegistry<T> {
    widgets: BTreeMap<ElementId, T>,
}

impl<T> Default for AttachedWidgetRegistry<T> {
    fn default() -> Self {
        Self { widgets: BTreeMap::new() }
    }
}

impl<T> AttachedWidgetRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a widget to an element, return the widget it replaces if any.
    pub fn attach(&mut self, id: impl Into<ElementId>, widget: T) -> Option<T> {
        let id = id.into();

        #[cfg(feature = "log")]
        {
            if self.widgets.contains_key(&id) {
                log::warn!("A widget is already attached to {id}, it will be replaced");
            } else {
                log::debug!("Attaching widget to {id}");
            }
        }

        self.widgets.insert(id, widget)
    }

    /// Get the widget attached to an element, attaching a new one if there
    /// is none.
    ///
    /// ```
    /// use contest_calendar::AttachedWidgetRegistry;
    ///
    /// let mut registry = AttachedWidgetRegistry::new();
    /// *registry.get_or_attach_with("counter", || 0) += 1;
    /// *registry.get_or_attach_with("counter", || 0) += 1;
    /// assert_eq!(registry.get("counter"), Some(&2));
    /// ```
    pub fn get_or_attach_with(&mut self, id: impl Into<ElementId>, init: impl FnOnce() -> T) -> &mut T {
        self.widgets.entry(id.into()).or_insert_with(init)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.widgets.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    /// Remove the widget attached to an element and hand it back.
    pub fn detach(&mut self, id: &str) -> Option<T> {
        let widget = self.widgets.remove(id);

        #[cfg(feature = "log")]
        {
            if widget.is_some() {
                log::debug!("Detached widget from #{id}");
            }
        }

        widget
    }

    /// Remove all widgets, in order of their element identifiers.
    pub fn detach_all(&mut self) -> Vec<(ElementId, T)> {
        std::mem::take(&mut self.widgets).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Iterate over identifiers of elements with an attached widget.
    pub fn ids(&self) -> impl Iterator<Item = &ElementId> + '_ {
        self.widgets.keys()
    }
}
