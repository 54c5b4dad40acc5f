use std::fmt;
use std::rc::Rc;

/// Zero-argument callable bound to a menu entry
///
/// Cloning shares the underlying closure rather than copying it.
#[derive(Clone)]
pub struct Action(Rc<dyn Fn()>);

impl Action {
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn invoke(&self) {
        (self.0)()
    }

    /// True when both handles point at the same closure
    pub fn ptr_eq(&self, other: &Action) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// A labelled, selectable menu row
#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub(crate) label: String,
    pub(crate) action: Action,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &Action {
        &self.action
    }
}
