//! Caller-owned values that a split reads from and proposes updates into.
//!
//! A [`Binding`] is a shared cell with a version counter. The split remembers
//! the last version it observed, which is how it tells an external write
//! apart from its own.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::axis::{Axis, Side};

#[derive(Debug)]
struct Slot<T> {
    value: T,
    version: u32,
}

/// Shared, versioned value. Cloning shares the underlying slot.
pub struct Binding<T>(Rc<RefCell<Slot<T>>>);

/// Fraction of the container length given to the primary side.
pub type FractionBinding = Binding<f32>;

/// Side that is fully collapsed, if any.
pub type HiddenBinding = Binding<Option<Side>>;

/// Axis the split lays out along.
pub type AxisBinding = Binding<Axis>;

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.0.borrow();
        f.debug_struct("Binding")
            .field("value", &slot.value)
            .field("version", &slot.version)
            .finish()
    }
}

impl<T: Default> Default for Binding<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Slot { value, version: 0 })))
    }

    /// Current version. Bumped on every write that changes the value.
    pub fn version(&self) -> u32 {
        self.0.borrow().version
    }

    /// Check if the value changed since `cached_version` was read.
    pub fn is_newer_than(&self, cached_version: u32) -> bool {
        self.version() != cached_version
    }

    /// Whether two bindings share the same slot.
    pub fn ptr_eq(&self, other: &Binding<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Copy> Binding<T> {
    pub fn get(&self) -> T {
        self.0.borrow().value
    }
}

impl<T: PartialEq> Binding<T> {
    /// Set a new value, bumping the version if it changed.
    ///
    /// Returns `true` if the value changed.
    pub fn set(&self, value: T) -> bool {
        let mut slot = self.0.borrow_mut();
        if slot.value != value {
            slot.value = value;
            slot.version = slot.version.wrapping_add(1);
            true
        } else {
            false
        }
    }
}

impl Binding<Axis> {
    /// Flip between horizontal and vertical.
    pub fn toggle(&self) {
        let axis = self.get();
        self.set(axis.toggled());
    }
}

impl Binding<Option<Side>> {
    /// Collapse `side`.
    pub fn hide(&self, side: Side) {
        self.set(Some(side));
    }

    /// Show both sides.
    pub fn show(&self) {
        self.set(None);
    }

    /// Hide `side` if nothing is hidden, otherwise show both.
    pub fn toggle(&self, side: Side) {
        if self.get().is_some() {
            self.show();
        } else {
            self.hide(side);
        }
    }

    pub fn is_hidden(&self, side: Side) -> bool {
        self.get() == Some(side)
    }
}
