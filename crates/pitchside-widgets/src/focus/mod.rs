#![forbid(unsafe_code)]

//! Keyboard focus for groups of peer controls.
//!
//! [`RovingFocus`] implements the single-tab-stop pattern: exactly one member
//! of the group is reachable with Tab, and arrow keys move focus among the
//! members in a fixed order, wrapping at both ends.
//!
//! Platform focus is moved through [`FocusHandle`]s that the owner keeps per
//! member, so moving focus is a direct call rather than a lookup by string.

pub mod roving;

pub use roving::{NavDirection, RovingFocus};

/// Host-side reference to a focusable element.
///
/// The widget decides *where* focus goes and updates its own state; the
/// handle only mirrors that decision onto the platform. A host must not echo
/// the resulting platform focus event back into the widget.
pub trait FocusHandle {
    /// Move platform focus to the element.
    fn focus(&mut self);
}

impl<F: FnMut()> FocusHandle for F {
    fn focus(&mut self) {
        self()
    }
}
