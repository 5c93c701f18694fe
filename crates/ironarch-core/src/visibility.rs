//! Content visibility.
//!
//! [`ContentVisibility`] is what renderers receive instead of the gate. It is
//! a snapshot of the mode and answers exactly one question: may this item be
//! shown?

use serde::{Deserialize, Serialize};

use crate::session::Mode;

/// Per-item visibility marker.
///
/// Missing values in a manifest default to [`Visibility::Public`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Shown to everyone.
    #[default]
    Public,
    /// Shown only in owner mode.
    Private,
}

/// Anything carrying a [`Visibility`].
pub trait Visible {
    /// The item's visibility marker.
    fn visibility(&self) -> Visibility;
}

impl Visible for Visibility {
    fn visibility(&self) -> Visibility {
        *self
    }
}

/// Capability to decide which items are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentVisibility {
    mode: Mode,
}

impl ContentVisibility {
    /// Visibility for a casual visitor.
    pub const fn public() -> Self {
        Self { mode: Mode::Public }
    }

    /// Visibility for the given mode.
    pub const fn for_mode(mode: Mode) -> Self {
        Self { mode }
    }

    /// Mode this capability was taken from.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// `item.visibility == public || mode == Owner`.
    pub fn is_visible<T: Visible + ?Sized>(&self, item: &T) -> bool {
        item.visibility() == Visibility::Public || self.mode.is_owner()
    }

    /// Visible items of `items`, in order.
    pub fn filter<'a, T: Visible>(&self, items: &'a [T]) -> impl Iterator<Item = &'a T> + 'a {
        let visibility = *self;
        items.iter().filter(move |item| visibility.is_visible(*item))
    }
}
