//! Typed configuration paired with the file it was loaded from.

use std::ops::{Deref, DerefMut};

use camino::{Utf8Path, Utf8PathBuf};

/// A configuration value together with its source path.
///
/// Dereferences to the value. Equality compares the values only.
#[derive(Clone, Debug)]
pub struct Loaded<T> {
    value: T,
    path: Option<Utf8PathBuf>,
}

impl<T> Loaded<T> {
    /// Pair `value` with the file it was read from.
    #[must_use]
    pub const fn new(value: T, path: Option<Utf8PathBuf>) -> Self {
        Self { value, path }
    }

    /// Path the value was loaded from.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Discard the path.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Loaded<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Loaded<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: PartialEq> PartialEq for Loaded<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
