//! Global library settings.
//!
//! [`Settings`] holds the **maximum recursion depth** that the free
//! integration functions apply when they subdivide an interval. It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the depth is stored behind a `Mutex` so that it can be
//! changed from any thread. Code that changes it should restore it when
//! done with [`Settings::reset_max_recursion_depth`].

use std::sync::{Mutex, OnceLock};

use crate::{
    ensure,
    errors::{Error, Result},
    Size,
};

/// Recursion depth used when no override has been set.
///
/// Fifty halvings shrink any finite interval to below 1e-15 of its width,
/// which is where `f64` midpoints stop being distinct from the endpoints.
pub const DEFAULT_MAX_RECURSION_DEPTH: Size = 50;

/// Process-wide settings used by the quadkit library.
pub struct Settings {
    /// Override for the maximum recursion depth, if any.
    max_recursion_depth: Mutex<Option<Size>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            max_recursion_depth: Mutex::new(None),
        })
    }

    /// Return the maximum recursion depth currently in force.
    pub fn max_recursion_depth(&self) -> Size {
        self.max_recursion_depth
            .lock()
            .expect("Settings mutex poisoned")
            .unwrap_or(DEFAULT_MAX_RECURSION_DEPTH)
    }

    /// Override the maximum recursion depth. A depth of zero is rejected.
    pub fn set_max_recursion_depth(&self, depth: Size) -> Result<()> {
        ensure!(
            depth > 0,
            Error::InvalidArgument("maximum recursion depth must be positive".into())
        );
        *self
            .max_recursion_depth
            .lock()
            .expect("Settings mutex poisoned") = Some(depth);
        Ok(())
    }

    /// Clear the override, restoring [`DEFAULT_MAX_RECURSION_DEPTH`].
    pub fn reset_max_recursion_depth(&self) {
        *self
            .max_recursion_depth
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

/// RAII guard that overrides the maximum recursion depth for the lifetime
/// of the guard and restores the previous override on drop.
pub struct ScopedMaxRecursionDepth {
    previous: Option<Size>,
}

impl ScopedMaxRecursionDepth {
    /// Install `depth` until the guard is dropped.
    pub fn new(depth: Size) -> Result<Self> {
        let settings = Settings::instance();
        let previous = *settings
            .max_recursion_depth
            .lock()
            .expect("Settings mutex poisoned");
        settings.set_max_recursion_depth(depth)?;
        Ok(Self { previous })
    }
}

impl Drop for ScopedMaxRecursionDepth {
    fn drop(&mut self) {
        *Settings::instance()
            .max_recursion_depth
            .lock()
            .expect("Settings mutex poisoned") = self.previous;
    }
}
