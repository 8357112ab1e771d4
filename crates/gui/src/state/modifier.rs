//! Sampled compare-modifier input.
//!
//! The shell updates the modifier from its own key listener; the core only
//! reads the latest value when a tap arrives.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Anything that can report whether the compare-modifier is held right now
pub trait ModifierSource {
    fn compare_held(&self) -> bool;
}

impl ModifierSource for bool {
    fn compare_held(&self) -> bool {
        *self
    }
}

impl ModifierSource for Cell<bool> {
    fn compare_held(&self) -> bool {
        self.get()
    }
}

impl ModifierSource for AtomicBool {
    fn compare_held(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<F: Fn() -> bool> ModifierSource for F {
    fn compare_held(&self) -> bool {
        self()
    }
}
