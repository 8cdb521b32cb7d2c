//! Nesting depth of `Interpreter::eval` calls on the current thread.
//!
//! Tail calls must not nest: the high-water mark stays small no matter how
//! many iterations a tail-recursive loop runs.

use std::cell::Cell;

thread_local! {
    static CURRENT: Cell<usize> = const { Cell::new(0) };
    static HIGH_WATER: Cell<usize> = const { Cell::new(0) };
}

/// Counts one level of nesting while alive.
pub(crate) struct DepthGuard(());

impl DepthGuard {
    pub(crate) fn enter() -> Self {
        let depth = CURRENT.with(|c| {
            c.set(c.get() + 1);
            c.get()
        });
        HIGH_WATER.with(|h| h.set(h.get().max(depth)));
        DepthGuard(())
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        CURRENT.with(|c| c.set(c.get().saturating_sub(1)));
    }
}

/// Forget the deepest nesting seen so far.
pub(crate) fn reset_high_water() {
    HIGH_WATER.with(|h| h.set(CURRENT.with(Cell::get)));
}

/// Deepest nesting since the last reset.
pub(crate) fn high_water() -> usize {
    HIGH_WATER.with(Cell::get)
}
