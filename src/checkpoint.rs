//! Cooperative yield points for long scans.
//!
//! The decoder is pure CPU work over an in-memory buffer, but very large
//! databases can take long enough that a host scheduler wants a say. Each
//! scanning loop calls [`Checkpoint::tick`] once per iteration boundary
//! (per page walked, per header descriptor, per metadata entry); what
//! happens there is up to the caller.

/// Hook invoked at fixed iteration boundaries during a scan.
pub trait Checkpoint {
    fn tick(&mut self);
}

/// Default checkpoint: never yields.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoYield;

impl Checkpoint for NoYield {
    fn tick(&mut self) {}
}

/// Yields the current thread at every checkpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadYield;

impl Checkpoint for ThreadYield {
    fn tick(&mut self) {
        std::thread::yield_now();
    }
}

/// Adapts a closure into a [`Checkpoint`].
pub struct YieldFn<F: FnMut()>(pub F);

impl<F: FnMut()> Checkpoint for YieldFn<F> {
    fn tick(&mut self) {
        (self.0)()
    }
}
