//! Frame scheduling
//!
//! The loop driver hands out a `LoopHandle` for every pending frame request
//! so that a finished run can cancel it.

/// Identifies one pending frame request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopHandle(pub i32);

/// Requests a single future invocation of the step function
pub trait FrameScheduler {
    fn request_frame(&mut self) -> LoopHandle;
    fn cancel_frame(&mut self, handle: LoopHandle);
}

/// Scheduler that never fires on its own; the caller steps frames.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<LoopHandle>,
    /// Total cancellations seen
    pub cancelled: u32,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the pending request, if any. Returns true when a frame is due.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> LoopHandle {
        self.next_id += 1;
        let handle = LoopHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: LoopHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
        self.cancelled += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fire_and_cancel() {
        let mut scheduler = ManualScheduler::new();
        assert!(!scheduler.fire());

        let first = scheduler.request_frame();
        assert!(scheduler.is_armed());
        assert!(scheduler.fire());
        assert!(!scheduler.fire());

        let second = scheduler.request_frame();
        assert_ne!(first, second);
        scheduler.cancel_frame(second);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.cancelled, 1);
    }
}
