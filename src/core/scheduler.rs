/// Render-on-change bookkeeping for `requestAnimationFrame`.
///
/// Any number of state changes between two display refreshes collapse into a
/// single frame request. A frame callback runs exactly one pass and does not
/// re-arm itself; only a later `request` does.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    pending: bool,
    handle: Option<i32>,
    frames: u64,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the scene dirty. Returns `true` when the caller must request an
    /// animation frame, i.e. none is outstanding yet.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Remember the browser handle of the outstanding frame request.
    pub fn frame_requested(&mut self, handle: i32) {
        if self.pending {
            self.handle = Some(handle);
        }
    }

    /// Called at the start of the frame callback. Clears the dirty flag so a
    /// change made during the pass schedules a fresh frame. Returns whether a
    /// pass should run; a callback arriving after `cancel` returns `false`.
    pub fn begin_frame(&mut self) -> bool {
        self.handle = None;
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.frames += 1;
        true
    }

    /// Withdraw a pending redraw. Returns the handle to pass to
    /// `cancelAnimationFrame`, if one was recorded.
    pub fn cancel(&mut self) -> Option<i32> {
        self.pending = false;
        self.handle.take()
    }

    #[inline]
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }
}
