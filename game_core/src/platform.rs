//! Seams to the host environment
//!
//! The session only talks to the outside world through these traits. The
//! browser client implements them over the canvas, a DOM element and
//! `setInterval`; tests implement them with recording mocks.

use crate::config::Rgb;

/// Identifier of a repeating timer, as returned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(pub i32);

/// A fixed-size paintable area
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Paint the whole area with one colour
    fn clear(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb);
}

/// Visible score counter
pub trait ScoreSink {
    fn set_score(&mut self, score: u32);
}

/// Repeating timer. Every fire must end up in `Session::tick`.
pub trait Scheduler {
    fn schedule(&mut self, interval_ms: u32) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// The collaborators a session is wired to
pub struct Platform {
    pub surface: Box<dyn Surface>,
    pub score: Box<dyn ScoreSink>,
    pub scheduler: Box<dyn Scheduler>,
}
