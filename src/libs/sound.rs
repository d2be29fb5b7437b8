//! Audible feedback for deleted and completed tasks.
//!
//! The clip is a single shared playback resource. Starting it while it is
//! still playing pauses and rewinds it first, so rapid deletions restart
//! the sound instead of overlapping it.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Side effect fired after a task leaves the list.
pub trait Feedback {
    fn deletion(&mut self);
}

/// Minimal playback control over one audio clip.
pub trait AudioSink {
    fn is_playing(&self) -> bool;
    fn pause(&mut self);
    fn rewind(&mut self);
    fn start(&mut self);
}

pub struct DeletionSound<A: AudioSink> {
    sink: A,
}

impl<A: AudioSink> DeletionSound<A> {
    pub fn new(sink: A) -> Self {
        DeletionSound { sink }
    }

    pub fn play(&mut self) {
        if self.sink.is_playing() {
            self.sink.pause();
            self.sink.rewind();
        }
        self.sink.start();
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }
}

impl<A: AudioSink> Feedback for DeletionSound<A> {
    fn deletion(&mut self) {
        self.play();
    }
}

/// No feedback at all.
#[derive(Debug, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn deletion(&mut self) {}
}

impl<F: Feedback + ?Sized> Feedback for Box<F> {
    fn deletion(&mut self) {
        (**self).deletion()
    }
}

pub const BELL_CLIP: Duration = Duration::from_millis(300);

/// Rings the terminal bell and treats it as playing for one clip length.
pub struct TerminalBell {
    clip: Duration,
    started: Option<Instant>,
}

impl TerminalBell {
    pub fn new() -> Self {
        TerminalBell {
            clip: BELL_CLIP,
            started: None,
        }
    }
}

impl Default for TerminalBell {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for TerminalBell {
    fn is_playing(&self) -> bool {
        self.started.is_some_and(|started| started.elapsed() < self.clip)
    }

    fn pause(&mut self) {
        self.started = None;
    }

    fn rewind(&mut self) {
        self.started = None;
    }

    fn start(&mut self) {
        let mut stderr = io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|_| stderr.flush()) {
            tracing::debug!(error = %e, "terminal bell unavailable");
        }
        self.started = Some(Instant::now());
    }
}
