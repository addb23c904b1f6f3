//! Progress and timing helpers for long track files.
//!
//! Components
//! -----------------
//! * [`TrackProgress`] – Live spinner counting processed tracks. Only renders when the
//!   `progress` feature is enabled; otherwise every method is a no-op.
//! * [`fmt_dur`] – Human-readable formatter for [`Duration`] values, producing strings
//!   like `"253µs"`, `"42ms"`, or `"3.14s"` depending on the scale.
use std::time::Duration;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::PROGRESS_STRIDE;

pub(crate) struct TrackProgress {
    #[cfg(feature = "progress")]
    bar: ProgressBar,
}

impl TrackProgress {
    #[cfg(feature = "progress")]
    pub(crate) fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {pos} tracks | {per_sec} | {elapsed_precise}")
                .expect("indicatif template"),
        );
        bar.enable_steady_tick(Duration::from_millis(200));
        TrackProgress { bar }
    }

    #[cfg(not(feature = "progress"))]
    pub(crate) fn new() -> Self {
        TrackProgress {}
    }

    /// Report the number of tracks processed so far; the display moves every
    /// [`PROGRESS_STRIDE`] tracks.
    #[inline]
    pub(crate) fn update(&self, processed: u64) {
        if processed % PROGRESS_STRIDE == 0 {
            #[cfg(feature = "progress")]
            self.bar.set_position(processed);
        }
    }

    pub(crate) fn finish(&self) {
        #[cfg(feature = "progress")]
        self.bar.finish_and_clear();
    }
}

#[inline]
pub(crate) fn fmt_dur(d: Duration) -> String {
    let us = d.as_micros();
    if us < 1_000 {
        format!("{us}µs")
    } else {
        let ms = d.as_millis();
        if ms < 1_000 {
            format!("{ms}ms")
        } else {
            let s = d.as_secs_f32();
            format!("{s:.2}s")
        }
    }
}

#[cfg(test)]
mod progress_bar_test {
    use super::*;

    #[test]
    fn test_fmt_dur_scales() {
        assert_eq!(fmt_dur(Duration::from_micros(253)), "253µs");
        assert_eq!(fmt_dur(Duration::from_millis(42)), "42ms");
        assert_eq!(fmt_dur(Duration::from_millis(3140)), "3.14s");
    }
}
