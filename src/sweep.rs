use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// Sweep controller – the antenna position and its clock
// ---------------------------------------------------------------------------

/// Playback state machine for the antenna sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Slowest allowed scan rate, columns per second.
pub const MIN_SCAN_RATE: f64 = 1.0;
/// Fastest allowed scan rate, columns per second.
pub const MAX_SCAN_RATE: f64 = 200.0;

/// Drives the antenna column across the map on wall-clock time.
///
/// This is the only mutable state in the program: a column index advanced
/// while playing, wrapping modulo the map width when looping and parking at
/// the last column otherwise. The UI calls [`tick`](Self::tick) once per
/// rendered frame; the elapsed-time arithmetic lives in
/// [`advance`](Self::advance) so it can be driven deterministically.
#[derive(Debug, Clone)]
pub struct SweepController {
    column: usize,
    state: SweepState,
    /// Columns per second while playing. Values outside
    /// `[MIN_SCAN_RATE, MAX_SCAN_RATE]` are clamped when applied.
    pub scan_rate: f64,
    /// Wrap to column 0 after the last column instead of stopping.
    pub loop_enabled: bool,
    last_update: Instant,
    /// Fractional columns carried between ticks. Frame intervals are much
    /// shorter than one column period at the default rate, so without the
    /// carry every tick would truncate to zero and the sweep would stall.
    carry: f64,
}

impl Default for SweepController {
    fn default() -> Self {
        Self {
            column: 0,
            state: SweepState::Stopped,
            scan_rate: 10.0,
            loop_enabled: true,
            last_update: Instant::now(),
            carry: 0.0,
        }
    }
}

impl SweepController {
    /// Current antenna column.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == SweepState::Playing
    }

    /// Start (or resume) the sweep.
    pub fn play(&mut self) {
        if self.state != SweepState::Playing {
            self.last_update = Instant::now();
            self.carry = 0.0;
            self.state = SweepState::Playing;
        }
    }

    /// Pause without moving the antenna.
    pub fn pause(&mut self) {
        if self.state == SweepState::Playing {
            self.state = SweepState::Paused;
        }
    }

    /// Toggle play/pause.
    pub fn toggle_play(&mut self) {
        match self.state {
            SweepState::Playing => self.pause(),
            SweepState::Paused | SweepState::Stopped => self.play(),
        }
    }

    /// Stop and rewind to the first column.
    pub fn stop(&mut self) {
        self.state = SweepState::Stopped;
        self.column = 0;
        self.carry = 0.0;
    }

    /// Jump to `col`, wrapped into `[0, width)`. Playback state is kept.
    pub fn seek(&mut self, col: usize, width: usize) {
        if width == 0 {
            return;
        }
        self.column = col % width;
        self.carry = 0.0;
    }

    /// Advance the sweep by the wall-clock time since the last call.
    /// Returns true when the antenna moved or parked.
    pub fn tick(&mut self, width: usize) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update);
        self.last_update = now;
        self.advance(elapsed, width)
    }

    /// Deterministic core of [`tick`](Self::tick): convert `elapsed` into
    /// whole columns at the current scan rate and move the antenna.
    pub fn advance(&mut self, elapsed: Duration, width: usize) -> bool {
        if self.state != SweepState::Playing || width == 0 {
            return false;
        }

        // The rate field is bound directly by the UI slider; clamp it where
        // it feeds the clock.
        let rate = self.scan_rate.clamp(MIN_SCAN_RATE, MAX_SCAN_RATE);
        self.carry += elapsed.as_secs_f64() * rate;
        let steps = self.carry as usize;
        if steps == 0 {
            return false;
        }
        self.carry -= steps as f64;

        if self.loop_enabled {
            self.column = (self.column + steps) % width;
        } else if self.column + steps >= width {
            // Park on the last column and stop instead of wrapping.
            self.column = width - 1;
            self.carry = 0.0;
            self.state = SweepState::Stopped;
        } else {
            self.column += steps;
        }
        true
    }

    /// Sweep progress in `[0, 1]`.
    pub fn progress(&self, width: usize) -> f32 {
        if width <= 1 {
            return 0.0;
        }
        self.column as f32 / (width - 1) as f32
    }
}
