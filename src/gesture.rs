// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Turns a stream of pointer events on the card surface into a continuous
//! drag reading and, on pointer-up, a single committed action.
//!
//! Coordinates are display pixels; timestamps are milliseconds from a
//! monotonic clock supplied by the event source. The recognizer does no I/O
//! and keeps no clock of its own, so its behavior is a pure function of the
//! event sequence.

/// Minimum horizontal displacement, in pixels, for a drag to commit.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Minimum velocity, in pixels per millisecond, for a short flick to commit
/// even when the displacement stays under `SWIPE_THRESHOLD`.
pub const VELOCITY_THRESHOLD: f64 = 0.11;

/// Card rotation, in degrees per pixel of horizontal displacement.
pub const ROTATION_FACTOR: f64 = 0.05;

/// The action a drag is previewing, or has committed to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Action {
    #[default]
    None,
    Left,
    Right,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::None => "NONE",
            Action::Left => "LEFT",
            Action::Right => "RIGHT",
        }
    }
}

/// An active drag. Exists only between pointer-down and pointer-up/leave;
/// the recognizer holds it in an `Option` so there is no partial state.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    origin_x: f64,
    origin_y: f64,
    started_at: f64,
}

/// Derived measurements for one pointer-move, recomputed from the session
/// origin and the current pointer position.
#[derive(Clone, Copy, Debug)]
pub struct DragReading {
    /// Signed horizontal displacement from the origin, in pixels.
    pub dx: f64,
    /// Time since pointer-down, in milliseconds.
    pub elapsed: f64,
    /// `|dx| / elapsed`, or zero when no time has passed.
    pub velocity: f64,
    /// Preview rotation, in degrees.
    pub rotation: f64,
    /// The action this drag would commit if the pointer were released now.
    pub action: Action,
}

impl DragReading {
    fn new(dx: f64, elapsed: f64) -> Self {
        let velocity = if elapsed > 0.0 { dx.abs() / elapsed } else { 0.0 };
        let action = if dx.abs() >= SWIPE_THRESHOLD || velocity > VELOCITY_THRESHOLD {
            if dx > 0.0 { Action::Right } else { Action::Left }
        } else {
            Action::None
        };
        Self {
            dx,
            elapsed,
            velocity,
            rotation: dx * ROTATION_FACTOR,
            action,
        }
    }
}

/// The drag state machine: `Idle` (no session) or `Dragging`.
///
/// Moves only preview: they update the marker but never commit. The commit
/// decision is made on pointer-up from the marker left by the last processed
/// move, so it is deterministic given the event order.
pub struct GestureRecognizer {
    session: Option<DragSession>,
    marker: Action,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self {
            session: None,
            marker: Action::None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The action marker left by the last move, `None` while idle.
    pub fn marker(&self) -> Action {
        self.marker
    }

    /// Idle -> Dragging. Records the session origin.
    pub fn pointer_down(&mut self, x: f64, y: f64, t: f64) {
        self.session = Some(DragSession {
            origin_x: x,
            origin_y: y,
            started_at: t,
        });
        self.marker = Action::None;
    }

    /// Computes the reading for the current pointer position and stores its
    /// action as the live marker. Returns `None` while idle: a move without
    /// a session is a no-op, not an error.
    pub fn pointer_move(&mut self, x: f64, _y: f64, t: f64) -> Option<DragReading> {
        let session = self.session?;
        let reading = DragReading::new(x - session.origin_x, t - session.started_at);
        self.marker = reading.action;
        Some(reading)
    }

    /// Dragging -> Idle. Returns the committed action: whatever marker the
    /// last move left. A pointer-up without a preceding move commits `None`.
    pub fn pointer_up(&mut self) -> Action {
        let committed = self.marker;
        self.session = None;
        self.marker = Action::None;
        committed
    }

    /// Dragging -> Idle with no commit: the drag was abandoned by the
    /// pointer exiting the surface.
    pub fn pointer_leave(&mut self) {
        self.session = None;
        self.marker = Action::None;
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}
