//! Charger event state machine.
//!
//! A three-state automaton fed one [`InputSample`] per poll iteration.
//! The rules are checked in strict priority order; the first match wins
//! and every other rule is skipped for that iteration:
//!
//! ```text
//!  1. alarm line high        ─▶ ConfirmAlarm (armed) / IgnoreAlarm (not)
//!  2. reset pressed, no test ─▶ Rearm            (unless already armed)
//!  3. test pressed, no reset ─▶ SendTest         (any state, repeatable)
//!  4. test pressed, LED off  ─▶ Shutdown
//!  5. otherwise              ─▶ Idle { heartbeat_pulse }
//! ```
//!
//! ```text
//!  AwaitingReset ──[reset]──▶ AwaitingEvent ──[alarm sent]──▶ EventHandled
//!        ▲                         ▲                              │
//!        │                         └──────────[reset]─────────────┘
//!      (boot)
//! ```
//!
//! The machine only *decides*; the [`Monitor`](crate::app::service::Monitor)
//! performs the side effects (LED patterns, email send) and commits the
//! transition afterwards via [`Machine::rearm`] / [`Machine::mark_handled`].
//! A failed email send therefore never advances the state.

/// Where the monitor is in the charger cycle. Exactly one value is active
/// at any instant; only the owning [`Machine`] mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargerState {
    /// Boot state: ignore the alarm line until the operator arms us.
    AwaitingReset,
    /// Armed: a rising alarm line is a genuine charger-done event.
    AwaitingEvent,
    /// Event confirmed and email sent; alarm line ignored until re-arm.
    EventHandled,
}

/// One debounce-free read of the three input lines. Logical polarity:
/// `true` means "beeping" / "pressed" regardless of the electrical level
/// (active-low inversion happens in the GPIO adapter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSample {
    /// Buzzer line energized.
    pub alarm: bool,
    /// START/RESET button held.
    pub reset_pressed: bool,
    /// TEST button held.
    pub test_pressed: bool,
}

/// What the monitor should do this iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Genuine charger-done event: send the alert email.
    ConfirmAlarm,
    /// Alarm line high but we are not armed — continuous beeping is
    /// ignored, and the iteration ends with no idle wait.
    IgnoreAlarm,
    /// Arm (or re-arm) event detection.
    Rearm,
    /// Manual TEST trigger: send the same email, any state.
    SendTest,
    /// Shutdown chord: both buttons held while the LED is off.
    Shutdown,
    /// Nothing happened; wait one poll interval, optionally pulsing the
    /// heartbeat LED first.
    Idle { heartbeat_pulse: bool },
}

/// The event state machine. Owns the [`ChargerState`] and the heartbeat
/// tick counter; both are mutated only through this type.
pub struct Machine {
    state: ChargerState,
    /// Armed idle ticks since the last heartbeat pulse. Inert while the
    /// state is anything other than `AwaitingEvent`.
    heartbeat_ticks: u32,
    heartbeat_period_ticks: u32,
}

impl Machine {
    pub fn new(heartbeat_period_ticks: u32) -> Self {
        Self {
            state: ChargerState::AwaitingReset,
            heartbeat_ticks: 0,
            heartbeat_period_ticks,
        }
    }

    pub fn state(&self) -> ChargerState {
        self.state
    }

    /// Apply the priority-ordered rule list to one input sample.
    ///
    /// `led_on` is the most recently written LED level. Rule 4 is
    /// deliberately keyed off it rather than a two-button read, so the
    /// shutdown chord only fires once the LED has settled off from a
    /// prior action.
    pub fn decide(&mut self, sample: InputSample, led_on: bool) -> Action {
        if sample.alarm {
            return if self.state == ChargerState::AwaitingEvent {
                Action::ConfirmAlarm
            } else {
                Action::IgnoreAlarm
            };
        }

        if sample.reset_pressed
            && !sample.test_pressed
            && self.state != ChargerState::AwaitingEvent
        {
            return Action::Rearm;
        }

        if sample.test_pressed && !sample.reset_pressed {
            return Action::SendTest;
        }

        if sample.test_pressed && !led_on {
            return Action::Shutdown;
        }

        self.idle_tick()
    }

    /// Commit the `Rearm` transition: armed, heartbeat counter cleared.
    pub fn rearm(&mut self) {
        self.state = ChargerState::AwaitingEvent;
        self.heartbeat_ticks = 0;
    }

    /// Commit a successful send: alarm line ignored until the next re-arm.
    pub fn mark_handled(&mut self) {
        self.state = ChargerState::EventHandled;
    }

    fn idle_tick(&mut self) -> Action {
        if self.state != ChargerState::AwaitingEvent {
            return Action::Idle {
                heartbeat_pulse: false,
            };
        }
        self.heartbeat_ticks += 1;
        let pulse = self.heartbeat_ticks >= self.heartbeat_period_ticks;
        if pulse {
            self.heartbeat_ticks = 0;
        }
        Action::Idle {
            heartbeat_pulse: pulse,
        }
    }
}
