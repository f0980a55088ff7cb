//! Monitor service — the poll loop around the state machine.
//!
//! [`Monitor`] owns the [`Machine`] and drives one iteration per
//! [`step`](Monitor::step): sample inputs → decide → perform side effects
//! (LED patterns, email send) → commit the transition. All I/O flows
//! through port traits passed in at the call site, so the whole service
//! runs against mocks in tests.
//!
//! ```text
//!  InputPort ──▶ ┌───────────────────────┐ ──▶ EventSink
//!                │        Monitor        │
//!    LedPort ◀── │   Machine · patterns  │ ──▶ NotifierPort
//!                └───────────────────────┘
//! ```
//!
//! Single-threaded and blocking by construction: while a pattern or a
//! send is in flight the loop makes no progress, and nothing is
//! cancellable once started.

use log::warn;

use crate::config::MonitorConfig;
use crate::machine::{Action, Machine};
use crate::signaling;

use super::events::AppEvent;
use super::ports::{EventSink, InputPort, LedPort, NotifierPort, WaitPort};

/// Whether the poll loop keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The shutdown chord ended the loop.
    Shutdown,
}

/// The monitor service. Construct once, then [`run`](Monitor::run).
pub struct Monitor {
    machine: Machine,
    cfg: MonitorConfig,
}

impl Monitor {
    pub fn new(cfg: MonitorConfig) -> Self {
        Self {
            machine: Machine::new(cfg.heartbeat_period_ticks),
            cfg,
        }
    }

    /// Current charger state, for logging and tests.
    pub fn state(&self) -> crate::machine::ChargerState {
        self.machine.state()
    }

    /// Play the startup pattern and poll until the shutdown chord.
    ///
    /// The `hw` parameter satisfies both [`InputPort`] and [`LedPort`] —
    /// the same GPIO adapter serves both sides without a double borrow.
    pub fn run(
        &mut self,
        hw: &mut (impl InputPort + LedPort),
        notifier: &mut impl NotifierPort,
        sink: &mut impl EventSink,
        clock: &mut impl WaitPort,
    ) {
        signaling::play(&signaling::READY, hw, clock);
        sink.emit(&AppEvent::Loaded);

        while self.step(hw, notifier, sink, clock) == Flow::Continue {}
    }

    /// One poll iteration: first matching rule wins, all others skipped.
    pub fn step(
        &mut self,
        hw: &mut (impl InputPort + LedPort),
        notifier: &mut impl NotifierPort,
        sink: &mut impl EventSink,
        clock: &mut impl WaitPort,
    ) -> Flow {
        let sample = hw.sample();
        let led_on = hw.is_on();

        match self.machine.decide(sample, led_on) {
            Action::ConfirmAlarm => {
                self.notify(hw, notifier, sink, clock, false);
            }

            Action::IgnoreAlarm => {
                // Continuous beeping while not armed: nothing to do, and
                // no idle wait either — the next sample follows at once.
            }

            Action::Rearm => {
                self.machine.rearm();
                sink.emit(&AppEvent::Armed);
                signaling::play(&signaling::RESET_CONFIRM, hw, clock);
            }

            Action::SendTest => {
                self.notify(hw, notifier, sink, clock, true);
            }

            Action::Shutdown => {
                sink.emit(&AppEvent::ShutdownRequested);
                signaling::play(&signaling::TERMINATE, hw, clock);
                // The pattern already ends off; force it anyway.
                hw.set(false);
                sink.emit(&AppEvent::Terminated);
                return Flow::Shutdown;
            }

            Action::Idle { heartbeat_pulse } => {
                if heartbeat_pulse {
                    hw.set(true);
                    clock.wait(self.cfg.heartbeat_pulse);
                    hw.set(false);
                }
                clock.wait(self.cfg.poll_interval);
            }
        }

        Flow::Continue
    }

    /// LED on → single send attempt → commit and signal, or back off.
    ///
    /// On failure the charger state is left where it was, so the send can
    /// be retried with another TEST press or a re-armed event.
    fn notify(
        &mut self,
        hw: &mut impl LedPort,
        notifier: &mut impl NotifierPort,
        sink: &mut impl EventSink,
        clock: &mut impl WaitPort,
        test: bool,
    ) {
        // LED on while the session is in flight.
        hw.set(true);
        match notifier.send_alert() {
            Ok(()) => {
                self.machine.mark_handled();
                sink.emit(&AppEvent::EmailSent { test });
                signaling::play(&signaling::ALERT, hw, clock);
            }
            Err(e) => {
                warn!("alert email failed: {e}");
                sink.emit(&AppEvent::EmailFailed);
                hw.set(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{ChargerState, InputSample};
    use std::collections::VecDeque;
    use std::time::Duration;

    #[derive(Default)]
    struct ScriptedHw {
        script: VecDeque<InputSample>,
        led_on: bool,
        led_writes: Vec<bool>,
    }

    impl InputPort for ScriptedHw {
        fn sample(&mut self) -> InputSample {
            self.script.pop_front().unwrap_or_default()
        }
    }

    impl LedPort for ScriptedHw {
        fn set(&mut self, on: bool) {
            self.led_on = on;
            self.led_writes.push(on);
        }

        fn is_on(&self) -> bool {
            self.led_on
        }
    }

    struct FlakyNotifier {
        results: VecDeque<Result<(), crate::app::ports::NotifyError>>,
        sends: usize,
    }

    impl FlakyNotifier {
        fn failing_once() -> Self {
            Self {
                results: VecDeque::from([Err(crate::app::ports::NotifyError::Connection(
                    "refused".into(),
                ))]),
                sends: 0,
            }
        }
    }

    impl NotifierPort for FlakyNotifier {
        fn send_alert(&mut self) -> Result<(), crate::app::ports::NotifyError> {
            self.sends += 1;
            self.results.pop_front().unwrap_or(Ok(()))
        }
    }

    #[derive(Default)]
    struct SinkSpy {
        events: Vec<AppEvent>,
    }

    impl EventSink for SinkSpy {
        fn emit(&mut self, event: &AppEvent) {
            self.events.push(*event);
        }
    }

    #[derive(Default)]
    struct InstantClock {
        waits: Vec<Duration>,
    }

    impl WaitPort for InstantClock {
        fn wait(&mut self, dur: Duration) {
            self.waits.push(dur);
        }
    }

    fn armed_monitor() -> Monitor {
        let mut mon = Monitor::new(MonitorConfig::default());
        // Arm through the real rule, not by poking internals.
        let mut hw = ScriptedHw {
            script: VecDeque::from([InputSample {
                reset_pressed: true,
                ..InputSample::default()
            }]),
            ..ScriptedHw::default()
        };
        let mut notifier = FlakyNotifier {
            results: VecDeque::new(),
            sends: 0,
        };
        let mut sink = SinkSpy::default();
        let mut clock = InstantClock::default();
        assert_eq!(
            mon.step(&mut hw, &mut notifier, &mut sink, &mut clock),
            Flow::Continue
        );
        assert_eq!(mon.state(), ChargerState::AwaitingEvent);
        mon
    }

    #[test]
    fn failed_send_leaves_state_and_led_untouched() {
        let mut mon = armed_monitor();
        let mut hw = ScriptedHw {
            script: VecDeque::from([InputSample {
                alarm: true,
                ..InputSample::default()
            }]),
            ..ScriptedHw::default()
        };
        let mut notifier = FlakyNotifier::failing_once();
        let mut sink = SinkSpy::default();
        let mut clock = InstantClock::default();

        mon.step(&mut hw, &mut notifier, &mut sink, &mut clock);

        assert_eq!(notifier.sends, 1);
        assert_eq!(mon.state(), ChargerState::AwaitingEvent);
        assert!(!hw.led_on);
        assert_eq!(sink.events, vec![AppEvent::EmailFailed]);
        // No alert pattern on failure.
        assert!(clock.waits.is_empty());
    }

    #[test]
    fn failed_send_can_be_retried_by_next_alarm_tick() {
        let mut mon = armed_monitor();
        let mut hw = ScriptedHw {
            script: VecDeque::from([
                InputSample {
                    alarm: true,
                    ..InputSample::default()
                },
                InputSample {
                    alarm: true,
                    ..InputSample::default()
                },
            ]),
            ..ScriptedHw::default()
        };
        let mut notifier = FlakyNotifier::failing_once();
        let mut sink = SinkSpy::default();
        let mut clock = InstantClock::default();

        mon.step(&mut hw, &mut notifier, &mut sink, &mut clock);
        mon.step(&mut hw, &mut notifier, &mut sink, &mut clock);

        assert_eq!(notifier.sends, 2);
        assert_eq!(mon.state(), ChargerState::EventHandled);
        assert!(hw.led_on);
        assert!(sink.events.contains(&AppEvent::EmailSent { test: false }));
    }

    #[test]
    fn ignored_alarm_performs_no_waits() {
        let mut mon = Monitor::new(MonitorConfig::default());
        let mut hw = ScriptedHw {
            script: VecDeque::from([InputSample {
                alarm: true,
                ..InputSample::default()
            }]),
            ..ScriptedHw::default()
        };
        let mut notifier = FlakyNotifier {
            results: VecDeque::new(),
            sends: 0,
        };
        let mut sink = SinkSpy::default();
        let mut clock = InstantClock::default();

        mon.step(&mut hw, &mut notifier, &mut sink, &mut clock);

        assert_eq!(notifier.sends, 0);
        assert!(clock.waits.is_empty());
        assert!(hw.led_writes.is_empty());
        assert!(sink.events.is_empty());
    }

    #[test]
    fn shutdown_forces_led_off_and_ends_loop() {
        let mut mon = Monitor::new(MonitorConfig::default());
        let mut hw = ScriptedHw {
            script: VecDeque::from([InputSample {
                reset_pressed: true,
                test_pressed: true,
                ..InputSample::default()
            }]),
            ..ScriptedHw::default()
        };
        let mut notifier = FlakyNotifier {
            results: VecDeque::new(),
            sends: 0,
        };
        let mut sink = SinkSpy::default();
        let mut clock = InstantClock::default();

        let flow = mon.step(&mut hw, &mut notifier, &mut sink, &mut clock);

        assert_eq!(flow, Flow::Shutdown);
        assert!(!hw.led_on);
        assert_eq!(hw.led_writes.last(), Some(&false));
        assert_eq!(
            sink.events,
            vec![AppEvent::ShutdownRequested, AppEvent::Terminated]
        );
        // Terminate pattern: 15 on/off pairs.
        assert_eq!(clock.waits.len(), 30);
    }
}
