//! Deadline countdown component for Bubble Tea applications.
//!
//! A countdown tracks a fixed deadline. It samples the wall clock once per
//! interval (one second by default), recomputes the remaining time, and
//! renders either a days/hours/minutes/seconds breakdown or an "Expired"
//! message. Once the deadline passes the countdown stops scheduling ticks for
//! good.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_countdown::countdown::{new, transition, Status};
//! use bubbletea_countdown::Flags;
//!
//! let countdown = new(&Flags::new("1970-01-01T00:01:00Z"));
//! assert_eq!(countdown.expiration_time(), 60_000);
//!
//! let next = transition(30_000, &countdown);
//! assert_eq!(next.remaining_time(), 30_000);
//! assert_eq!(next.status(), Status::Running);
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_rs::{Model as BubbleTeaModel, Msg, Cmd};
//! use bubbletea_countdown::countdown::{init, Model, ExpiredMsg};
//! use bubbletea_countdown::Flags;
//!
//! struct MyApp {
//!     countdown: Model,
//!     done: bool,
//! }
//!
//! impl BubbleTeaModel for MyApp {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let (countdown, cmd) = init(&Flags::new("2030-01-01T00:00:00Z"));
//!         (Self { countdown, done: false }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(expired) = msg.downcast_ref::<ExpiredMsg>() {
//!             if expired.id == self.countdown.id() {
//!                 self.done = true;
//!             }
//!         }
//!
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.countdown.view()
//!     }
//! }
//! ```

use crate::clock::{Clock, SystemClock};
use crate::config::Flags;
use crate::deadline;
use crate::format::{self, TimeUnit};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default time between clock samples.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Default text shown once the deadline has passed.
pub const DEFAULT_EXPIRED_TEXT: &str = "Expired";

// Internal ID management for countdown instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Lifecycle of a countdown.
///
/// `Expired` is terminal: nothing moves a countdown back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The deadline has not been reached, or no time has been sampled yet.
    Running,
    /// The deadline has been reached or passed.
    Expired,
}

/// What the countdown wants from the clock next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickRequest {
    /// Deliver a fresh time sample after each interval.
    Every(Duration),
    /// Deliver nothing more.
    Stop,
}

/// A sample of the current time addressed to one countdown.
///
/// Produced by the commands returned from [`Model::init`] and
/// [`Model::update`]. Construct one by hand with [`Model::tick_msg`] to feed
/// a specific time, which is how tests and replays drive the countdown.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The countdown this tick belongs to.
    pub id: i64,

    /// Milliseconds since the Unix epoch at the moment of sampling.
    pub now: i64,

    /// Rejects stale ticks so a countdown never runs two tick loops at once.
    tag: i64,
}

/// Sent once, on the tick that moves a countdown from running to expired.
#[derive(Debug, Clone)]
pub struct ExpiredMsg {
    /// The countdown that expired.
    pub id: i64,
}

/// Lipgloss styles used by [`Model::view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for the numeric part of each unit ("01").
    pub value: Style,
    /// Style for the unit labels ("minutes").
    pub label: Style,
    /// Style for the expired message.
    pub expired: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            value: Style::new().bold(true),
            label: Style::new().foreground(Color::from("241")),
            expired: Style::new().bold(true).foreground(Color::from("196")),
        }
    }
}

impl Styles {
    /// Styles that render text unchanged.
    pub fn plain() -> Self {
        Self {
            value: Style::new(),
            label: Style::new(),
            expired: Style::new(),
        }
    }
}

/// Configuration option for [`new_with_options`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::countdown::{new_with_options, with_expired_text, with_interval};
/// use bubbletea_countdown::Flags;
/// use std::time::Duration;
///
/// let countdown = new_with_options(
///     &Flags::new("2030-01-01"),
///     &[
///         with_interval(Duration::from_millis(250)),
///         with_expired_text("Time's up"),
///     ],
/// );
/// assert_eq!(countdown.interval(), Duration::from_millis(250));
/// ```
pub enum CountdownOption {
    /// Sets the time between clock samples.
    WithInterval(Duration),
    /// Sets the view styles.
    WithStyles(Box<Styles>),
    /// Sets the text shown after expiry.
    WithExpiredText(String),
    /// Sets the clock that tick commands sample.
    WithClock(Arc<dyn Clock>),
}

impl CountdownOption {
    fn apply(&self, m: &mut Model) {
        match self {
            CountdownOption::WithInterval(interval) => m.interval = *interval,
            CountdownOption::WithStyles(styles) => m.styles = styles.as_ref().clone(),
            CountdownOption::WithExpiredText(text) => m.expired_text = text.clone(),
            CountdownOption::WithClock(clock) => m.clock = Arc::clone(clock),
        }
    }
}

/// Sets the time between clock samples.
pub fn with_interval(interval: Duration) -> CountdownOption {
    CountdownOption::WithInterval(interval)
}

/// Sets the view styles.
pub fn with_styles(styles: Styles) -> CountdownOption {
    CountdownOption::WithStyles(Box::new(styles))
}

/// Sets the text shown after expiry.
pub fn with_expired_text(text: impl Into<String>) -> CountdownOption {
    CountdownOption::WithExpiredText(text.into())
}

/// Sets the clock that tick commands sample.
pub fn with_clock(clock: Arc<dyn Clock>) -> CountdownOption {
    CountdownOption::WithClock(clock)
}

/// Countdown towards a fixed deadline.
///
/// The model holds the deadline, the remaining time observed at the last
/// tick and the resulting [`Status`]. It changes only through
/// [`transition`], which [`Model::update`] applies to each [`TickMsg`].
///
/// Before the first tick `remaining_time` is zero and the status is
/// `Running`; the command returned by [`Model::init`] samples the clock
/// immediately so this state is short-lived.
///
/// # Examples
///
/// ```rust
/// use bubbletea_countdown::countdown::{new, Status};
/// use bubbletea_countdown::Flags;
///
/// let mut countdown = new(&Flags::new("1970-01-01T00:00:10Z"));
/// assert_eq!(countdown.status(), Status::Running);
///
/// let cmd = countdown.update(Box::new(countdown.tick_msg(4_000)));
/// assert!(cmd.is_some()); // next tick scheduled
/// assert_eq!(countdown.remaining_time(), 6_000);
///
/// let cmd = countdown.update(Box::new(countdown.tick_msg(10_000)));
/// assert!(cmd.is_some()); // expiry notification
/// assert_eq!(countdown.status(), Status::Expired);
///
/// let cmd = countdown.update(Box::new(countdown.tick_msg(11_000)));
/// assert!(cmd.is_none()); // no more ticks
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    expiration_time: i64,
    remaining_time: i64,
    status: Status,
    interval: Duration,

    /// Styles used by [`Model::view`].
    pub styles: Styles,
    /// Text shown once expired.
    pub expired_text: String,

    clock: Arc<dyn Clock>,
    id: i64,
    tag: i64,
}

/// Creates a countdown for the deadline in `flags` with custom options.
///
/// An unreadable deadline falls back to the Unix epoch, which makes the
/// countdown expire on its first tick.
pub fn new_with_options(flags: &Flags, opts: &[CountdownOption]) -> Model {
    let mut m = Model {
        expiration_time: deadline::parse_or_epoch(&flags.deadline),
        remaining_time: 0,
        status: Status::Running,
        interval: DEFAULT_INTERVAL,
        styles: Styles::default(),
        expired_text: DEFAULT_EXPIRED_TEXT.to_string(),
        clock: Arc::new(SystemClock),
        id: next_id(),
        tag: 0,
    };
    for opt in opts {
        opt.apply(&mut m);
    }
    tracing::debug!(
        id = m.id,
        expiration_time = m.expiration_time,
        "countdown created"
    );
    m
}

/// Creates a countdown with a one second interval and the system clock.
pub fn new(flags: &Flags) -> Model {
    new_with_options(flags, &[])
}

/// Creates a countdown and the command that takes its first time sample.
///
/// ```rust
/// use bubbletea_countdown::countdown::{init, Status};
/// use bubbletea_countdown::Flags;
///
/// let (countdown, _cmd) = init(&Flags::new("not a date"));
/// assert_eq!(countdown.expiration_time(), 0);
/// assert_eq!(countdown.remaining_time(), 0);
/// assert_eq!(countdown.status(), Status::Running);
/// ```
pub fn init(flags: &Flags) -> (Model, Cmd) {
    let model = new(flags);
    let cmd = model.init();
    (model, cmd)
}

/// Applies a time sample to a countdown.
///
/// Returns a copy of `model` whose remaining time is
/// `expiration_time - now` and whose status is `Expired` when that is zero
/// or less. Pure: the same `now` always yields the same model.
///
/// ```rust
/// use bubbletea_countdown::countdown::{new, transition, Status};
/// use bubbletea_countdown::Flags;
///
/// let countdown = new(&Flags::new("1970-01-01T00:00:01Z"));
/// let next = transition(1_500, &countdown);
/// assert_eq!(next.remaining_time(), -500);
/// assert_eq!(next.status(), Status::Expired);
/// ```
pub fn transition(now: i64, model: &Model) -> Model {
    let remaining = model.expiration_time.saturating_sub(now);
    let status = if remaining <= 0 {
        Status::Expired
    } else {
        Status::Running
    };
    Model {
        remaining_time: remaining,
        status,
        ..model.clone()
    }
}

/// Decides whether the countdown needs more time samples.
pub fn tick_policy(model: &Model) -> TickRequest {
    match model.status {
        Status::Running => TickRequest::Every(model.interval),
        Status::Expired => TickRequest::Stop,
    }
}

impl Model {
    /// Returns the unique identifier of this countdown.
    ///
    /// Tick and expiry messages carry this id so several countdowns can share
    /// one program.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Deadline in milliseconds since the Unix epoch.
    pub fn expiration_time(&self) -> i64 {
        self.expiration_time
    }

    /// Milliseconds left at the last tick; zero or negative once expired.
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Current lifecycle state.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the countdown is still running.
    pub fn running(&self) -> bool {
        self.status == Status::Running
    }

    /// Whether the deadline has passed.
    pub fn expired(&self) -> bool {
        self.status == Status::Expired
    }

    /// Time between clock samples.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Breakdown of the remaining time into days, hours, minutes and seconds.
    pub fn breakdown(&self) -> Vec<TimeUnit> {
        format::breakdown(self.remaining_time)
    }

    /// Sets the time between clock samples.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the view styles.
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the text shown after expiry.
    pub fn with_expired_text(mut self, text: impl Into<String>) -> Self {
        self.expired_text = text.into();
        self
    }

    /// Sets the clock that tick commands sample.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Builds a tick for this countdown carrying the given time.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::new;
    /// use bubbletea_countdown::Flags;
    ///
    /// let countdown = new(&Flags::new("2030-01-01"));
    /// let tick = countdown.tick_msg(1_000);
    /// assert_eq!(tick.id, countdown.id());
    /// assert_eq!(tick.now, 1_000);
    /// ```
    pub fn tick_msg(&self, now: i64) -> TickMsg {
        TickMsg {
            id: self.id,
            now,
            tag: self.tag,
        }
    }

    /// Returns the command that takes the first time sample immediately.
    pub fn init(&self) -> Cmd {
        self.sample_after(Duration::from_nanos(1))
    }

    /// Turns the current [`tick_policy`] into a command.
    ///
    /// Returns `None` once the countdown has expired.
    pub fn subscription(&self) -> Option<Cmd> {
        match tick_policy(self) {
            TickRequest::Every(interval) => Some(self.sample_after(interval)),
            TickRequest::Stop => None,
        }
    }

    fn sample_after(&self, delay: Duration) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let clock = Arc::clone(&self.clock);

        bubbletea_tick(delay, move |_| {
            Box::new(TickMsg {
                id,
                now: clock.now_millis(),
                tag,
            }) as Msg
        })
    }

    fn expired_cmd(&self) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(ExpiredMsg { id }) as Msg
        })
    }

    /// Processes messages and advances the countdown.
    ///
    /// A [`TickMsg`] for this countdown is applied with [`transition`]. The
    /// returned command is the next tick while running, an [`ExpiredMsg`] on
    /// the tick that reaches the deadline, and `None` afterwards. Ticks for
    /// other countdowns, stale ticks and unrelated messages are ignored.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;

        if tick.id != self.id {
            return None;
        }

        // If a tag is set, and it's not the one we expect, reject the message.
        // This keeps a countdown from running two tick loops.
        if tick.tag > 0 && tick.tag != self.tag {
            return None;
        }

        if self.expired() {
            return None;
        }

        *self = transition(tick.now, self);
        self.tag += 1;
        tracing::trace!(id = self.id, remaining = self.remaining_time, "tick");

        if self.expired() {
            tracing::debug!(id = self.id, "countdown expired");
            return Some(self.expired_cmd());
        }
        self.subscription()
    }

    /// Renders the remaining time, or the expired text once expired.
    ///
    /// ```rust
    /// use bubbletea_countdown::countdown::{new_with_options, transition, with_styles, Styles};
    /// use bubbletea_countdown::Flags;
    ///
    /// let countdown = new_with_options(&Flags::new("1970-01-01T00:01:30Z"), &[with_styles(Styles::plain())]);
    /// assert_eq!(
    ///     transition(0, &countdown).view(),
    ///     "00 days  00 hours  01 minutes  30 seconds"
    /// );
    /// assert_eq!(transition(90_000, &countdown).view(), "Expired");
    /// ```
    pub fn view(&self) -> String {
        match self.status {
            Status::Expired => self.styles.expired.render(&self.expired_text),
            Status::Running => self
                .breakdown()
                .iter()
                .map(|unit| {
                    format!(
                        "{} {}",
                        self.styles.value.render(&unit.value),
                        self.styles.label.render(unit.label)
                    )
                })
                .collect::<Vec<_>>()
                .join("  "),
        }
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let (model, cmd) = init(&Flags::from_env());
        (model, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn countdown_to(expiration_time: i64) -> Model {
        let mut m = new_with_options(&Flags::default(), &[with_styles(Styles::plain())]);
        m.expiration_time = expiration_time;
        m
    }

    #[test]
    fn test_init_defaults() {
        let (m, _cmd) = init(&Flags::new("1970-01-01T00:00:05Z"));
        assert_eq!(m.expiration_time(), 5_000);
        assert_eq!(m.remaining_time(), 0);
        assert_eq!(m.status(), Status::Running);
        assert_eq!(m.interval(), DEFAULT_INTERVAL);
        assert_eq!(m.expired_text, DEFAULT_EXPIRED_TEXT);
        assert!(m.id() > 0);
    }

    #[test]
    fn test_unique_ids() {
        let a = new(&Flags::default());
        let b = new(&Flags::default());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_unparseable_deadline_falls_back_to_epoch() {
        let (m, _cmd) = init(&Flags::new("not a date"));
        assert_eq!(m.expiration_time(), 0);

        let next = transition(1, &m);
        assert_eq!(next.status(), Status::Expired);
    }

    #[test]
    fn test_transition_before_deadline() {
        let m = countdown_to(10_000);
        for now in [0, 1, 5_000, 9_999] {
            let next = transition(now, &m);
            assert_eq!(next.status(), Status::Running);
            assert_eq!(next.remaining_time(), 10_000 - now);
        }
    }

    #[test]
    fn test_transition_at_and_after_deadline() {
        let m = countdown_to(10_000);
        for now in [10_000, 10_001, 50_000] {
            let next = transition(now, &m);
            assert_eq!(next.status(), Status::Expired);
            assert_eq!(next.remaining_time(), 10_000 - now);
        }
    }

    #[test]
    fn test_transition_past_deadline_scenario() {
        let next = transition(1_500, &countdown_to(1_000));
        assert_eq!(next.remaining_time(), -500);
        assert_eq!(next.status(), Status::Expired);
    }

    #[test]
    fn test_transition_is_repeatable() {
        let m = countdown_to(7_000);
        let once = transition(3_000, &m);
        let twice = transition(3_000, &once);
        assert_eq!(once.remaining_time(), twice.remaining_time());
        assert_eq!(once.status(), twice.status());
        assert_eq!(once.id(), twice.id());
    }

    #[test]
    fn test_transition_leaves_input_untouched() {
        let m = countdown_to(7_000);
        let _ = transition(9_000, &m);
        assert_eq!(m.remaining_time(), 0);
        assert_eq!(m.status(), Status::Running);
    }

    #[test]
    fn test_transition_saturates() {
        let m = countdown_to(i64::MIN);
        let next = transition(i64::MAX, &m);
        assert_eq!(next.remaining_time(), i64::MIN);
        assert!(next.expired());
    }

    #[test]
    fn test_tick_policy() {
        let m = countdown_to(5_000).with_interval(Duration::from_millis(250));
        assert_eq!(
            tick_policy(&m),
            TickRequest::Every(Duration::from_millis(250))
        );

        let expired = transition(6_000, &m);
        assert_eq!(tick_policy(&expired), TickRequest::Stop);
        for _ in 0..3 {
            assert_eq!(tick_policy(&expired), TickRequest::Stop);
            assert!(expired.subscription().is_none());
        }
    }

    #[test]
    fn test_update_running_schedules_next_tick() {
        let mut m = countdown_to(5_000);
        let cmd = m.update(Box::new(m.tick_msg(1_000)));
        assert!(cmd.is_some());
        assert_eq!(m.remaining_time(), 4_000);
        assert!(m.running());
    }

    #[test]
    fn test_update_expiry_then_silence() {
        let mut m = countdown_to(5_000);
        assert!(m.update(Box::new(m.tick_msg(5_000))).is_some());
        assert!(m.expired());

        // Terminal: later ticks, even ones before the deadline, change nothing.
        assert!(m.update(Box::new(m.tick_msg(1_000))).is_none());
        assert!(m.expired());
        assert_eq!(m.remaining_time(), 0);
    }

    #[test]
    fn test_update_ignores_other_countdowns() {
        let mut m = countdown_to(5_000);
        let other = countdown_to(5_000);
        assert!(m.update(Box::new(other.tick_msg(1_000))).is_none());
        assert_eq!(m.remaining_time(), 0);
    }

    #[test]
    fn test_update_rejects_zero_id() {
        let mut m = countdown_to(5_000);
        let tick = TickMsg {
            id: 0,
            now: 2_000,
            tag: 0,
        };
        assert!(m.update(Box::new(tick)).is_none());
        assert_eq!(m.remaining_time(), 0);
    }

    #[test]
    fn test_update_rejects_stale_tag() {
        let mut m = countdown_to(5_000);
        m.update(Box::new(m.tick_msg(1_000)));
        m.update(Box::new(m.tick_msg(2_000)));
        assert_eq!(m.tag, 2);

        let stale = TickMsg {
            id: m.id(),
            now: 3_000,
            tag: 1,
        };
        assert!(m.update(Box::new(stale)).is_none());
        assert_eq!(m.remaining_time(), 3_000);
    }

    #[test]
    fn test_update_ignores_unrelated_messages() {
        let mut m = countdown_to(5_000);
        assert!(m.update(Box::new("hello")).is_none());
        assert!(m.update(Box::new(ExpiredMsg { id: m.id() })).is_none());
    }

    #[test]
    fn test_deadline_in_past_expires_on_first_tick() {
        let (mut m, _cmd) = init(&Flags::new("2001-09-09T01:46:40Z"));
        assert!(m.update(Box::new(m.tick_msg(1_700_000_000_000))).is_some());
        assert!(m.expired());
    }

    #[test]
    fn test_view_running() {
        let m = transition(0, &countdown_to(90_000));
        assert_eq!(m.view(), "00 days  00 hours  01 minutes  30 seconds");
    }

    #[test]
    fn test_view_before_first_tick() {
        let m = countdown_to(90_000);
        assert_eq!(m.view(), "00 days  00 hours  00 minutes  00 seconds");
    }

    #[test]
    fn test_view_expired() {
        let m = transition(2_000, &countdown_to(1_000));
        assert_eq!(m.view(), "Expired");

        let custom = m.with_expired_text("Time's up");
        assert_eq!(custom.view(), "Time's up");
    }

    #[test]
    fn test_view_default_styles() {
        let m = transition(0, &new(&Flags::new("1970-01-02T01:02:03Z")));
        let plain = strip_ansi_escapes::strip_str(m.view());
        assert_eq!(plain, "01 days  01 hours  02 minutes  03 seconds");

        let expired = transition(i64::MAX, &m);
        assert_eq!(strip_ansi_escapes::strip_str(expired.view()), "Expired");
    }

    #[test]
    fn test_options() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(0));
        let m = new_with_options(
            &Flags::new("2030-01-01"),
            &[
                with_interval(Duration::from_millis(100)),
                with_expired_text("done"),
                with_clock(clock),
            ],
        );
        assert_eq!(m.interval(), Duration::from_millis(100));
        assert_eq!(m.expired_text, "done");
        assert_eq!(m.clock.now_millis(), 0);
    }

    #[tokio::test]
    async fn test_init_command_samples_clock() {
        let clock = Arc::new(FixedClock::new(4_000));
        let m = countdown_to(10_000).with_clock(clock.clone());

        let msg = m.init().await.expect("tick message");
        let tick = msg.downcast_ref::<TickMsg>().expect("TickMsg");
        assert_eq!(tick.id, m.id());
        assert_eq!(tick.now, 4_000);
    }

    #[tokio::test]
    async fn test_expiry_command_emits_expired_msg() {
        let mut m = countdown_to(1_000);
        let cmd = m.update(Box::new(m.tick_msg(1_000))).expect("expiry command");

        let msg = cmd.await.expect("expired message");
        let expired = msg.downcast_ref::<ExpiredMsg>().expect("ExpiredMsg");
        assert_eq!(expired.id, m.id());
    }

    #[tokio::test]
    async fn test_tick_loop_runs_to_expiry() {
        let clock = Arc::new(FixedClock::new(0));
        let mut m = countdown_to(3_000)
            .with_interval(Duration::from_millis(1))
            .with_clock(clock.clone());

        let mut cmd = m.init();
        let mut ticks = 0;
        let mut previous = None;
        loop {
            let msg = cmd.await.expect("message");
            if let Some(expired) = msg.downcast_ref::<ExpiredMsg>() {
                assert_eq!(expired.id, m.id());
                assert!(m.update(msg).is_none());
                break;
            }

            let tick = msg.downcast_ref::<TickMsg>().expect("TickMsg");
            let (now, tag) = (tick.now, tick.tag);
            assert_eq!(now, clock.now_millis());
            assert_eq!(tag, m.tag);

            cmd = m.update(msg).expect("tick accepted");
            ticks += 1;
            assert_eq!(m.remaining_time(), 3_000 - now);
            if let Some(prev) = previous {
                assert_eq!(prev - m.remaining_time(), 1_000);
            }
            previous = Some(m.remaining_time());

            assert!(ticks <= 4, "countdown never expired");
            clock.advance(1_000);
        }

        assert_eq!(ticks, 4);
        assert!(m.expired());
        assert_eq!(m.remaining_time(), 0);
        assert!(m.subscription().is_none());
        assert!(m.update(Box::new(m.tick_msg(clock.now_millis()))).is_none());
    }
}
