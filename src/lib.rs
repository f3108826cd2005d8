#![warn(missing_docs)]

//! # bubbletea-countdown
//!
//! A deadline countdown component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The countdown follows the Elm Architecture used throughout bubbletea-rs:
//! `init()` creates the model and a command that samples the clock right
//! away, `update()` applies each time sample, and `view()` renders the
//! remaining days, hours, minutes and seconds, or "Expired" once the deadline
//! has passed.
//!
//! The state machine is deliberately small:
//!
//! - **Running**: the deadline is still ahead; a new sample is requested every
//!   interval (one second by default).
//! - **Expired**: the deadline has been reached. This state is terminal and no
//!   further samples are requested.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`countdown`] | The countdown model, its transition and tick policy |
//! | [`format`] | Days/hours/minutes/seconds breakdown of a duration |
//! | [`deadline`] | Parsing deadline strings into timestamps |
//! | [`clock`] | Wall-clock sources sampled by tick commands |
//! | [`config`] | Startup flags |
//! | [`key`] | Key bindings for host programs |
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_countdown::prelude::*;
//! use bubbletea_rs::{Model, Cmd, Msg};
//!
//! struct App {
//!     countdown: Countdown,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let (countdown, cmd) = countdown_init(&Flags::new("2030-01-01T00:00:00Z"));
//!         (Self { countdown }, Some(cmd))
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.countdown.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("New year in {}", self.countdown.view())
//!     }
//! }
//! ```
//!
//! ## Deadlines
//!
//! Deadlines are strings such as `2030-01-01T00:00:00Z`, `2030-01-01 12:00`
//! or `January 1, 2030 12:00:00`. A deadline that cannot be read is replaced
//! by the Unix epoch, so the countdown shows "Expired" after its first tick
//! rather than failing.

pub mod clock;
pub mod config;
pub mod countdown;
pub mod deadline;
pub mod error;
pub mod format;
pub mod key;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Flags;
pub use countdown::{
    init as countdown_init, new as countdown_new,
    new_with_options as countdown_new_with_options, tick_policy, transition, CountdownOption,
    ExpiredMsg as CountdownExpiredMsg, Model as Countdown, Status, Styles as CountdownStyles,
    TickMsg as CountdownTickMsg, TickRequest,
};
pub use error::{Error, Result};
pub use format::{breakdown, TimeUnit};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_countdown::prelude::*;
///
/// let countdown = countdown_new(&Flags::new("2030-01-01"));
/// assert_eq!(tick_policy(&countdown), TickRequest::Every(std::time::Duration::from_secs(1)));
/// ```
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::Flags;
    pub use crate::countdown::{
        init as countdown_init, new as countdown_new,
        new_with_options as countdown_new_with_options, tick_policy, transition, with_clock,
        with_expired_text, with_interval, with_styles, CountdownOption,
        ExpiredMsg as CountdownExpiredMsg, Model as Countdown, Status,
        Styles as CountdownStyles, TickMsg as CountdownTickMsg, TickRequest,
    };
    pub use crate::format::{breakdown, TimeUnit};
    pub use crate::key::{Binding, KeyMap};
}
