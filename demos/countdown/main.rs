//! Countdown demo.
//!
//! ```sh
//! cargo run -- "2030-01-01T00:00:00Z"
//! COUNTDOWN_DEADLINE="December 31, 2026 23:59:59" cargo run
//! COUNTDOWN_LOG=countdown.log RUST_LOG=debug cargo run -- 2030-01-01
//! ```

use bubbletea_countdown::prelude::*;
use bubbletea_rs::{quit, Cmd, KeyMsg, Model, Msg, Program};
use lipgloss_extras::prelude::*;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

struct App {
    countdown: Countdown,
    keys: KeyMap,
}

fn flags() -> Flags {
    match std::env::args().nth(1) {
        Some(deadline) => Flags::new(deadline),
        None => Flags::from_env(),
    }
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let (countdown, cmd) = countdown_init(&flags());
        let app = App {
            countdown,
            keys: KeyMap::new(),
        };
        (app, Some(cmd))
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keys.quit.matches(key_msg) {
                return Some(quit());
            }
            return None;
        }

        if let Some(expired) = msg.downcast_ref::<CountdownExpiredMsg>() {
            if expired.id == self.countdown.id() {
                tracing::info!("deadline reached");
            }
            return None;
        }

        self.countdown.update(msg)
    }

    fn view(&self) -> String {
        let help = Style::new()
            .foreground(Color::from("241"))
            .render(&self.keys.short_help());
        format!("\n  {}\n\n  {}\n", self.countdown.view(), help)
    }
}

// Logging goes to a file: anything on stderr would tear the alternate screen.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let Ok(path) = std::env::var("COUNTDOWN_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;

    Ok(())
}
