use std::io::Write;
use std::sync::Mutex;

use tracing::info;

use crate::core::error::{LocaleError, LocaleResult};

/// Delivers an already-built chat payload to one player's client.
pub trait MessageDispatcher {
    fn dispatch(&self, player: &str, payload: &str) -> LocaleResult<()>;
}

/// Console command line that hands `payload` to the client of `player`.
pub fn tellraw_command(player: &str, payload: &str) -> String {
    format!("tellraw {player} {payload}")
}

/// Writes `tellraw` console commands to any writer, one per line.
///
/// Pipe the output into a server console (or RCON bridge) to deliver
/// the messages.
pub struct ConsoleDispatcher<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> ConsoleDispatcher<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> MessageDispatcher for ConsoleDispatcher<W> {
    fn dispatch(&self, player: &str, payload: &str) -> LocaleResult<()> {
        let mut out = self.out.lock().map_err(|_| LocaleError::Dispatch {
            player: player.to_string(),
            reason: "console writer lock poisoned".into(),
        })?;
        writeln!(out, "{}", tellraw_command(player, payload)).map_err(|e| {
            LocaleError::Dispatch {
                player: player.to_string(),
                reason: e.to_string(),
            }
        })?;
        out.flush()?;
        info!("Dispatched message to {}", player);
        Ok(())
    }
}
