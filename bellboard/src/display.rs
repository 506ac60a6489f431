//! Display sink capability and the terminal implementation.

use std::io::{self, Write};

use crate::presenter::DisplayFrame;

/// The three text slots the runtime writes each tick.
///
/// Injected into the runtime at construction; resolvers and presenter never
/// see it. Implementations decide how (and whether) to paint.
pub trait DisplaySink {
    fn set_day_line(&mut self, text: &str);
    fn set_status_line(&mut self, text: &str);
    fn set_detail_line(&mut self, text: &str);

    /// Push a whole frame through the three setters.
    fn apply(&mut self, frame: &DisplayFrame) {
        self.set_day_line(&frame.day_line);
        self.set_status_line(&frame.status_line);
        self.set_detail_line(&frame.detail_line);
    }
}

/// Terminal sink: repaints three lines in place on every update.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    lines: [String; 3],
    drawn: bool,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_line(&mut self, slot: usize, text: &str) {
        if self.lines[slot] == text && self.drawn {
            return;
        }
        self.lines[slot] = text.to_string();
        self.redraw();
    }

    fn redraw(&mut self) {
        let mut out = io::stdout();
        let mut paint = || -> io::Result<()> {
            if self.drawn {
                // Move back over the previously painted block.
                write!(out, "\x1b[3A")?;
            }
            for line in &self.lines {
                writeln!(out, "\r\x1b[2K{}", line)?;
            }
            out.flush()
        };
        if let Err(err) = paint() {
            tracing::debug!(%err, "terminal repaint failed");
        }
        self.drawn = true;
    }
}

impl DisplaySink for TerminalDisplay {
    fn set_day_line(&mut self, text: &str) {
        self.set_line(0, text);
    }

    fn set_status_line(&mut self, text: &str) {
        self.set_line(1, text);
    }

    fn set_detail_line(&mut self, text: &str) {
        self.set_line(2, text);
    }
}
