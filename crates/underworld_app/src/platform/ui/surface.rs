use std::fmt;
use std::io::Write;

use site_logging::site_warn;

use super::constants::{Slot, Target};

/// The only operations the core's host performs on the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    Activate(Target),
    Deactivate(Target),
    SetText(Slot, String),
    Show(Slot),
    Hide(Slot),
    ScrollIntoView(Slot),
}

impl fmt::Display for SurfaceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceCommand::Activate(target) => write!(f, "activate {target}"),
            SurfaceCommand::Deactivate(target) => write!(f, "deactivate {target}"),
            SurfaceCommand::SetText(slot, text) => write!(f, "text {slot} = {text:?}"),
            SurfaceCommand::Show(slot) => write!(f, "show {slot}"),
            SurfaceCommand::Hide(slot) => write!(f, "hide {slot}"),
            SurfaceCommand::ScrollIntoView(slot) => write!(f, "scroll {slot}"),
        }
    }
}

pub trait Surface {
    fn apply(&mut self, command: SurfaceCommand);

    fn apply_all(&mut self, commands: Vec<SurfaceCommand>) {
        for command in commands {
            self.apply(command);
        }
    }
}

/// Writes each command as one line, e.g. `activate control:about`.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn apply(&mut self, command: SurfaceCommand) {
        if let Err(err) = writeln!(self.out, "{command}").and_then(|()| self.out.flush()) {
            site_warn!("surface write failed: {}", err);
        }
    }
}
