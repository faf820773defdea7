//! Line-driven stepping session.
//!
//! Reads one command per line and prints the displayed step after every
//! change. Bad commands print an error and the session continues.

use std::io::{BufRead, Write};
use std::time::Duration;

use clap::Args;
use sortviz_core::{
    AlgorithmKind, BubbleSort, InsertionSort, SortAlgorithm, SortOrder, StepView,
    parse_custom_values,
};
use sortviz_runtime::{PlaybackClock, PlaybackController, SystemClock};

use super::Session;
use super::play::{autoplay, write_current};
use crate::cli::{ArrayArgs, GlobalArgs};
use crate::error::{CliError, Result};
use crate::render;

#[derive(Debug, Clone, Args)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub array: ArrayArgs,
}

const HELP: &str = "\
commands:
  n, next            step forward
  p, prev            step back
  play               auto-play to the end
  speed N            set speed 1-10
  reset [VALUES]     restart; shuffles when VALUES is omitted
  order asc|desc     switch order and restart
  show               show the step with its pseudocode
  help               this text
  q, quit            leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExploreCommand {
    Next,
    Prev,
    Play,
    Speed(u8),
    Reset(Option<Vec<i32>>),
    Order(SortOrder),
    Show,
    Help,
    Quit,
}

impl ExploreCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let command = match head.to_ascii_lowercase().as_str() {
            "n" | "next" => Self::Next,
            "p" | "prev" => Self::Prev,
            "play" => Self::Play,
            "speed" => {
                let speed = rest.parse::<u8>().map_err(|_| {
                    CliError::invalid(format!("speed expects a number from 1 to 10, got {rest:?}"))
                })?;
                Self::Speed(speed)
            }
            "reset" if rest.is_empty() => Self::Reset(None),
            "reset" => Self::Reset(Some(parse_custom_values(rest)?)),
            "order" => match rest.to_ascii_lowercase().as_str() {
                "asc" | "ascending" => Self::Order(SortOrder::Ascending),
                "desc" | "descending" => Self::Order(SortOrder::Descending),
                _ => {
                    return Err(CliError::invalid(format!(
                        "order expects asc or desc, got {rest:?}"
                    )));
                }
            },
            "show" => Self::Show,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => {
                return Err(CliError::invalid(format!(
                    "unknown command {other:?}, try `help`"
                )));
            }
        };
        Ok(Some(command))
    }
}

pub fn run_explore<R: BufRead, W: Write>(
    global: &GlobalArgs,
    args: &ExploreArgs,
    input: R,
    out: &mut W,
) -> Result<()> {
    let session = Session::resolve(global, &args.array, None)?;
    match args.array.algorithm.kind() {
        AlgorithmKind::Bubble => {
            let mut ctrl = session.controller::<BubbleSort, _>(SystemClock::new());
            explore(&mut ctrl, input, out, std::thread::sleep)
        }
        AlgorithmKind::Insertion => {
            let mut ctrl = session.controller::<InsertionSort, _>(SystemClock::new());
            explore(&mut ctrl, input, out, std::thread::sleep)
        }
    }
}

/// Run the command loop until `quit` or end of input.
pub fn explore<A, C, R, W>(
    ctrl: &mut PlaybackController<A, C>,
    input: R,
    out: &mut W,
    mut wait: impl FnMut(Duration),
) -> Result<()>
where
    A: SortAlgorithm,
    C: PlaybackClock,
    R: BufRead,
    W: Write,
{
    write_current(ctrl, out)?;
    for line in input.lines() {
        let line = line?;
        let command = match ExploreCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        tracing::debug!(?command, cursor = ctrl.cursor(), "explore command");

        match command {
            ExploreCommand::Next => {
                if ctrl.step_forward() {
                    write_current(ctrl, out)?;
                } else {
                    writeln!(out, "end of sequence")?;
                }
            }
            ExploreCommand::Prev => {
                if ctrl.step_backward() {
                    write_current(ctrl, out)?;
                } else {
                    writeln!(out, "already at the first step")?;
                }
            }
            ExploreCommand::Play => {
                let shown = autoplay(ctrl, out, None, &mut wait)?;
                writeln!(out, "played {shown} steps")?;
            }
            ExploreCommand::Speed(speed) => {
                ctrl.set_speed(speed);
                let millis = ctrl.delay().as_millis();
                writeln!(out, "speed {} ({millis} ms per step)", ctrl.speed())?;
            }
            ExploreCommand::Reset(values) => {
                ctrl.reset(values.as_deref(), None);
                write_current(ctrl, out)?;
            }
            ExploreCommand::Order(order) => {
                ctrl.reset(None, Some(order));
                write_current(ctrl, out)?;
            }
            ExploreCommand::Show => {
                write_current(ctrl, out)?;
                let line = A::KIND.listing_line(ctrl.current_step().code_highlight());
                out.write_all(render::render_listing(A::KIND, Some(line)).as_bytes())?;
            }
            ExploreCommand::Help => out.write_all(HELP.as_bytes())?,
            ExploreCommand::Quit => break,
        }
    }
    out.flush()?;
    Ok(())
}
