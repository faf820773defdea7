use std::io::Write;
use std::time::Duration;

use clap::Args;
use sortviz_core::{AlgorithmKind, BubbleSort, InsertionSort, SortAlgorithm};
use sortviz_runtime::{PlaybackClock, PlaybackController, SystemClock, TickOutcome};

use super::Session;
use crate::cli::{ArrayArgs, GlobalArgs};
use crate::error::Result;
use crate::render;

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Steps per second, 1-10.
    #[arg(long)]
    pub speed: Option<u8>,

    /// Stop after this many advances.
    #[arg(long)]
    pub max_steps: Option<usize>,
}

pub fn run_play<W: Write>(global: &GlobalArgs, args: &PlayArgs, out: &mut W) -> Result<()> {
    let session = Session::resolve(global, &args.array, args.speed)?;
    let shown = match args.array.algorithm.kind() {
        AlgorithmKind::Bubble => {
            let mut ctrl = session.controller::<BubbleSort, _>(SystemClock::new());
            write_current(&ctrl, out)?;
            autoplay(&mut ctrl, out, args.max_steps, std::thread::sleep)?
        }
        AlgorithmKind::Insertion => {
            let mut ctrl = session.controller::<InsertionSort, _>(SystemClock::new());
            write_current(&ctrl, out)?;
            autoplay(&mut ctrl, out, args.max_steps, std::thread::sleep)?
        }
    };
    tracing::info!(shown, "playback finished");
    Ok(())
}

/// Render the displayed step.
pub fn write_current<A, C, W>(ctrl: &PlaybackController<A, C>, out: &mut W) -> Result<()>
where
    A: SortAlgorithm,
    C: PlaybackClock,
    W: Write,
{
    out.write_all(render::render_step(A::KIND, ctrl.current_step(), ctrl.cursor()).as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Drive auto-play from the current step until the sequence ends or
/// `max_steps` advances have been shown. Each advanced step is rendered.
///
/// `wait` is called with the time left until the pending timer fires; the
/// binary sleeps, tests advance a manual clock.
pub fn autoplay<A, C, W>(
    ctrl: &mut PlaybackController<A, C>,
    out: &mut W,
    max_steps: Option<usize>,
    mut wait: impl FnMut(Duration),
) -> Result<usize>
where
    A: SortAlgorithm,
    C: PlaybackClock,
    W: Write,
{
    ctrl.play();

    let mut shown = 0;
    loop {
        if max_steps.is_some_and(|max| shown >= max) {
            ctrl.pause();
            break;
        }
        match ctrl.tick() {
            TickOutcome::Advanced => {
                shown += 1;
                writeln!(out)?;
                write_current(ctrl, out)?;
            }
            TickOutcome::Pending => {
                if let Some(remaining) = ctrl.time_until_due() {
                    wait(remaining);
                }
            }
            TickOutcome::Finished | TickOutcome::Idle => break,
        }
    }
    Ok(shown)
}
