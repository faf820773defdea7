use std::io::Write;

use clap::{Args, ValueEnum};
use serde::Serialize;
use sortviz_core::{AlgorithmKind, BubbleSort, InsertionSort, SortAlgorithm, SortOrder, StepView};
use sortviz_runtime::SystemClock;

use super::Session;
use crate::cli::{ArrayArgs, GlobalArgs};
use crate::error::Result;
use crate::render;

#[derive(Debug, Clone, Args)]
pub struct TraceArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = TraceFormat::Text)]
    pub format: TraceFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceFormat {
    Text,
    /// One JSON object per step.
    Jsonl,
}

/// One JSONL line.
#[derive(Debug, Serialize)]
struct TraceRecord<'a, S> {
    index: usize,
    algorithm: &'static str,
    order: SortOrder,
    /// 1-based listing line for the step's code highlight.
    line: usize,
    step: &'a S,
}

pub fn run_trace<W: Write>(global: &GlobalArgs, args: &TraceArgs, out: &mut W) -> Result<()> {
    let session = Session::resolve(global, &args.array, None)?;
    let steps = match args.array.algorithm.kind() {
        AlgorithmKind::Bubble => write_trace::<BubbleSort, _>(&session, args.format, out)?,
        AlgorithmKind::Insertion => write_trace::<InsertionSort, _>(&session, args.format, out)?,
    };
    tracing::info!(steps, "trace written");
    Ok(())
}

/// Generate the whole sequence and write it. Returns the step count.
pub fn write_trace<A, W>(session: &Session, format: TraceFormat, out: &mut W) -> Result<usize>
where
    A: SortAlgorithm,
    A::Step: Serialize,
    W: Write,
{
    let mut ctrl = session.controller::<A, _>(SystemClock::new());
    while ctrl.step_forward() {}

    let order = ctrl.order();
    for (index, step) in ctrl.history().iter().enumerate() {
        match format {
            TraceFormat::Text => {
                if index > 0 {
                    writeln!(out)?;
                }
                out.write_all(render::render_step(A::KIND, step, index).as_bytes())?;
            }
            TraceFormat::Jsonl => {
                let record = TraceRecord {
                    index,
                    algorithm: A::KIND.slug(),
                    order,
                    line: A::KIND.listing_line(step.code_highlight()) + 1,
                    step,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(ctrl.history().len())
}
