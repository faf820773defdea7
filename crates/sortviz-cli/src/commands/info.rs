use std::io::Write;

use clap::Args;
use sortviz_core::AlgorithmKind;

use crate::cli::AlgorithmArg;
use crate::error::Result;
use crate::render;

#[derive(Debug, Clone, Args)]
pub struct InfoArgs {
    /// Algorithm to describe; both when omitted.
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<AlgorithmArg>,
}

pub fn run_info<W: Write>(args: &InfoArgs, out: &mut W) -> Result<()> {
    let kinds: Vec<AlgorithmKind> = match args.algorithm {
        Some(arg) => vec![arg.kind()],
        None => AlgorithmKind::ALL.to_vec(),
    };
    for (index, kind) in kinds.into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{kind}")?;
        writeln!(out)?;
        out.write_all(render::render_listing(kind, None).as_bytes())?;
        writeln!(out)?;
        out.write_all(render::render_complexity(kind).as_bytes())?;
    }
    out.flush()?;
    Ok(())
}
