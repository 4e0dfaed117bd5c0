//! `proctor check` - run a single check.

use anyhow::Result;
use proctor_core::CheckName;

use super::{emit, Context};
use crate::cli::args::CheckArgs;
use crate::output;

pub async fn execute(ctx: Context, args: CheckArgs) -> Result<()> {
    let engine = ctx.engine(&args.source)?;
    let verdict = engine.run_check(CheckName::from(args.check)).await;

    emit(&output::render_verdict(&verdict, ctx.output_format)?);
    Ok(())
}
