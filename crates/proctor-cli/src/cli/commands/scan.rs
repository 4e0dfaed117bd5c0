//! `proctor scan` - run every check.

use anyhow::Result;

use super::{emit, Context};
use crate::cli::args::ScanArgs;
use crate::output;

pub async fn execute(ctx: Context, args: ScanArgs) -> Result<()> {
    let engine = ctx.engine(&args.source)?;
    let report = engine.run_all_checks().await;

    emit(&output::render_report(&report, ctx.output_format)?);

    let overall = report.overall();
    if let Some(fail_on) = args.fail_on.or(ctx.config.fail_on) {
        if overall >= fail_on.threshold() {
            anyhow::bail!("scan result {overall} reached the --fail-on {fail_on:?} threshold");
        }
    }

    Ok(())
}
