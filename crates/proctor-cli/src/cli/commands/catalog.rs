//! `proctor catalog` - list screen-sharing signatures.

use anyhow::Result;
use proctor_core::{AppSignature, Platform};

use super::{emit, Context};
use crate::cli::args::CatalogArgs;
use crate::output::{self, OutputFormat};

pub fn execute(ctx: Context, args: CatalogArgs) -> Result<()> {
    let platform = args.platform.unwrap_or_else(Platform::current);
    let catalog = ctx.config.catalog()?;
    let signatures: Vec<&AppSignature> = catalog.applicable(platform).collect();

    if ctx.output_format == OutputFormat::Pretty {
        println!("Screen-sharing signatures for {platform} ({}):", signatures.len());
        println!();
    }
    emit(&output::render_signatures(&signatures, ctx.output_format)?);

    Ok(())
}
