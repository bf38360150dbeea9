//! The `whosthat list` command.

use anyhow::{Context, Result};

use crate::render;
use crate::SourceArgs;

pub async fn execute(args: SourceArgs) -> Result<()> {
    let (_, source) = super::resolve_source(&args)?;

    let creatures = source
        .fetch()
        .await
        .with_context(|| format!("failed to load creatures from {} source", source.name()))?;

    if creatures.is_empty() {
        println!("The source returned no creatures.");
        return Ok(());
    }

    println!("{}", render::creature_table(&creatures));
    println!("{} creature(s)", creatures.len());
    Ok(())
}
