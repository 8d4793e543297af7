use std::io::Write;
use std::path::Path;

use anyhow::{Context as _, Result};
use wardrobe_advisor::presentation::json::{
    AdviceEvent, CompleteEvent, EntryErrorEvent, StartEvent,
};
use wardrobe_advisor::presentation::{json, render_error, render_result};
use wardrobe_advisor::{advise_batch, load_batch, BatchOutcome};

use super::Context;

pub fn cmd_batch(ctx: &Context, file: &Path) -> Result<()> {
    if ctx.json {
        json::emit(&StartEvent::new("batch"))?;
    }

    let outcomes = advise_file(ctx, file).map_err(|err| ctx.fail("batch", err))?;
    let rejected = outcomes.iter().filter(|o| !o.is_ok()).count();
    let advised = outcomes.len() - rejected;

    for outcome in &outcomes {
        match &outcome.advice {
            Ok(advice) => {
                if ctx.json {
                    json::emit(&AdviceEvent::new(
                        Some(&outcome.name),
                        &advice.input,
                        &advice.result,
                    ))?;
                } else {
                    let title = Some(outcome.name.as_str());
                    print!(
                        "{}",
                        render_result(title, &advice.input, &advice.result, &ctx.icons)
                    );
                    println!();
                }
            }
            Err(err) => {
                if ctx.json {
                    json::emit(&EntryErrorEvent::new(&outcome.name, err))?;
                } else {
                    print!("{}", render_error(&outcome.name, &err.to_string(), &ctx.icons));
                    println!();
                }
            }
        }
    }

    if ctx.json {
        json::emit(&CompleteEvent::success("batch").with_counts(advised, rejected))?;
    } else {
        println!("Summary: {} advised, {} rejected", advised, rejected);
    }

    if rejected > 0 {
        std::io::stdout().flush()?;
        std::process::exit(1);
    }

    Ok(())
}

fn advise_file(ctx: &Context, file: &Path) -> Result<Vec<BatchOutcome>> {
    let advisor = ctx.advisor()?;
    let entries = load_batch(file)
        .with_context(|| format!("failed to read batch file {}", file.display()))?;
    Ok(advise_batch(&advisor, &entries, &ctx.config.defaults))
}
