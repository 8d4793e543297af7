use anyhow::Result;
use wardrobe_advisor::presentation::json::{CompleteEvent, StandardsEvent, StartEvent};
use wardrobe_advisor::presentation::{json, render_standards};

use super::Context;

pub fn cmd_standards(ctx: &Context) -> Result<()> {
    if ctx.json {
        json::emit(&StartEvent::new("standards"))?;
    }

    let advisor = ctx.advisor().map_err(|err| ctx.fail("standards", err))?;

    if ctx.json {
        json::emit(&StandardsEvent::new(advisor.standards()))?;
        json::emit(&CompleteEvent::success("standards"))?;
    } else {
        print!("{}", render_standards(advisor.standards()));
    }

    Ok(())
}
