use anyhow::Result;
use wardrobe_advisor::presentation::json::{AdviceEvent, CompleteEvent, StartEvent};
use wardrobe_advisor::presentation::{json, render_result};
use wardrobe_advisor::{
    map_to_smart_default_type, ConfigurationInput, ConfigurationResult, LengthUnit, WardrobeType,
};

use super::Context;

pub struct AdviseArgs {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub unit: Option<LengthUnit>,
    pub wardrobe_type: Option<WardrobeType>,
    pub label: Option<String>,
}

impl AdviseArgs {
    /// Flags first, then configured defaults
    fn to_input(&self, ctx: &Context) -> ConfigurationInput {
        let defaults = &ctx.config.defaults;
        let wardrobe_type = match (self.wardrobe_type, self.label.as_deref()) {
            (Some(kind), _) => kind,
            (None, Some(label)) => map_to_smart_default_type(label),
            (None, None) => defaults.wardrobe_type,
        };
        ConfigurationInput::new(
            self.unit.unwrap_or(defaults.unit),
            self.width,
            self.height,
            self.depth,
            wardrobe_type,
        )
    }
}

pub fn cmd_advise(ctx: &Context, args: AdviseArgs) -> Result<()> {
    if ctx.json {
        json::emit(&StartEvent::new("advise"))?;
    }

    let (input, result) = advise(ctx, &args).map_err(|err| ctx.fail("advise", err))?;

    if ctx.json {
        json::emit(&AdviceEvent::new(None, &input, &result))?;
        json::emit(&CompleteEvent::success("advise"))?;
    } else {
        print!("{}", render_result(None, &input, &result, &ctx.icons));
    }

    Ok(())
}

fn advise(ctx: &Context, args: &AdviseArgs) -> Result<(ConfigurationInput, ConfigurationResult)> {
    let advisor = ctx.advisor()?;
    let input = args.to_input(ctx);
    let result = advisor.advise(&input)?;
    Ok((input, result))
}
