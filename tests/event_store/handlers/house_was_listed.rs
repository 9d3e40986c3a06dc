use sourced_eventbus::{Args, HandlerError, ProjectionResult};

pub const PROJECTION: &str = "HouseWasListed";

pub fn handle(args: &Args) -> Result<ProjectionResult, HandlerError> {
    let street = args.string("street")?;
    let price = args.number("price")?;
    Ok(ProjectionResult::new(format!(
        "House on {} was listed for {:.2}",
        street, price
    )))
}
