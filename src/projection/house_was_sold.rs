//! `HouseWasSold`: reports the sale price of a house.

use crate::error::HandlerError;
use crate::event::Args;
use crate::projection::ProjectionResult;

pub const PROJECTION: &str = "HouseWasSold";

/// Reads the numeric `price` argument and formats it with two decimals.
pub fn handle(args: &Args) -> Result<ProjectionResult, HandlerError> {
    let price = args.number("price")?;
    Ok(ProjectionResult::new(format!("House was sold for {:.2}", price)))
}
