//! Projections - named handlers that compute a result from an event's args.
//!
//! A projection handler is a plain function of the argument bag:
//!
//! ```
//! use sourced_eventbus::{Args, HandlerError, HandlerRegistry, ProjectionResult};
//!
//! let registry = HandlerRegistry::new()
//!     .projection("RoomWasBooked", |args: &Args| {
//!         let nights = args.number("nights")?;
//!         Ok(ProjectionResult::new(format!("Room booked for {} nights", nights)))
//!     });
//!
//! let handler = registry.lookup("RoomWasBooked").unwrap();
//! let result = handler(&Args::from([("nights", 3.0)])).unwrap();
//! assert_eq!(result.message, "Room booked for 3 nights");
//! ```
//!
//! ## Handler Convention
//!
//! Handler modules export the projection name and a `handle` function, and
//! are registered with [`register_projections!`](crate::register_projections):
//!
//! ```ignore
//! // src/projection/house_was_sold.rs
//!
//! pub const PROJECTION: &str = "HouseWasSold";
//!
//! pub fn handle(args: &Args) -> Result<ProjectionResult, HandlerError> {
//!     let price = args.number("price")?;
//!     Ok(ProjectionResult::new(format!("House was sold for {:.2}", price)))
//! }
//! ```

pub mod house_was_sold;
mod registry;

pub use registry::{Handler, HandlerRegistry};

use std::fmt;

/// Outcome of a successful handler invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectionResult {
    pub message: String,
}

impl ProjectionResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ProjectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Register handler modules with a registry using the convention pattern.
///
/// Each handler module must export:
/// - `PROJECTION: &str` - the projection name
/// - `handle(&Args) -> Result<ProjectionResult, HandlerError>` - the handler
///
/// # Example
/// ```
/// use sourced_eventbus::{projection, HandlerRegistry};
///
/// let registry = sourced_eventbus::register_projections!(
///     HandlerRegistry::new(),
///     projection::house_was_sold,
/// );
/// assert!(registry.contains("HouseWasSold"));
/// ```
#[macro_export]
macro_rules! register_projections {
    ($registry:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $registry
        $(
            .projection(
                $($seg)::+::PROJECTION,
                $($seg)::+::handle,
            )
        )+
    };
}
