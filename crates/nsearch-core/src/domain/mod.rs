//! Domain model traits for neighbourhood search.
//!
//! - [`Problem`]: evaluates and validates solutions
//! - [`Move`]: reversible transformation of a solution
//! - [`Neighbourhood`]: generates moves for a given solution

mod traits;

pub use traits::{Move, Neighbourhood, Problem};
