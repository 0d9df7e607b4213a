pub mod price;
pub mod time;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Dimensioned scalar: cost, energy, and time exponents.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct Quantity<const COST: isize, const ENERGY: isize, const TIME: isize>(
    pub OrderedFloat<f64>,
);
