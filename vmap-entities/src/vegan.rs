use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

pub type VeganOptionPrimitive = i16;

/// How far a place caters for a vegan diet.
///
/// The textual codes are `full`, `partial` and `none`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, EnumIter, EnumString, AsRefStr, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VeganOption {
    /// Vegan options are not offered
    #[strum(serialize = "none")]
    Unavailable = 0,
    /// Some vegan options
    Partial     = 1,
    /// Exclusively vegan
    Full        = 2,
}

#[derive(Debug, Error)]
#[error("Invalid vegan option primitive: {0}")]
pub struct InvalidVeganOptionPrimitive(VeganOptionPrimitive);

impl TryFrom<VeganOptionPrimitive> for VeganOption {
    type Error = InvalidVeganOptionPrimitive;
    fn try_from(from: VeganOptionPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidVeganOptionPrimitive(from))
    }
}

impl From<VeganOption> for VeganOptionPrimitive {
    fn from(from: VeganOption) -> Self {
        from as Self
    }
}
