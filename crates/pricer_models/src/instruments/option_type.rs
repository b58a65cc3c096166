//! Option type discriminator.

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::Float;

use super::error::InstrumentError;

/// Right conveyed by the option: buy (call) or sell (put) the underlying.
///
/// Parsed from text case-insensitively, so `"call"`, `"Call"` and `" CALL "`
/// all map to [`OptionType::Call`]. Anything else is rejected with
/// [`InstrumentError::InvalidOptionType`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call: OptionType = "CALL".parse().unwrap();
/// assert_eq!(call, OptionType::Call);
/// assert_eq!(call.to_string(), "call");
///
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Exercise value at the given spot.
    ///
    /// ```
    /// use pricer_models::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let payoff = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        payoff.max(T::zero())
    }

    /// Lower-case name, matching the accepted text form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(InstrumentError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<&str> for OptionType {
    type Error = InstrumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
