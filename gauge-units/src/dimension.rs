//! Dimensional analysis types
//!
//! A dimension is a product of base-dimension symbols raised to rational
//! exponents, e.g. `mass length^2 time^-2` for energy or
//! `mass^1/2 length^3/2 time^-1` for cgs charge.

use std::collections::BTreeMap;
use std::fmt;
use num_rational::Rational32;
use num_traits::{CheckedAdd, CheckedMul, One, Zero};
use serde::{Serialize, Deserialize};
use crate::UnitError;

/// Base dimension symbols
pub const MASS: &str = "mass";
pub const LENGTH: &str = "length";
pub const TIME: &str = "time";
pub const TEMPERATURE: &str = "temperature";
pub const ANGLE: &str = "angle";
pub const CURRENT_MKS: &str = "current_mks";

/// Every symbol a valid dimension may be built from
pub const BASE_DIMENSIONS: [&str; 6] = [MASS, LENGTH, TIME, TEMPERATURE, ANGLE, CURRENT_MKS];

/// Represents the dimensions of a physical quantity as exponents of
/// base-dimension symbols. Zero exponents are never stored and every
/// exponent is in lowest terms with a positive denominator, including
/// dimensions loaded through serde.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Rational32>",
    into = "BTreeMap<String, Rational32>"
)]
pub struct Dimension {
    factors: BTreeMap<String, Rational32>,
}

impl Dimension {
    /// Dimensionless quantity (no factors)
    pub fn dimensionless() -> Self {
        Self::default()
    }

    /// A single symbol to the first power. The name is not checked here;
    /// see [`validate_dimensions`].
    pub fn symbol(name: &str) -> Self {
        let mut factors = BTreeMap::new();
        factors.insert(name.to_string(), Rational32::one());
        Dimension { factors }
    }

    /// Build from `(symbol, exponent)` pairs, accumulating repeated symbols
    pub fn from_exponents<'a, I>(exponents: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Rational32)>,
    {
        let mut result = Dimension::dimensionless();
        for (name, exp) in exponents {
            result = result.multiply(&Dimension::symbol(name).power(exp));
        }
        result
    }

    pub fn mass() -> Self {
        Self::symbol(MASS)
    }

    pub fn length() -> Self {
        Self::symbol(LENGTH)
    }

    pub fn time() -> Self {
        Self::symbol(TIME)
    }

    pub fn temperature() -> Self {
        Self::symbol(TEMPERATURE)
    }

    pub fn angle() -> Self {
        Self::symbol(ANGLE)
    }

    pub fn current_mks() -> Self {
        Self::symbol(CURRENT_MKS)
    }

    /// Solid angle [angle^2]
    pub fn solid_angle() -> Self {
        Self::angle().powi(2)
    }

    /// Rate [time^-1]
    pub fn rate() -> Self {
        Self::time().invert()
    }

    /// Area [length^2]
    pub fn area() -> Self {
        Self::length().powi(2)
    }

    /// Velocity [length time^-1]
    pub fn velocity() -> Self {
        Self::length().divide(&Self::time())
    }

    /// Acceleration [length time^-2]
    pub fn acceleration() -> Self {
        Self::velocity().divide(&Self::time())
    }

    /// Force [mass length time^-2]
    pub fn force() -> Self {
        Self::mass().multiply(&Self::acceleration())
    }

    /// Energy [mass length^2 time^-2]
    pub fn energy() -> Self {
        Self::force().multiply(&Self::length())
    }

    /// Power [mass length^2 time^-3]
    pub fn power_dimension() -> Self {
        Self::energy().divide(&Self::time())
    }

    /// Pressure [mass length^-1 time^-2]
    pub fn pressure() -> Self {
        Self::force().divide(&Self::area())
    }

    /// Spectral flux density [mass time^-2]
    pub fn flux_density() -> Self {
        Self::power_dimension().divide(&Self::area()).divide(&Self::rate())
    }

    /// Gaussian charge [mass^1/2 length^3/2 time^-1]
    pub fn charge_cgs() -> Self {
        Self::energy().multiply(&Self::length()).power(Rational32::new(1, 2))
    }

    /// Gaussian magnetic field [mass^1/2 length^-1/2 time^-1]
    pub fn magnetic_field_cgs() -> Self {
        Self::pressure().power(Rational32::new(1, 2))
    }

    /// SI charge [current time]
    pub fn charge_mks() -> Self {
        Self::current_mks().multiply(&Self::time())
    }

    /// SI magnetic field [mass time^-2 current^-1]
    pub fn magnetic_field_mks() -> Self {
        Self::force().divide(&Self::charge_mks().multiply(&Self::velocity()))
    }

    /// Voltage [mass length^2 time^-3 current^-1]
    pub fn voltage() -> Self {
        Self::energy().divide(&Self::charge_mks())
    }

    /// Resistance [mass length^2 time^-3 current^-2]
    pub fn resistance() -> Self {
        Self::voltage().divide(&Self::current_mks())
    }

    /// Check if this is a dimensionless quantity
    pub fn is_dimensionless(&self) -> bool {
        self.factors.is_empty()
    }

    /// Exponent of `name`, zero when absent
    pub fn exponent(&self, name: &str) -> Rational32 {
        self.factors.get(name).copied().unwrap_or_else(Rational32::zero)
    }

    /// `(symbol, exponent)` pairs in symbol order
    pub fn factors(&self) -> impl Iterator<Item = (&str, Rational32)> + '_ {
        self.factors.iter().map(|(name, exp)| (name.as_str(), *exp))
    }

    /// Multiply dimensions (add exponents).
    ///
    /// # Panics
    ///
    /// If an exponent overflows `i32`; see [`Dimension::checked_multiply`].
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        match self.checked_multiply(other) {
            Some(result) => result,
            None => panic!("dimension exponent overflow in {} * {}", self, other),
        }
    }

    /// Multiply dimensions, or `None` if an exponent overflows `i32`
    pub fn checked_multiply(&self, other: &Dimension) -> Option<Dimension> {
        let mut factors = self.factors.clone();
        for (name, exp) in &other.factors {
            let sum = factors.get(name)
                .map_or(Some(*exp), |current| current.checked_add(exp))?;
            if sum.is_zero() {
                factors.remove(name);
            } else {
                factors.insert(name.clone(), sum);
            }
        }
        Some(Dimension { factors })
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        self.multiply(&other.invert())
    }

    /// Raise to a rational power (multiply exponents).
    ///
    /// # Panics
    ///
    /// If an exponent overflows `i32`; see [`Dimension::checked_power`].
    pub fn power(&self, exp: Rational32) -> Dimension {
        match self.checked_power(exp) {
            Some(result) => result,
            None => panic!("dimension exponent overflow in ({})^{}", self, exp),
        }
    }

    /// Raise to a rational power, or `None` if an exponent overflows `i32`
    pub fn checked_power(&self, exp: Rational32) -> Option<Dimension> {
        if exp.is_zero() {
            return Some(Dimension::dimensionless());
        }
        let factors = self.factors.iter()
            .map(|(name, e)| e.checked_mul(&exp).map(|e| (name.clone(), e)))
            .collect::<Option<_>>()?;
        Some(Dimension { factors })
    }

    /// Raise to an integer power
    pub fn powi(&self, exp: i32) -> Dimension {
        self.power(Rational32::from_integer(exp))
    }

    /// Invert dimensions (negate exponents)
    pub fn invert(&self) -> Dimension {
        self.powi(-1)
    }

    /// Get the dimension name if it matches a common dimension
    pub fn name(&self) -> Option<&'static str> {
        let named: [(fn() -> Dimension, &'static str); 21] = [
            (Dimension::dimensionless, "dimensionless"),
            (Dimension::mass, "mass"),
            (Dimension::length, "length"),
            (Dimension::time, "time"),
            (Dimension::temperature, "temperature"),
            (Dimension::angle, "angle"),
            (Dimension::current_mks, "current"),
            (Dimension::solid_angle, "solid angle"),
            (Dimension::rate, "rate"),
            (Dimension::area, "area"),
            (Dimension::velocity, "velocity"),
            (Dimension::acceleration, "acceleration"),
            (Dimension::force, "force"),
            (Dimension::energy, "energy"),
            (Dimension::power_dimension, "power"),
            (Dimension::pressure, "pressure"),
            (Dimension::flux_density, "flux density"),
            (Dimension::charge_cgs, "charge"),
            (Dimension::magnetic_field_cgs, "magnetic field"),
            (Dimension::charge_mks, "charge"),
            (Dimension::magnetic_field_mks, "magnetic field"),
        ];
        named.iter()
            .find(|(make, _)| make() == *self)
            .map(|(_, name)| *name)
    }
}

/// Check that `dimensions` is a well-formed dimensional expression: every
/// factor is a known base dimension.
pub fn validate_dimensions(dimensions: &Dimension) -> Result<(), UnitError> {
    for name in dimensions.factors.keys() {
        if !BASE_DIMENSIONS.contains(&name.as_str()) {
            return Err(UnitError::unit_parse(format!(
                "Bad dimensionality expression '{}': '{}' is not a base dimension.",
                dimensions, name
            )));
        }
    }
    Ok(())
}

impl TryFrom<BTreeMap<String, Rational32>> for Dimension {
    type Error = UnitError;

    /// Normalize raw `(symbol, exponent)` pairs: reduce each exponent to
    /// lowest terms with a positive denominator and drop zero exponents.
    fn try_from(raw: BTreeMap<String, Rational32>) -> Result<Self, Self::Error> {
        let mut factors = BTreeMap::new();
        for (name, exp) in raw {
            let (numer, denom) = (*exp.numer(), *exp.denom());
            if denom == 0 {
                return Err(UnitError::unit_parse(format!(
                    "Bad dimensionality expression: zero denominator in exponent of '{}'.",
                    name
                )));
            }
            // reducing i32::MIN would overflow on negation
            if numer == i32::MIN || denom == i32::MIN {
                return Err(UnitError::unit_parse(format!(
                    "Bad dimensionality expression: exponent of '{}' out of range.",
                    name
                )));
            }
            let exp = Rational32::new(numer, denom);
            if !exp.is_zero() {
                factors.insert(name, exp);
            }
        }
        Ok(Dimension { factors })
    }
}

impl From<Dimension> for BTreeMap<String, Rational32> {
    fn from(dimension: Dimension) -> Self {
        dimension.factors
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }

        let parts: Vec<String> = self.factors.iter()
            .map(|(name, exp)| {
                if exp.is_one() {
                    name.clone()
                } else {
                    format!("{}^{}", name, exp)
                }
            })
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}
