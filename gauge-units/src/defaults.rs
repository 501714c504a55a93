//! Default unit symbols, organized by family
//!
//! Base values are relative to the cgs base units: g, cm, s, K, radian, A.

use std::f64::consts::PI;
use crate::{Dimension, SymbolTable, UnitDefinition};

/// Speed of light in cm/s, used for the light year
const SPEED_OF_LIGHT_CM_PER_S: f64 = 2.99792458e10;
/// Julian year in seconds
const SEC_PER_YEAR: f64 = 31_557_600.0;
/// One Rankine (and one Fahrenheit degree) in kelvin
const KELVIN_PER_RANKINE: f64 = 5.0 / 9.0;

/// Build the default table
pub(crate) fn default_unit_symbol_lut() -> SymbolTable {
    let mut table = SymbolTable::new();
    register_base_units(&mut table);
    register_cgs_units(&mut table);
    register_temperature_units(&mut table);
    register_mks_units(&mut table);
    register_imperial_units(&mut table);
    register_time_units(&mut table);
    register_astro_units(&mut table);
    register_atomic_units(&mut table);
    register_angle_units(&mut table);
    register_dimensionless_units(&mut table);
    register_code_units(&mut table);
    table
}

fn register(table: &mut SymbolTable, symbol: &str, base_value: f64, dimensions: Dimension, tex_repr: &str) {
    table.insert(symbol, UnitDefinition::new(base_value, dimensions, tex_repr));
}

fn register_base_units(table: &mut SymbolTable) {
    register(table, "g", 1.0, Dimension::mass(), r"\rm{g}");
    register(table, "cm", 1.0, Dimension::length(), r"\rm{cm}");
    register(table, "s", 1.0, Dimension::time(), r"\rm{s}");
    register(table, "K", 1.0, Dimension::temperature(), r"\rm{K}");
    register(table, "radian", 1.0, Dimension::angle(), r"\rm{radian}");
    register(table, "A", 1.0, Dimension::current_mks(), r"\rm{A}");
}

fn register_cgs_units(table: &mut SymbolTable) {
    register(table, "erg", 1.0, Dimension::energy(), r"\rm{erg}");
    register(table, "dyne", 1.0, Dimension::force(), r"\rm{dyn}");
    register(table, "esu", 1.0, Dimension::charge_cgs(), r"\rm{esu}");
    register(table, "statC", 1.0, Dimension::charge_cgs(), r"\rm{statC}");
    register(table, "gauss", 1.0, Dimension::magnetic_field_cgs(), r"\rm{G}");
    register(table, "G", 1.0, Dimension::magnetic_field_cgs(), r"\rm{G}");
}

fn register_temperature_units(table: &mut SymbolTable) {
    table.insert("degC", UnitDefinition::with_offset(1.0, Dimension::temperature(), -273.15, r"^\circ\rm{C}"));
    table.insert("degF", UnitDefinition::with_offset(KELVIN_PER_RANKINE, Dimension::temperature(), -459.67, r"^\circ\rm{F}"));
    register(table, "R", KELVIN_PER_RANKINE, Dimension::temperature(), r"^\circ\rm{R}");
}

fn register_mks_units(table: &mut SymbolTable) {
    register(table, "m", 1.0e2, Dimension::length(), r"\rm{m}");
    register(table, "kg", 1.0e3, Dimension::mass(), r"\rm{kg}");
    register(table, "J", 1.0e7, Dimension::energy(), r"\rm{J}");
    register(table, "W", 1.0e7, Dimension::power_dimension(), r"\rm{W}");
    register(table, "Hz", 1.0, Dimension::rate(), r"\rm{Hz}");
    register(table, "N", 1.0e5, Dimension::force(), r"\rm{N}");
    register(table, "C", 1.0, Dimension::charge_mks(), r"\rm{C}");
    register(table, "T", 1.0e3, Dimension::magnetic_field_mks(), r"\rm{T}");
    register(table, "Pa", 10.0, Dimension::pressure(), r"\rm{Pa}");
    register(table, "V", 1.0e7, Dimension::voltage(), r"\rm{V}");
    register(table, "ohm", 1.0e7, Dimension::resistance(), r"\Omega");
}

fn register_imperial_units(table: &mut SymbolTable) {
    register(table, "in", 2.54, Dimension::length(), r"\rm{in}");
    register(table, "ft", 30.48, Dimension::length(), r"\rm{ft}");
    register(table, "mile", 160_934.4, Dimension::length(), r"\rm{mile}");
    register(table, "lb", 453.59237, Dimension::mass(), r"\rm{lb}");
}

fn register_time_units(table: &mut SymbolTable) {
    register(table, "min", 60.0, Dimension::time(), r"\rm{min}");
    register(table, "hr", 3600.0, Dimension::time(), r"\rm{hr}");
    register(table, "day", 86_400.0, Dimension::time(), r"\rm{d}");
    register(table, "yr", SEC_PER_YEAR, Dimension::time(), r"\rm{yr}");
}

fn register_astro_units(table: &mut SymbolTable) {
    register(table, "pc", 3.0856775813057e18, Dimension::length(), r"\rm{pc}");
    register(table, "AU", 1.495978707e13, Dimension::length(), r"\rm{AU}");
    register(table, "au", 1.495978707e13, Dimension::length(), r"\rm{AU}");
    register(table, "ly", SPEED_OF_LIGHT_CM_PER_S * SEC_PER_YEAR, Dimension::length(), r"\rm{ly}");

    register(table, "Msun", 1.98841586e33, Dimension::mass(), r"M_\odot");
    register(table, "Rsun", 6.95508e10, Dimension::length(), r"R_\odot");
    register(table, "Lsun", 3.8270e33, Dimension::power_dimension(), r"L_\odot");
    register(table, "Tsun", 5777.0, Dimension::temperature(), r"T_\odot");
    register(table, "Zsun", 0.02041, Dimension::dimensionless(), r"Z_\odot");
    register(table, "Mjup", 1.8987e30, Dimension::mass(), r"M_{\rm{Jup}}");
    register(table, "Mearth", 5.9723e27, Dimension::mass(), r"M_\oplus");
}

fn register_atomic_units(table: &mut SymbolTable) {
    register(table, "eV", 1.602176562e-12, Dimension::energy(), r"\rm{eV}");
    register(table, "amu", 1.660538921e-24, Dimension::mass(), r"\rm{amu}");
    register(table, "angstrom", 1.0e-8, Dimension::length(), r"\AA");
    register(table, "Angstrom", 1.0e-8, Dimension::length(), r"\AA");
    register(table, "me", 9.10938291e-28, Dimension::mass(), r"m_e");
    register(table, "mp", 1.672621777e-24, Dimension::mass(), r"m_p");

    // Jansky: 1e-23 erg / s / cm^2 / Hz
    register(table, "Jy", 1.0e-23, Dimension::flux_density(), r"\rm{Jy}");
    register(table, "counts", 1.0, Dimension::dimensionless(), r"\rm{counts}");
    register(table, "photons", 1.0, Dimension::dimensionless(), r"\rm{photons}");
}

fn register_angle_units(table: &mut SymbolTable) {
    register(table, "degree", PI / 180.0, Dimension::angle(), r"^\circ");
    register(table, "arcmin", PI / 10_800.0, Dimension::angle(), r"\rm{arcmin}");
    register(table, "arcsec", PI / 648_000.0, Dimension::angle(), r"\rm{arcsec}");
    register(table, "mas", PI / 648_000_000.0, Dimension::angle(), r"\rm{mas}");
    register(table, "steradian", 1.0, Dimension::solid_angle(), r"\rm{sr}");
}

fn register_dimensionless_units(table: &mut SymbolTable) {
    register(table, "h", 1.0, Dimension::dimensionless(), "h");
    register(table, "dimensionless", 1.0, Dimension::dimensionless(), "");
}

// Simulation units start at 1.0 and are rescaled with `UnitRegistry::modify`
// once a dataset's parameters are known.
fn register_code_units(table: &mut SymbolTable) {
    register(table, "code_length", 1.0, Dimension::length(), r"\rm{code\ length}");
    register(table, "code_mass", 1.0, Dimension::mass(), r"\rm{code\ mass}");
    register(table, "code_time", 1.0, Dimension::time(), r"\rm{code\ time}");
    register(table, "code_velocity", 1.0, Dimension::velocity(), r"\rm{code\ velocity}");
    register(table, "code_magnetic", 1.0, Dimension::magnetic_field_cgs(), r"\rm{code\ magnetic}");
    register(table, "code_temperature", 1.0, Dimension::temperature(), r"\rm{code\ temperature}");
    register(table, "code_metallicity", 1.0, Dimension::dimensionless(), r"\rm{code\ metallicity}");
    register(table, "unitary", 1.0, Dimension::length(), r"\rm{unitary}");
}
