//! Air property constants folded into the correlations.
//!
//! Properties are taken at a reference film temperature of 50 °C and treated
//! as constant over the operating range.

/// Thermal conductivity of air at 50 °C, W/(m·K).
pub const CONDUCTIVITY: f64 = 0.0283;

/// Prandtl number of air.
pub const PRANDTL: f64 = 0.7;

/// `g / ν²` for air, 1/(m³·K) after multiplying by absolute temperature.
///
/// The Grashof number is `GRASHOF_FACTOR · ΔT · l³ / T_abs`.
pub const GRASHOF_FACTOR: f64 = 3.039_59e10;

/// `1 / ν` for air at 50 °C, s/m².
pub const INVERSE_KINEMATIC_VISCOSITY: f64 = 55_710.3;

/// Emissivity-weighted Stefan–Boltzmann constant, W/(m²·K⁴).
pub const RADIATIVE_EXCHANGE: f64 = 4.5e-8;

/// Offset from degrees Celsius to absolute temperature used by the correlations.
pub const CELSIUS_OFFSET: f64 = 273.0;
