//! # Unit Types
//!
//! Thin f64 newtypes for the units the beam engine mixes. Conversions between
//! them are explicit `From` impls, so a kN·m can't slip into an N·mm formula.
//!
//! ## SI Units
//!
//! The beam engine takes mixed SI inputs, as is usual in structural practice:
//! - Span and positions: metres (m)
//! - Section dimensions: millimetres (mm)
//! - Force: kilonewtons (kN); moment: kilonewton-metres (kN·m)
//! - Stress and modulus: megapascals (MPa = N/mm²)
//!
//! Curvature and stress are evaluated in N and mm, so every mixed-unit formula
//! converts through these types rather than through bare scale factors.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Meters, Millimeters, KilonewtonMeters, NewtonMillimeters};
//!
//! let span = Meters(6.0);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 6000.0);
//!
//! let m: NewtonMillimeters = KilonewtonMeters(2.5).into();
//! assert_eq!(m.0, 2.5e6);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravitational acceleration (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.80665;

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMillimeters(pub f64);

impl From<KilonewtonMeters> for NewtonMillimeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMillimeters(knm.0 * 1.0e6)
    }
}

impl From<NewtonMillimeters> for KilonewtonMeters {
    fn from(nmm: NewtonMillimeters) -> Self {
        KilonewtonMeters(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Stress Units
// ============================================================================

/// Stress or modulus in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

impl Megapascals {
    /// Bending stress M/S for a moment over an elastic section modulus in mm³
    pub fn from_bending(moment: KilonewtonMeters, section_modulus_mm3: f64) -> Self {
        let m: NewtonMillimeters = moment.into();
        Megapascals(m.0 / section_modulus_mm3)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonsPerMeter(pub f64);

impl KilonewtonsPerMeter {
    /// Line weight of a prismatic member: area (mm²) × density (kg/m³) × g
    pub fn from_self_weight(area_mm2: f64, density_kg_m3: f64) -> Self {
        let area_m2 = area_mm2 * 1.0e-6;
        // kg/m × m/s² = N/m, /1000 for kN/m
        KilonewtonsPerMeter(area_m2 * density_kg_m3 * STANDARD_GRAVITY / 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(KilonewtonMeters);
impl_arithmetic!(NewtonMillimeters);
impl_arithmetic!(Megapascals);
impl_arithmetic!(KilonewtonsPerMeter);
