//! # beam_core - Single-Span Beam Analysis Engine
//!
//! `beam_core` computes support reactions, shear and moment diagrams, deflection
//! curves and code-check ratios for single-span beams with four support
//! configurations: simply supported, cantilever, fixed–fixed and propped
//! cantilever. All inputs and outputs are JSON-serializable, so the engine can
//! sit behind an agent tool call as easily as behind a CLI.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **One Sign Convention**: Documented once in [`equations`], used everywhere
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, Beam, Load, Section, SupportType};
//!
//! let beam = Beam::new(SupportType::FixedFixed, 6.0, Section::rectangular(150.0, 300.0))
//!     .with_load(Load::distributed(5.0, 0.0, 6.0));
//!
//! let result = analyze(&beam).unwrap();
//! assert!((result.reactions.left_moment_knm + 15.0).abs() < 1e-9);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"support_type\": \"fixed_fixed\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Equilibrium, internal forces, deflection, checks, [`analyze`]
//! - [`loads`] - Load types and the load normalizer
//! - [`sections`] - Cross-sections and derived properties
//! - [`materials`] - Material properties and presets
//! - [`equations`] - Closed-form formulas and the sign convention
//! - [`units`] - Type-safe unit wrappers
//! - [`report`] - Plain-text summary
//! - [`tool`] - JSON parameter schema and tool entry point
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod report;
pub mod sections;
pub mod tool;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, AnalysisResult, Beam, CheckStatus, ReactionSet, StationSample, SupportType,
};
pub use errors::{CalcError, CalcResult};
pub use loads::{Load, RawLoad};
pub use materials::{Material, MaterialPreset, MaterialSpec};
pub use sections::{Section, SectionProperties};
