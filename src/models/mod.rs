//! Domain models for S4.
//!
//! # Core Concepts
//!
//! ## Specification Entities
//!
//! - [`Spec`]: Aggregate root loaded once per invocation and never mutated afterwards.
//! - [`BusinessObjective`]: Why the project exists (`BO-####`). Covered by features.
//! - [`Feature`]: A capability (`FE-####`) covering objectives, with prerequisite features.
//! - [`AcceptanceTest`]: A GIVEN/WHEN/THEN scenario (`AT-####`) covering exactly one feature.
//! - [`Concept`]: Glossary term referenced from descriptions as `[[label]]`.
//! - [`Tool`] and [`Connectors`]: user-configured shell commands.
//!
//! ## Analysis Output
//!
//! - [`Issue`]: The closed set of facts the engine reports about a spec.
//! - [`TestResult`], [`ToolRunResult`], [`FeatureStats`]: execution outcomes.
//!
//! Entity kind is carried by the id prefix (`BO-`, `FE-`, `AT-`), not by a type tag.

mod detail;
mod issue;
mod report;
mod spec;

pub use detail::*;
pub use issue::*;
pub use report::*;
pub use spec::*;
