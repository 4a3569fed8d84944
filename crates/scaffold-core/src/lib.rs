//! Scaffold Core - Shared library for bot project scaffolding CLIs
//!
//! This library provides the core functionality for generating a Serenity
//! Discord bot starter project from a fixed set of built-in templates. It is
//! designed to be used by a thin CLI binary (e.g. `create-serenity-app`) that
//! supplies its product configuration.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure template rendering and path planning
//!   (`templates`, `plan`), plus filesystem execution (`materialize`)
//! - **Layer 2: Product Configuration** - `ProductConfig` trait describing the
//!   CLI's identity, prompts, and next-step instructions
//! - **Layer 3: CLI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{ProjectName, ScaffoldPlan, TemplateSet};
//!
//! let name = ProjectName::new("my-bot")?;
//! let rendered = TemplateSet::builtin().render(&name);
//! let plan = ScaffoldPlan::new(&root, rendered);
//! let written = scaffold_core::materialize(&plan).await?;
//! ```

pub mod error;
pub mod materialize;
pub mod plan;
pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use materialize::materialize;
pub use plan::{PlannedFile, ScaffoldPlan};
pub use product::ProductConfig;
pub use project::ProjectName;
pub use templates::{RenderedFile, Template, TemplateSet};

#[cfg(feature = "tui")]
pub use tui::run;

/// Project name offered as the prompt default when none is supplied
pub const DEFAULT_PROJECT_NAME: &str = "my-discord-bot";
