//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a product binary implements to configure
//! the scaffolding behavior for its specific needs.

use std::path::Path;

/// Configuration trait for CLI products
///
/// A product (e.g. `create-serenity-app`) implements this trait to define:
/// - Product identity (name, display name)
/// - Prompt wording and defaults
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Question asked when no project name was supplied on the command line
    fn name_prompt(&self) -> &'static str;

    /// Project name applied when the prompt is submitted empty
    fn default_project_name(&self) -> &'static str {
        crate::DEFAULT_PROJECT_NAME
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}
