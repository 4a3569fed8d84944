//! Built-in template set and rendering
//!
//! The template set is fixed at build time: a registry of relative paths and
//! bodies, where the generated manifest body carries a `{{project_name}}`
//! placeholder. Rendering is pure and total - the same project name always
//! yields byte-identical output in the same order.

mod registry;

use crate::project::ProjectName;

/// Substitution point recognized in template bodies
pub const NAME_PLACEHOLDER: &str = "{{project_name}}";

/// A named file descriptor from the fixed registry
#[derive(Debug, Clone, Copy)]
pub struct Template {
    /// Path of the generated file relative to the project root
    pub relative_path: &'static str,

    /// File body, possibly containing [`NAME_PLACEHOLDER`]
    pub body: &'static str,
}

/// A template body with the project name substituted in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub relative_path: &'static str,
    pub contents: String,
}

/// The immutable registry of built-in templates
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    templates: &'static [Template],
}

impl TemplateSet {
    /// The built-in Serenity bot starter set
    pub fn builtin() -> Self {
        Self {
            templates: registry::BUILTIN,
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &'static [Template] {
        self.templates
    }

    /// Render every template against `name`, in registration order
    pub fn render(&self, name: &ProjectName) -> Vec<RenderedFile> {
        self.templates
            .iter()
            .map(|template| RenderedFile {
                relative_path: template.relative_path,
                contents: template.body.replace(NAME_PLACEHOLDER, name.as_str()),
            })
            .collect()
    }
}
