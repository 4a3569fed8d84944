//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::materialize::materialize;
use crate::plan::ScaffoldPlan;
use crate::product::ProductConfig;
use crate::project::ProjectName;
use crate::runtime;
use crate::templates::TemplateSet;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name from the positional argument
    pub name: Option<String>,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve the project name (argument, or a single prompt)
    let name = resolve_name(config, args.name.as_deref())?;

    // Step 2: Compute the target root under the current directory
    let root = target_root(&name);

    // Step 3: Advisory toolchain report (never fails the run)
    report_toolchain()?;

    if root.exists() {
        cliclack::log::warning(format!(
            "{} already exists; generated files will be overwritten",
            root.display()
        ))?;
    }

    // Step 4: Plan and materialize the tree
    let rendered = TemplateSet::builtin().render(&name);
    let plan = ScaffoldPlan::new(&root, rendered);

    let spinner = cliclack::spinner();
    spinner.start("Creating project...");
    match materialize(&plan).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                root.display()
            ));
        }
        Err(e) => {
            spinner.stop("Project creation failed");
            return Err(e.into());
        }
    }

    // Step 5: Show next steps
    print_next_steps(config, &name, &root)?;

    Ok(())
}

/// Resolve the project name from the CLI argument, falling back to a prompt
/// with the product's default.
fn resolve_name<C: ProductConfig>(
    config: &C,
    arg: Option<&str>,
) -> Result<ProjectName, ScaffoldError> {
    if let Some(name) = arg {
        if !name.trim().is_empty() {
            return ProjectName::new(name);
        }
    }

    let input: String = cliclack::input(config.name_prompt())
        .placeholder(config.default_project_name())
        .default_input(config.default_project_name())
        .interact()
        .map_err(ScaffoldError::InputUnavailable)?;

    if input.trim().is_empty() {
        ProjectName::new(config.default_project_name())
    } else {
        ProjectName::new(&input)
    }
}

fn target_root(name: &ProjectName) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    current_dir.join(name.as_str())
}

fn report_toolchain() -> Result<()> {
    match runtime::cargo_version() {
        Some(version) => cliclack::log::info(format!("Detected {}", version))?,
        None => cliclack::log::warning(
            "cargo not found; install Rust from https://rustup.rs to build the project",
        )?,
    }
    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    name: &ProjectName,
    project_dir: &Path,
) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro(format!("Successfully created {}!", name))?;

    Ok(())
}
