//! create-serenity-app CLI - Scaffolding for Serenity Discord bots

use anyhow::Result;
use clap::Parser;
use scaffold_core::tui::CreateArgs;
use scaffold_core::ProductConfig;
use std::path::Path;

/// Serenity bot product configuration
#[derive(Clone)]
pub struct SerenityConfig;

impl ProductConfig for SerenityConfig {
    fn name(&self) -> &'static str {
        "create-serenity-app"
    }

    fn display_name(&self) -> &'static str {
        "create-serenity-app"
    }

    fn cli_description(&self) -> &'static str {
        "Create a new Discord bot using Rust and Serenity"
    }

    fn name_prompt(&self) -> &'static str {
        "What is the name of your bot project?"
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let dir_label = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        vec![
            format!("cd {}", dir_label),
            "Add your Discord bot token to .env".to_string(),
            "cargo run".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-serenity-app")]
#[command(about = "Create a new Discord bot using Rust and Serenity")]
#[command(version)]
pub struct Args {
    /// Name of your bot project
    pub name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = SerenityConfig;

    let result = scaffold_core::run(&config, CreateArgs { name: args.name }).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
