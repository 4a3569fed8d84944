//! Built-in template bodies
//!
//! Pure data: each constant is the exact byte content of one generated file,
//! with `{{project_name}}` as the only substitution point (manifest only).
//! Registration order here is the write order of every run.

use super::Template;

const CARGO_TOML: &str = r#"[package]
name = "{{project_name}}"
version = "0.1.0"
edition = "2021"

[dependencies]
tokio = { version = "1.21.2", features = ["macros", "rt-multi-thread"] }
serenity = { version = "0.12", features = ["client", "gateway", "rustls_backend", "model", "cache"] }
dotenv = "0.15""#;

const ENV_FILE: &str = "DISCORD_TOKEN=your_token_here
COMMAND_PREFIX=!";

const GITIGNORE: &str = "/target
**/*.rs.bk
Cargo.lock
.env";

const MAIN_RS: &str = r#"mod commands;
mod events;

use std::env;
use serenity::all::*;
use serenity::async_trait;
use dotenv::dotenv;

struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        let prefix = env::var("COMMAND_PREFIX").unwrap_or_else(|_| "!".to_string());

        if msg.content == format!("{}ping", prefix) {
            if let Err(why) = commands::run(&ctx, &msg).await {
                println!("Error executing command: {:?}", why);
            }
        }
    }

    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        events::handle_join(&ctx, &guild).await;
    }

    async fn ready(&self, _: Context, ready: Ready) {
        println!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let token = env::var("DISCORD_TOKEN")
        .expect("Expected a token in the environment");

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILDS;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler)
        .await
        .expect("Error creating client");

    if let Err(why) = client.start().await {
        println!("Client error: {:?}", why);
    }
}"#;

const COMMANDS_MOD: &str = "pub mod ping;

pub use ping::*;";

const PING_RS: &str = r#"use serenity::all::*;

pub async fn run(ctx: &Context, msg: &Message) -> Result<(), Error> {
    msg.channel_id.say(&ctx.http, "Pong! 🏓").await?;
    Ok(())
}
"#;

const EVENTS_MOD: &str = "pub mod join;

pub use join::*;";

const JOIN_RS: &str = r#"use serenity::all::*;

pub async fn handle_join(ctx: &Context, guild: &Guild) {
    println!("Joined guild: {}", guild.name);

    if let Some(channel) = guild.system_channel_id {
        let _ = channel
            .say(&ctx.http, "Hello! Thanks for inviting me to your server! 👋")
            .await;
    }
}"#;

pub(super) const BUILTIN: &[Template] = &[
    Template {
        relative_path: "Cargo.toml",
        body: CARGO_TOML,
    },
    Template {
        relative_path: ".env",
        body: ENV_FILE,
    },
    Template {
        relative_path: ".gitignore",
        body: GITIGNORE,
    },
    Template {
        relative_path: "src/main.rs",
        body: MAIN_RS,
    },
    Template {
        relative_path: "src/commands/mod.rs",
        body: COMMANDS_MOD,
    },
    Template {
        relative_path: "src/commands/ping.rs",
        body: PING_RS,
    },
    Template {
        relative_path: "src/events/mod.rs",
        body: EVENTS_MOD,
    },
    Template {
        relative_path: "src/events/join.rs",
        body: JOIN_RS,
    },
];
