use poise::serenity_prelude as serenity;
use tracing::{error, info, warn};

use crate::error::AppError;
use crate::henrik::HenrikClient;

use super::commands;

/// Shared data accessible in all commands
#[derive(Debug)]
pub struct Data {
    pub henrik: HenrikClient,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

pub fn create_framework(data: Data, prefix: String) -> poise::Framework<Data, AppError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::rank()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| {
                Box::pin(async move {
                    handle_error(error).await;
                })
            },
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                ctx.set_activity(Some(serenity::ActivityData::playing("VALORANT")));
                info!(
                    bot_name = %ready.user.name,
                    guild_count = ready.guilds.len(),
                    "🎮 Bot is ready"
                );
                Ok(data)
            })
        })
        .build()
}

async fn handle_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let command_name = ctx.command().name.as_str();
            if error.is_lookup_failure() {
                warn!(
                    error = %error,
                    command = command_name,
                    user_id = %ctx.author().id,
                    "🎮 ⚠️ Lookup failed"
                );
            } else {
                error!(
                    error = ?error,
                    command = command_name,
                    user_id = %ctx.author().id,
                    "🎮 ❌ Command execution failed"
                );
            }
            let _ = ctx.say(error.to_string()).await;
        }
        poise::FrameworkError::ArgumentParse { error, ctx, .. } => {
            warn!(
                error = %error,
                command = ctx.command().name.as_str(),
                "🎮 ⚠️ Invalid command argument"
            );
            let _ = ctx
                .say(format!(
                    "Please use the format {}{} username#tag",
                    ctx.prefix(),
                    ctx.command().name
                ))
                .await;
        }
        poise::FrameworkError::MissingBotPermissions {
            missing_permissions,
            ctx,
            ..
        } => {
            warn!(
                permissions = %missing_permissions,
                command = ctx.command().name.as_str(),
                "🎮 ⚠️ Bot missing permissions"
            );
            let _ = ctx
                .say(format!("Missing permissions: {}", missing_permissions))
                .await;
        }
        other => {
            error!(error = ?other, "🎮 ❌ Unhandled framework error");
        }
    }
}
