use anyhow::Result;
use std::fmt;

use crate::cli::commands::{self, alter::AlterRequest, Context};
use crate::cli::error::UsageError;
use crate::cli::flags::{parse_flags, Flags};

pub const DEFAULT_COMMAND: &str = "help";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    Update,
    Alter,
    Help,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Status,
        Command::Update,
        Command::Alter,
        Command::Help,
    ];

    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.word() == word)
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Status => "status",
            Command::Update => "update",
            Command::Alter => "alter",
            Command::Help => "help",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())
    }
}

/// Raw arguments split into command word, subcommand, flags and the
/// remaining positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub subcommand: Option<String>,
    /// Set only when more than two positional arguments were given.
    pub extra_args: Option<Vec<String>>,
    pub flags: Flags,
}

impl Invocation {
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let (flag_tokens, positionals): (Vec<&str>, Vec<&str>) = args
            .iter()
            .map(AsRef::as_ref)
            .partition(|arg| arg.starts_with("--"));

        let command = positionals
            .first()
            .copied()
            .unwrap_or(DEFAULT_COMMAND)
            .to_string();
        let subcommand = positionals.get(1).map(|s| s.to_string());

        let extra_args = (positionals.len() > 2).then(|| {
            let mut extra: Vec<String> = Vec::new();
            for arg in &positionals[2..] {
                let is_command_word = *arg == command || subcommand.as_deref() == Some(*arg);
                if !is_command_word && !extra.iter().any(|e| e.as_str() == *arg) {
                    extra.push(arg.to_string());
                }
            }
            extra
        });

        Self {
            command,
            subcommand,
            extra_args,
            flags: parse_flags(flag_tokens.as_slice()),
        }
    }
}

pub async fn dispatch(invocation: &Invocation, ctx: &Context) -> Result<()> {
    let command = Command::from_word(&invocation.command).ok_or(UsageError::InvalidCommand)?;
    tracing::debug!("dispatching '{}'", command);
    if !invocation.flags.is_empty() {
        tracing::debug!("with {} flag(s)", invocation.flags.len());
    }

    match command {
        Command::Status => commands::status::execute(ctx).await,
        Command::Update => {
            let token = ctx.tokens.resolve()?;
            commands::update::execute(ctx, &token).await
        }
        Command::Alter => {
            let request = AlterRequest::parse(
                &ctx.settings,
                invocation.subcommand.as_deref(),
                &invocation.flags,
                invocation.extra_args.as_deref(),
            )?;
            let token = ctx.tokens.resolve()?;
            commands::alter::execute(ctx, &token, &request).await
        }
        Command::Help => commands::help::execute(ctx),
    }
}
