//! Command line arguments

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Translation negotiation and file tag tooling
#[derive(Parser, Debug)]
#[command(name = "tessera", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TESSERA_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Log filter, overrides the configured level
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the locales selected for a set of preferences
    Negotiate(NegotiateArgs),

    /// Render a message in the negotiated locale
    Localize {
        /// Message id, or `message.attribute`
        key: String,

        /// Message argument as name=value, may be repeated
        #[arg(short, long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Locale preferences
        #[command(flatten)]
        preferences: Preferences,
    },

    /// Convert and filter file tags
    #[command(subcommand)]
    Tags(TagsCommand),
}

/// Requested locales, most preferred first
#[derive(Args, Debug, Clone, Default)]
pub struct Preferences {
    /// Requested locales; take precedence over --accept-language
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Accept-Language style preference list
    #[arg(long, env = "TESSERA_ACCEPT_LANGUAGE")]
    pub accept_language: Option<String>,
}

/// Arguments of `negotiate`: locales are positional.
#[derive(Args, Debug, Clone, Default)]
pub struct NegotiateArgs {
    /// Requested locales; take precedence over --accept-language
    #[arg(value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Accept-Language style preference list
    #[arg(long, env = "TESSERA_ACCEPT_LANGUAGE")]
    pub accept_language: Option<String>,
}

impl NegotiateArgs {
    /// The same request as [`Preferences`]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            locales: self.locales.clone(),
            accept_language: self.accept_language.clone(),
        }
    }
}

/// Tag commands
#[derive(Subcommand, Debug)]
pub enum TagsCommand {
    /// Print a token as a `{key, value}` record
    Split {
        /// `key` or `key:value`
        token: String,

        /// Reject tokens that are not valid user tags
        #[arg(long)]
        strict: bool,
    },

    /// Print the token for a key and optional value
    Concat {
        /// Tag key
        key: String,
        /// Tag value
        value: Option<String>,
    },

    /// Print the user-assigned tags among the given tokens, sorted
    User {
        /// Tokens or JSON records
        #[arg(required = true)]
        tags: Vec<String>,
    },
}
