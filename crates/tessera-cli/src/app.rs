//! Command execution

use crate::cli::{Command, Preferences, TagsCommand};
use crate::error::{AppError, AppResult};
use tessera_config::Settings;
use tessera_i18n::{
    args_from_pairs, parse_language_header, DirectorySource, LocaleId, Localizer, Negotiator,
    ResourceLoader, ResourceMap,
};
use tessera_tags::{concat, split, user_tags, AnyTag, Tag};
use tracing::{debug, warn};

/// Runs commands against the configured translations.
#[derive(Debug, Clone)]
pub struct App {
    settings: Settings,
}

impl App {
    /// Creates an application for `settings`.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// The active settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Negotiator configured from the settings.
    pub fn negotiator(&self) -> Negotiator {
        Negotiator::new(self.settings.i18n.default_locale.as_str())
            .with_isolating(self.settings.i18n.use_isolating)
    }

    /// Loads every translation below the configured directory.
    pub async fn load_resources(&self) -> AppResult<ResourceMap> {
        let source = DirectorySource::new(&self.settings.i18n.translations_dir);
        Ok(ResourceLoader::new(source).load().await?)
    }

    /// Executes `command` and returns what should be printed.
    pub async fn run(&self, command: &Command) -> AppResult<String> {
        match command {
            Command::Negotiate(request) => {
                let resources = self.load_resources().await?;
                let selected = self.select(&resources, &request.preferences());
                Ok(selected
                    .iter()
                    .map(LocaleId::as_str)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::Localize {
                key,
                args,
                preferences,
            } => {
                let resources = self.load_resources().await?;
                self.localize(&resources, key, args, preferences)
            }
            Command::Tags(command) => run_tags(command),
        }
    }

    /// Locales selected for `preferences`.
    pub fn select(&self, resources: &ResourceMap, preferences: &Preferences) -> Vec<LocaleId> {
        let selected = self.negotiator().select(resources, &requested_locales(preferences));
        if selected.is_empty() {
            warn!(
                default_locale = %self.settings.i18n.default_locale,
                "No translations available for the requested locales"
            );
        }
        selected
    }

    /// Renders `key` in the locale negotiated for `preferences`.
    pub fn localize(
        &self,
        resources: &ResourceMap,
        key: &str,
        args: &[String],
        preferences: &Preferences,
    ) -> AppResult<String> {
        let pairs = parse_message_args(args)?;
        let fluent_args = args_from_pairs(pairs);

        let bundles = self
            .negotiator()
            .negotiate(resources, &requested_locales(preferences));
        let i18n = Localizer::new(bundles);

        Ok(i18n.localize_with(key, &fluent_args).into_owned())
    }
}

/// Requested locales: explicit locales, else the Accept-Language list.
pub fn requested_locales(preferences: &Preferences) -> Vec<String> {
    if !preferences.locales.is_empty() {
        return preferences.locales.clone();
    }

    let requested = preferences
        .accept_language
        .as_deref()
        .map(parse_language_header)
        .unwrap_or_default();
    debug!(?requested, "Requested locales from Accept-Language");
    requested
}

/// Splits `name=value` arguments.
pub fn parse_message_args(args: &[String]) -> AppResult<Vec<(&str, &str)>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .filter(|(name, _)| !name.is_empty())
                .ok_or_else(|| AppError::InvalidArgument(arg.clone()))
        })
        .collect()
}

/// Executes a tag command.
pub fn run_tags(command: &TagsCommand) -> AppResult<String> {
    match command {
        TagsCommand::Split { token, strict } => {
            let tag = if *strict {
                Tag::parse_public(token)?
            } else {
                split(token)
            };
            Ok(serde_json::to_string(&tag)?)
        }
        TagsCommand::Concat { key, value } => Ok(concat(&Tag {
            key: key.clone(),
            value: value.clone(),
        })),
        TagsCommand::User { tags } => {
            let tags = tags
                .iter()
                .map(|raw| parse_tag_input(raw).map(AnyTag::into_tag))
                .collect::<AppResult<Vec<_>>>()?;

            Ok(user_tags(&tags)
                .iter()
                .map(concat)
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

fn parse_tag_input(raw: &str) -> AppResult<AnyTag> {
    if raw.trim_start().starts_with('{') {
        return Ok(serde_json::from_str(raw)?);
    }

    Ok(AnyTag::from(raw))
}
