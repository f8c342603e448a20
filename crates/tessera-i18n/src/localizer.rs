//! Message lookup across negotiated bundles

use crate::bundle::Bundle;
use crate::locale::LocaleId;
use fluent::{FluentArgs, FluentValue};
use std::borrow::Cow;
use tracing::warn;

/// Renders messages from an ordered list of bundles.
///
/// The first bundle defining a message answers. When none does, the raw key
/// is returned so the caller can still show something.
#[derive(Debug, Default)]
pub struct Localizer {
    bundles: Vec<Bundle>,
}

impl Localizer {
    /// Wrap the bundles produced by negotiation
    pub fn new(bundles: Vec<Bundle>) -> Self {
        Self { bundles }
    }

    /// Localize `key` (`message` or `message.attribute`)
    pub fn localize<'a>(&'a self, key: &str) -> Cow<'a, str> {
        self.format(key, None)
    }

    /// Localize `key` with arguments
    pub fn localize_with<'a>(&'a self, key: &str, args: &'a FluentArgs<'_>) -> Cow<'a, str> {
        self.format(key, Some(args))
    }

    fn format<'a>(&'a self, key: &str, args: Option<&'a FluentArgs<'_>>) -> Cow<'a, str> {
        if let Some(formatted) = self.bundles.iter().find_map(|bundle| bundle.format(key, args)) {
            return formatted;
        }

        warn!(key, locales = ?self.locales().collect::<Vec<_>>(), "Missing translation, using raw key");
        Cow::Owned(key.to_string())
    }

    /// Whether any bundle defines `key`
    pub fn has_message(&self, key: &str) -> bool {
        self.bundles.iter().any(|bundle| bundle.has_message(key))
    }

    /// Locales of the wrapped bundles, in priority order
    pub fn locales(&self) -> impl Iterator<Item = &LocaleId> {
        self.bundles.iter().map(Bundle::locale)
    }

    /// The wrapped bundles
    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    /// Whether no bundle is available
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

/// Build Fluent arguments from string pairs
pub fn args_from_pairs<'a, I>(pairs: I) -> FluentArgs<'a>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut args = FluentArgs::new();
    for (key, value) in pairs {
        args.set(key, FluentValue::from(value));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceDocument;
    use fluent::fluent_args;

    fn bundle(locale: &str, source: &str) -> Bundle {
        let document = ResourceDocument::parse(format!("{locale}/main.ftl"), source).unwrap();
        Bundle::with_documents(locale, &[document], false)
    }

    #[test]
    fn test_localizes_an_attribute() {
        let i18n = Localizer::new(vec![bundle("en", "test = Unused\n  .msg = hello {$name}!\n")]);

        let args = fluent_args!["name" => "world"];
        assert_eq!(i18n.localize_with("test.msg", &args), "hello world!");
    }

    #[test]
    fn test_later_bundles_fill_gaps() {
        let i18n = Localizer::new(vec![
            bundle("fr", "title = Fichiers\n"),
            bundle("en", "title = Files\nsubtitle = Everything\n"),
        ]);

        assert_eq!(i18n.localize("title"), "Fichiers");
        assert_eq!(i18n.localize("subtitle"), "Everything");
        assert_eq!(
            i18n.locales().map(LocaleId::as_str).collect::<Vec<_>>(),
            vec!["fr", "en"]
        );
    }

    #[test]
    fn test_valueless_message_defers_to_later_bundle() {
        let i18n = Localizer::new(vec![
            bundle("fr", "menu =\n    .label = Menu principal\n"),
            bundle("en", "menu = Menu\n"),
        ]);

        assert_eq!(i18n.localize("menu"), "Menu");
        assert_eq!(i18n.localize("menu.label"), "Menu principal");
    }

    #[test]
    fn test_missing_message_degrades_to_key() {
        let i18n = Localizer::new(vec![bundle("en", "title = Files\n")]);
        assert_eq!(i18n.localize("not-there"), "not-there");
        assert!(!i18n.has_message("not-there"));
    }

    #[test]
    fn test_no_bundles_degrades_to_key() {
        let i18n = Localizer::default();
        assert!(i18n.is_empty());
        assert_eq!(i18n.localize("home.title"), "home.title");
    }

    #[test]
    fn test_args_from_pairs() {
        let i18n = Localizer::new(vec![bundle("en", "welcome = Welcome, {$name}!\n")]);
        let args = args_from_pairs([("name", "Ada")]);
        assert_eq!(i18n.localize_with("welcome", &args), "Welcome, Ada!");
    }
}
