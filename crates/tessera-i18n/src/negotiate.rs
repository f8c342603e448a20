//! Locale negotiation and bundle construction

use crate::bundle::Bundle;
use crate::locale::{LocaleId, DEFAULT_LOCALE};
use crate::resource::ResourceMap;
use tracing::{debug, info};

/// Select the locales to serve using the lookup strategy.
///
/// The first requested locale that `resources` supports wins. Otherwise the
/// default locale is used if it is supported. An empty result means no
/// localized text is available. Matching is exact string equality.
pub fn negotiate_locales<S: AsRef<str>>(
    resources: &ResourceMap,
    requested: &[S],
    default_locale: &str,
) -> Vec<LocaleId> {
    let selected = requested
        .iter()
        .map(AsRef::as_ref)
        .find(|locale| resources.supports(locale))
        .or_else(|| resources.supports(default_locale).then_some(default_locale));

    match selected {
        Some(locale) => vec![LocaleId::from(locale)],
        None => {
            debug!(
                requested = ?requested.iter().map(AsRef::as_ref).collect::<Vec<_>>(),
                default_locale,
                "No supported locale"
            );
            Vec::new()
        }
    }
}

/// Negotiate and build one bundle per selected locale, with isolation marks on.
pub fn negotiate<S: AsRef<str>>(
    resources: &ResourceMap,
    requested: &[S],
    default_locale: &str,
) -> Vec<Bundle> {
    Negotiator::new(default_locale).negotiate(resources, requested)
}

/// Negotiation settings shared across calls.
///
/// Each call is independent: it reads the resource map and returns fresh
/// bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Negotiator {
    default_locale: LocaleId,
    use_isolating: bool,
}

impl Default for Negotiator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Negotiator {
    /// Create a negotiator falling back to `default_locale`
    pub fn new(default_locale: impl Into<LocaleId>) -> Self {
        Self {
            default_locale: default_locale.into(),
            use_isolating: true,
        }
    }

    /// Whether built bundles wrap placeables in Unicode isolation marks
    #[must_use]
    pub fn with_isolating(mut self, use_isolating: bool) -> Self {
        self.use_isolating = use_isolating;
        self
    }

    /// The fallback locale
    pub fn default_locale(&self) -> &LocaleId {
        &self.default_locale
    }

    /// Select locales, see [`negotiate_locales`]
    pub fn select<S: AsRef<str>>(&self, resources: &ResourceMap, requested: &[S]) -> Vec<LocaleId> {
        negotiate_locales(resources, requested, self.default_locale.as_str())
    }

    /// Select locales and build their bundles, in selection order
    pub fn negotiate<S: AsRef<str>>(&self, resources: &ResourceMap, requested: &[S]) -> Vec<Bundle> {
        let bundles: Vec<Bundle> = self
            .select(resources, requested)
            .into_iter()
            .filter_map(|locale| {
                let documents = resources.get(locale.as_str())?;
                Some(Bundle::with_documents(locale, documents, self.use_isolating))
            })
            .collect();

        info!(
            selected = ?bundles.iter().map(|b| b.locale().as_str()).collect::<Vec<_>>(),
            "Negotiated translation bundles"
        );

        bundles
    }
}
