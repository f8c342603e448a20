//! Integration tests for tessera-i18n: loading translations from disk,
//! negotiating locales and rendering messages.

use std::path::{Path, PathBuf};
use std::time::Duration;
use tessera_common::test_utils::{create_temp_dir, fixtures, init_test_logging, write_translations};
use tessera_i18n::{
    fluent_args, negotiate, parse_language_header, DirectorySource, I18nError, I18nResult,
    Localizer, MemorySource, Negotiator, ResourceEntry, ResourceLoader, ResourceSource,
};
use tempfile::TempDir;

fn create_test_translations() -> TempDir {
    let dir = create_temp_dir();
    write_translations(
        dir.path(),
        &[
            ("en/page/home.ftl", fixtures::EN_HOME),
            ("en/page/setup.ftl", fixtures::EN_SETUP),
            ("fr/page/home.ftl", fixtures::FR_HOME),
        ],
    );
    dir
}

#[tokio::test]
async fn test_load_directory_groups_nested_documents() {
    init_test_logging();
    let dir = create_test_translations();

    let resources = ResourceLoader::new(DirectorySource::new(dir.path()))
        .load()
        .await
        .unwrap();

    assert_eq!(
        resources.locales().map(|l| l.as_str()).collect::<Vec<_>>(),
        vec!["en", "fr"]
    );
    assert_eq!(resources.get("en").unwrap().len(), 2);
    assert_eq!(resources.get("fr").unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_document_aborts_load() {
    init_test_logging();
    let dir = create_test_translations();
    write_translations(dir.path(), &[("fr/page/broken.ftl", fixtures::BROKEN)]);

    let err = ResourceLoader::new(DirectorySource::new(dir.path()))
        .load()
        .await
        .unwrap_err();

    assert!(matches!(err, I18nError::Parse { .. }));
    assert_eq!(err.path(), dir.path().join("fr/page/broken.ftl"));
}

#[tokio::test]
async fn test_earliest_loaded_document_wins() {
    init_test_logging();
    let source = MemorySource::new("translations")
        .with_file("translations/en/a.ftl", "greeting = Hello from A\n")
        .with_file("translations/en/b.ftl", "greeting = Hello from B\n");

    let resources = ResourceLoader::new(source).load().await.unwrap();
    let i18n = Localizer::new(Negotiator::new("en").negotiate(&resources, &["en"]));

    assert_eq!(i18n.localize("greeting"), "Hello from A");
}

/// Two documents for `en` where the first one discovered is the slowest to read.
struct SlowFirstSource {
    base: PathBuf,
}

impl ResourceSource for SlowFirstSource {
    fn base(&self) -> &Path {
        &self.base
    }

    fn discover(&self) -> I18nResult<Vec<ResourceEntry>> {
        Ok(vec![
            ResourceEntry::new(self.base.join("en/a.ftl"), || async {
                tokio::time::sleep(Duration::from_millis(50)).await;
                Ok("greeting = A\n".to_string())
            }),
            ResourceEntry::new(self.base.join("en/b.ftl"), || async {
                Ok("greeting = B\n".to_string())
            }),
        ])
    }
}

#[tokio::test]
async fn test_slow_reads_keep_discovery_order() {
    init_test_logging();
    let source = SlowFirstSource {
        base: PathBuf::from("translations"),
    };

    let resources = ResourceLoader::new(source).load().await.unwrap();
    let documents = resources.get("en").unwrap();
    assert_eq!(documents[0].path(), Path::new("translations/en/a.ftl"));
    assert_eq!(documents[1].path(), Path::new("translations/en/b.ftl"));

    let i18n = Localizer::new(Negotiator::new("en").negotiate(&resources, &["en"]));
    assert_eq!(i18n.localize("greeting"), "A");
}

#[tokio::test]
async fn test_negotiated_localizer_end_to_end() {
    init_test_logging();
    let dir = create_test_translations();
    let resources = ResourceLoader::new(DirectorySource::new(dir.path()))
        .load()
        .await
        .unwrap();

    let requested = parse_language_header("fr-CH, fr;q=0.9, en;q=0.8");
    let bundles = Negotiator::new("en")
        .with_isolating(false)
        .negotiate(&resources, &requested);
    let i18n = Localizer::new(bundles);

    assert_eq!(i18n.localize("home-title"), "Vos fichiers");
    assert_eq!(i18n.localize("upload.tooltip"), "Téléverser un nouveau fichier");
    let args = fluent_args!["name" => "Ada"];
    assert_eq!(i18n.localize_with("welcome", &args), "Bienvenue, Ada !");
    // setup-title only exists in English and French is the only selected bundle
    assert_eq!(i18n.localize("setup-title"), "setup-title");
}

#[tokio::test]
async fn test_unsupported_request_falls_back_to_default() {
    let dir = create_test_translations();
    let resources = ResourceLoader::new(DirectorySource::new(dir.path()))
        .load()
        .await
        .unwrap();

    let bundles = negotiate(&resources, &["de"], "en");
    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].locale(), "en");
    assert_eq!(bundles[0].sources().len(), 2);
    assert!(bundles[0].sources()[0].ends_with(Path::new("en/page/home.ftl")));

    assert!(negotiate(&resources, &["de"], "it").is_empty());
}

#[test]
fn test_loading_with_blocking_runtime() {
    let source = MemorySource::from_static("translations", &[("translations/en/main.ftl", "hello = Hello!\n")]);
    let resources = tokio_test::block_on(ResourceLoader::new(source).load()).unwrap();

    let i18n = Localizer::new(negotiate(&resources, &["en"], "en"));
    assert_eq!(i18n.localize("hello"), "Hello!");
}
