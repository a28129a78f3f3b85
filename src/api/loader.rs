//! Best-effort loading of option catalogs at form mount

use tracing::{info, instrument, warn};

use super::error::ApiError;
use super::traits::QuoteApiTrait;
use crate::state::{CatalogKind, FormVariant, OptionCatalog};

/// Result of one mount-time load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogLoad {
    pub catalog: OptionCatalog,
    /// Catalogs whose request failed; an empty list from the server is not a failure
    pub failed: Vec<CatalogKind>,
}

/// Keep what loaded, log and record what didn't
fn settle<T>(
    kind: CatalogKind,
    result: Result<Vec<T>, ApiError>,
    failed: &mut Vec<CatalogKind>,
) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!(catalog = ?kind, error = %e, "failed to load catalog");
            failed.push(kind);
            Vec::new()
        }
    }
}

/// Fetch every catalog `variant` needs, concurrently. A failed fetch leaves
/// its list empty; the others are still applied.
#[instrument(skip(api))]
pub async fn load_catalog(api: &dyn QuoteApiTrait, variant: FormVariant) -> CatalogLoad {
    let wants = |kind: CatalogKind| variant.catalogs().contains(&kind);

    let (locales, document_types, intended_uses, languages) = tokio::join!(
        async {
            if wants(CatalogKind::Locales) {
                api.fetch_locales().await
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if wants(CatalogKind::DocumentTypes) {
                api.fetch_document_types().await
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if wants(CatalogKind::IntendedUses) {
                api.fetch_intended_uses().await
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if wants(CatalogKind::Languages) {
                api.fetch_languages().await
            } else {
                Ok(Vec::new())
            }
        },
    );

    let mut failed = Vec::new();
    let catalog = OptionCatalog {
        locales: settle(CatalogKind::Locales, locales, &mut failed),
        document_types: settle(CatalogKind::DocumentTypes, document_types, &mut failed),
        intended_uses: settle(CatalogKind::IntendedUses, intended_uses, &mut failed),
        languages: settle(CatalogKind::Languages, languages, &mut failed),
    };

    info!(
        locales = catalog.locales.len(),
        document_types = catalog.document_types.len(),
        intended_uses = catalog.intended_uses.len(),
        languages = catalog.languages.len(),
        failed = failed.len(),
        "catalog loaded"
    );

    CatalogLoad { catalog, failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{HttpQuoteApi, MockQuoteApiTrait};
    use crate::state::{Locale, OptionItem};
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn item(value: &str) -> OptionItem {
        OptionItem {
            value: value.to_string(),
            label: value.to_string(),
        }
    }

    #[tokio::test]
    async fn test_certified_fetches_three_catalogs() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_locales().times(1).returning(|| {
            Ok(vec![Locale {
                value: "en-CA".into(),
                label: "English (Canada)".into(),
                language_name: "English".into(),
                country_name: Some("Canada".into()),
            }])
        });
        api.expect_fetch_document_types()
            .times(1)
            .returning(|| Ok(vec![item("Birth certificate")]));
        api.expect_fetch_intended_uses()
            .times(1)
            .returning(|| Ok(vec![item("Immigration")]));
        api.expect_fetch_languages().never();

        let load = load_catalog(&api, FormVariant::CertifiedDocument).await;
        assert!(load.failed.is_empty());
        let catalog = load.catalog;
        assert_eq!(catalog.locales.len(), 1);
        assert_eq!(catalog.document_types, vec![item("Birth certificate")]);
        assert_eq!(catalog.intended_uses, vec![item("Immigration")]);
        assert!(catalog.languages.is_empty());
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_successes() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_locales().returning(|| {
            Err(ApiError::Network {
                url: "/api/locales".into(),
                message: "timed out".into(),
            })
        });
        api.expect_fetch_document_types()
            .returning(|| Ok(vec![item("Diploma")]));
        api.expect_fetch_intended_uses().returning(|| {
            Err(ApiError::Status {
                url: "/api/intended-uses".into(),
                status: 500,
                message: None,
            })
        });

        let load = load_catalog(&api, FormVariant::CertifiedDocument).await;
        assert_eq!(
            load.failed,
            vec![CatalogKind::Locales, CatalogKind::IntendedUses]
        );
        let catalog = load.catalog;
        assert!(catalog.locales.is_empty());
        assert_eq!(catalog.document_types, vec![item("Diploma")]);
        assert!(catalog.intended_uses.is_empty());
    }

    #[tokio::test]
    async fn test_other_variants_fetch_languages_only() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages()
            .times(1)
            .returning(|| Ok(vec![item("German"), item("Japanese")]));

        let load = load_catalog(&api, FormVariant::Transcription).await;
        assert_eq!(load.catalog.languages.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_catalog_is_not_a_failure() {
        let mut api = MockQuoteApiTrait::new();
        api.expect_fetch_languages().returning(|| Ok(Vec::new()));

        let load = load_catalog(&api, FormVariant::LifeSciences).await;
        assert!(load.catalog.languages.is_empty());
        assert!(load.failed.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_requests_overlap() {
        let server = MockServer::start().await;
        for (route, key) in [
            ("/api/locales", "locales"),
            ("/api/document-types", "documentTypes"),
            ("/api/intended-uses", "intendedUses"),
        ] {
            let mut body = serde_json::Map::new();
            body.insert(key.to_string(), serde_json::json!([]));
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(body)
                        .set_delay(Duration::from_millis(300)),
                )
                .expect(1)
                .mount(&server)
                .await;
        }

        let api = HttpQuoteApi::new(&server.uri(), None).unwrap();
        let started = Instant::now();
        let load = load_catalog(&api, FormVariant::CertifiedDocument).await;
        let elapsed = started.elapsed();

        assert!(load.failed.is_empty());
        assert!(
            elapsed < Duration::from_millis(800),
            "three 300ms requests took {elapsed:?}"
        );
    }
}
