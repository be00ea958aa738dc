//! The `PageSource` seam, exercised without the public API.

use artic_client::{ArticClient, ClientConfig, ClientError, PageSource, parse_page};
use artic_model::{ArtworkPage, PageNumber, PageSize};

struct FixedBody(&'static str);

impl PageSource for FixedBody {
    async fn load_page(
        &self,
        page: PageNumber,
        _size: PageSize,
    ) -> artic_client::Result<ArtworkPage> {
        parse_page(page, self.0)
    }
}

async fn load_through<S: PageSource>(source: &S, page: u32) -> artic_client::Result<ArtworkPage> {
    source
        .load_page(PageNumber::new(page).unwrap(), PageSize::Twelve)
        .await
}

#[tokio::test]
async fn custom_source_returns_normalized_page() {
    let source = FixedBody(
        r#"{"pagination":{"total":1,"limit":12,"offset":0,"total_pages":1,"current_page":1},
            "data":[{"id":42,"title":null}]}"#,
    );
    let page = load_through(&source, 1).await.unwrap();
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].title, "Unknown");
    assert_eq!(page.pagination.total, 1);
}

#[tokio::test]
async fn custom_source_surfaces_parse_errors() {
    let source = FixedBody("not json");
    let err = load_through(&source, 1).await.unwrap_err();
    assert!(matches!(err, ClientError::JsonParse(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    // Port 9 (discard) is closed on loopback in practice; the connect fails fast.
    let config = ClientConfig::default()
        .with_endpoint("http://127.0.0.1:9/api/v1/artworks")
        .with_timeout_secs(5);
    let client = ArticClient::new(config).unwrap();
    let err = load_through(&client, 1).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_retryable());
}
