//! Wire contract for the fixer.io endpoints.
//!
//! Pins the exact URL each operation requests, including parameter names
//! the live API depends on.

use std::sync::Arc;

use fixerio_core::{build_url, FixerClient, QueryParams, StaticHttpClient, API_HOST, API_PREFIX};

struct EndpointCase {
    name: &'static str,
    expected_url: &'static str,
}

async fn requested_urls(secure: bool) -> Vec<String> {
    let transport = Arc::new(StaticHttpClient::json(r#"{"success":true}"#));
    let client = FixerClient::new("k3y", "gbp", secure)
        .expect("valid client")
        .with_http_client(transport.clone());

    client.symbols().await.expect("symbols");
    client.latest(&["USD", "EUR"]).await.expect("latest");
    client
        .historical("2024-02-29", &["JPY"])
        .await
        .expect("historical");
    client
        .convert("USD", "EUR", 12.5, "2024-02-29")
        .await
        .expect("convert");
    client
        .timeseries("2024-01-01", "2024-01-02")
        .await
        .expect("timeseries");
    client
        .fluctuation("2024-01-01", "2024-01-02")
        .await
        .expect("fluctuation");

    transport.requested_urls()
}

fn endpoint_cases() -> Vec<EndpointCase> {
    vec![
        EndpointCase {
            name: "symbols",
            expected_url: "https://data.fixer.io/api/symbols?access_key=k3y&base=GBP",
        },
        EndpointCase {
            name: "latest",
            expected_url: "https://data.fixer.io/api/latest?access_key=k3y&base=GBP&symbols=USD,EUR",
        },
        EndpointCase {
            name: "historical",
            expected_url: "https://data.fixer.io/api/2024-02-29?access_key=k3y&base=GBP&symbols=JPY",
        },
        EndpointCase {
            name: "convert",
            expected_url: "https://data.fixer.io/api/convert?access_key=k3y&base=GBP&from=USD&to=EUR&amount=12.5&date=2024-02-29",
        },
        EndpointCase {
            name: "timeseries",
            expected_url: "https://data.fixer.io/api/timeseries?access_key=k3y&base=GBP&start_date=2024-01-01&end_data=2024-01-02",
        },
        EndpointCase {
            name: "fluctuation",
            expected_url: "https://data.fixer.io/api/fluctuation?access_key=k3y&base=GBP&start_date=2024-01-01&end_data=2024-01-02",
        },
    ]
}

#[tokio::test]
async fn every_operation_requests_its_documented_url() {
    let urls = requested_urls(true).await;
    let cases = endpoint_cases();

    assert_eq!(urls.len(), cases.len());
    for (case, url) in cases.iter().zip(urls.iter()) {
        assert_eq!(url, case.expected_url, "endpoint '{}'", case.name);
    }
}

#[tokio::test]
async fn insecure_client_uses_plain_http() {
    for url in requested_urls(false).await {
        assert!(
            url.starts_with(&format!("http://{API_HOST}{API_PREFIX}/")),
            "got {url}"
        );
    }
}

#[test]
fn built_url_contains_exactly_the_non_empty_parameters() {
    let params = QueryParams::new()
        .with("from", "CHF")
        .with("to", "")
        .with("amount", "3")
        .with("date", "")
        .with("symbols", "NZD");

    let url = build_url(false, "convert", "key", "", &params);
    let query = url.split_once('?').map(|(_, query)| query).expect("query string");
    let names: Vec<&str> = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(name, _)| name)
        .collect();

    assert_eq!(names.len(), 5);
    for name in ["access_key", "base", "from", "amount", "symbols"] {
        assert!(names.contains(&name), "missing {name} in {url}");
    }
    assert!(query.contains("from=CHF"));
    assert!(query.contains("amount=3"));
    assert!(query.contains("symbols=NZD"));
    assert!(!names.contains(&"to"));
    assert!(!names.contains(&"date"));
}
