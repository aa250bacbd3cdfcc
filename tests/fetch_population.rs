//! End-to-end fetch tests against a mock World Bank server.

mod common;

use std::time::Duration;

use common::mock_worldbank::{MockResponse, MockWorldBank};
use demograph::config::SourceConfig;
use demograph::worldbank::{FetchError, FetchTask, WorldBankClient, YearBreakdown};

fn source_for(base_url: String) -> SourceConfig {
    SourceConfig {
        base_url,
        ..SourceConfig::default()
    }
}

#[tokio::test]
async fn success_path_merges_both_series() {
    let server = MockWorldBank::start(
        MockResponse::records(&[
            ("2020", Some(800_000_000.0)),
            ("2019", Some(790_000_000.0)),
        ]),
        MockResponse::records(&[("2020", Some(600_000_000.0))]),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let points = client.fetch_population().await.expect("fetch should succeed");

    assert_eq!(
        points,
        vec![
            YearBreakdown {
                year: "2019".to_string(),
                urban: 790.0,
                rural: 0.0,
            },
            YearBreakdown {
                year: "2020".to_string(),
                urban: 800.0,
                rural: 600.0,
            },
        ]
    );
}

#[tokio::test]
async fn one_failing_side_fails_the_whole_fetch() {
    let server = MockWorldBank::start(
        MockResponse::error(500),
        MockResponse::records(&[("2020", Some(1_000_000.0))]),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let err = client.fetch_population().await.unwrap_err();

    match &err {
        FetchError::Status { urban, rural } => {
            assert_eq!(urban.as_u16(), 500);
            assert_eq!(rural.as_u16(), 200);
        }
        other => panic!("expected Status, got {other:?}"),
    }
    let message = err.user_message();
    assert!(message.starts_with("Could not load population data:"));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn missing_records_element_is_the_soft_no_data_outcome() {
    let server = MockWorldBank::start(
        MockResponse::json(r#"[{"page":1,"total":0}]"#),
        MockResponse::records(&[("2020", Some(1_000_000.0))]),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let err = client.fetch_population().await.unwrap_err();

    assert!(matches!(err, FetchError::NoData));
    assert_eq!(
        err.user_message(),
        "No data available. Please check the country code or date range."
    );
}

#[tokio::test]
async fn empty_records_element_is_the_soft_no_data_outcome() {
    let server = MockWorldBank::start(
        MockResponse::records(&[("2020", Some(1_000_000.0))]),
        MockResponse::json(r#"[{"page":1,"total":0},[]]"#),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let err = client.fetch_population().await.unwrap_err();
    assert!(matches!(err, FetchError::NoData));
}

#[tokio::test]
async fn unparseable_body_is_a_hard_error_with_a_lead_in() {
    let server = MockWorldBank::start(
        MockResponse::json("<html>backend busy</html>"),
        MockResponse::records(&[("2020", Some(1_000_000.0))]),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let err = client.fetch_population().await.unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)));
    assert!(err.user_message().starts_with("Could not load population data:"));
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing listens on this port; bind-then-drop guarantees it was free.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("probe bind");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);

    let client = WorldBankClient::new(source_for(format!("http://{addr}")));
    let err = client.fetch_population().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn null_values_never_create_chart_entries() {
    let server = MockWorldBank::start(
        MockResponse::records(&[("2020", None), ("2019", Some(500_000_000.0))]),
        MockResponse::records(&[("2020", Some(600_000_000.0))]),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let points = client.fetch_population().await.expect("fetch should succeed");

    assert_eq!(
        points,
        vec![
            YearBreakdown {
                year: "2019".to_string(),
                urban: 500.0,
                rural: 0.0,
            },
            YearBreakdown {
                year: "2020".to_string(),
                urban: 0.0,
                rural: 600.0,
            },
        ]
    );
}

#[tokio::test]
async fn dropping_the_task_cancels_the_fetch() {
    let server = MockWorldBank::start(
        MockResponse::records(&[("2020", Some(1_000_000.0))]).with_delay(500),
        MockResponse::records(&[("2020", Some(1_000_000.0))]).with_delay(500),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let (tx, rx) = std::sync::mpsc::channel();
    let task = FetchTask::spawn(&tokio::runtime::Handle::current(), client, 1, tx);

    // Cancel before the mock has answered; no outcome may be delivered.
    drop(task);
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn completed_task_delivers_a_generation_tagged_event() {
    let server = MockWorldBank::start(
        MockResponse::records(&[("2020", Some(800_000_000.0))]),
        MockResponse::records(&[("2020", Some(600_000_000.0))]),
    )
    .await;

    let client = WorldBankClient::new(source_for(server.base_url()));
    let (tx, rx) = std::sync::mpsc::channel();
    let task = FetchTask::spawn(&tokio::runtime::Handle::current(), client, 7, tx);

    let mut delivered = None;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if let Ok(event) = rx.try_recv() {
            delivered = Some(event);
            break;
        }
    }

    match delivered {
        Some(demograph::ui::events::AppEvent::Population {
            generation,
            outcome,
        }) => {
            assert_eq!(generation, 7);
            let points = outcome.expect("fetch should succeed");
            assert_eq!(points.len(), 1);
            assert_eq!(points[0].urban, 800.0);
            assert_eq!(points[0].rural, 600.0);
        }
        _ => panic!("expected a Population event"),
    }
    drop(task);
}
