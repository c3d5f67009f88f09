//! Recorded backend integration tests
//!
//! End-to-end checks through the SPI contract: workspace lookup,
//! execution resolution, handle derivation and the authentication
//! contract, driven only through `dyn AnalyticalBackend`.

use serde_json::json;
use std::sync::Arc;
use vantage_backend_spi::prelude::*;
use vantage_recorded::{recorded_backend, recorded_backend_with_config, RECORDED_USER_ID};
use vantage_test_utils::{canned_execution_result, recording_index, single_workspace_index};

#[test]
fn end_to_end_execution_resolution() {
    let index = recording_index(&[(
        "foo",
        &[
            ("fp_sales", json!({"data": [[42.0]]})),
            ("fp_costs", json!({"data": [[7.5]]})),
        ],
    )]);
    let backend = recorded_backend(index);

    let workspace = backend.workspace("foo").unwrap();
    let execution = workspace.execution();

    assert_eq!(execution.workspace(), "foo");
    assert_eq!(execution.result_for("fp_sales").unwrap(), json!({"data": [[42.0]]}));
    assert_eq!(execution.result_for("fp_costs").unwrap(), json!({"data": [[7.5]]}));

    let err = execution.result_for("fp_profit").unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}

#[test]
fn workspaces_resolve_against_their_own_recordings() {
    let index = recording_index(&[
        ("alpha", &[("fp", json!({"value": "alpha"}))]),
        ("beta", &[("fp", json!({"value": "beta"}))]),
    ]);
    let backend = recorded_backend(index);

    let alpha = backend.workspace("alpha").unwrap().execution();
    let beta = backend.workspace("beta").unwrap().execution();

    assert_eq!(alpha.result_for("fp").unwrap(), json!({"value": "alpha"}));
    assert_eq!(beta.result_for("fp").unwrap(), json!({"value": "beta"}));
}

#[test]
fn unknown_workspace_is_a_fixture_miss_not_a_transient_failure() {
    let backend = recorded_backend(single_workspace_index("demo"));

    let err = backend.workspace("missing").unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(!err.is_transient());
}

#[test]
fn hostname_derivation_preserves_recordings_and_original_config() {
    let backend = recorded_backend_with_config(
        single_workspace_index("demo"),
        BackendConfig::new("test"),
    );
    let derived = backend.on_hostname("analytics.example.com");

    assert_eq!(backend.config().hostname, "test");
    assert_eq!(derived.config().hostname, "analytics.example.com");

    let execution = derived.workspace("demo").unwrap().execution();
    assert_eq!(
        execution.result_for("fp_default").unwrap(),
        canned_execution_result()
    );
}

#[test]
fn capabilities_descriptor_is_empty() {
    let backend = recorded_backend(single_workspace_index("demo"));
    assert_eq!(*backend.capabilities(), BackendCapabilities::default());
}

#[tokio::test]
async fn authentication_contract_always_resolves() {
    let backend = recorded_backend(single_workspace_index("demo"));

    // Regardless of prior calls, both operations resolve to the same principal
    for _ in 0..3 {
        let principal = backend.authenticate().await.unwrap();
        assert_eq!(principal.user_id, RECORDED_USER_ID);

        let checked = backend.is_authenticated().await.unwrap().unwrap();
        assert_eq!(checked.user_id, RECORDED_USER_ID);
    }
}

#[tokio::test]
async fn handles_are_safe_to_share_across_tasks() {
    let backend: Arc<dyn AnalyticalBackend> = recorded_backend(single_workspace_index("demo"));

    let mut joins = Vec::new();
    for _ in 0..4 {
        let handle = Arc::clone(&backend);
        joins.push(tokio::spawn(async move {
            let execution = handle.workspace("demo")?.execution();
            execution.result_for("fp_default")
        }));
    }

    for join in joins {
        let result = join.await.unwrap().unwrap();
        assert_eq!(result, canned_execution_result());
    }
}
