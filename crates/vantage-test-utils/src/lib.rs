//! Testing utilities for the Vantage workspace
//!
//! Shared recording-index fixtures for backend tests.

#![allow(missing_docs)]

use serde_json::{json, Value};
use vantage_recorded::{RecordingIndex, WorkspaceRecordings};

/// Build an index from `(workspace id, [(fingerprint, payload)])` pairs.
pub fn recording_index(workspaces: &[(&str, &[(&str, Value)])]) -> RecordingIndex {
    let mut index = RecordingIndex::new();
    for (id, executions) in workspaces {
        let mut recordings = WorkspaceRecordings::new();
        for (fingerprint, payload) in *executions {
            recordings = recordings.with_execution(*fingerprint, payload.clone());
        }
        index.insert_workspace(id, recordings);
    }
    index
}

/// Index with one workspace and one canned execution result.
pub fn single_workspace_index(id: &str) -> RecordingIndex {
    recording_index(&[(id, &[("fp_default", canned_execution_result())])])
}

/// A small but realistic execution payload.
pub fn canned_execution_result() -> Value {
    json!({
        "dimensions": [
            {"headers": ["Region"]},
            {"headers": ["Revenue"]}
        ],
        "data": [[125_000.0], [98_500.5]]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_workspace_index_is_resolvable() {
        let index = single_workspace_index("demo");
        let recordings = index.workspace("demo").unwrap();
        assert_eq!(
            recordings.executions["fp_default"],
            canned_execution_result()
        );
    }
}
