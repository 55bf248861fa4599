//! Tests for the validation flow against an in-memory commit source

use dco_validator::core::error::{ApiError, ValidationError};
use dco_validator::core::models::{CommitPayload, Conclusion, EventContext, RuleConfig};
use dco_validator::core::services::{DEFAULT_DOCS_URL, validate};

use crate::common::{COMMITS_URL, StaticCommitSource, payload, pull_request_event, signed, unsigned};

#[test]
fn test_valid_pull_request_succeeds() {
    let source = StaticCommitSource::with_commits(&[signed("a", true), signed("b", true)]);
    let verdict =
        validate(&pull_request_event(), &source, RuleConfig::with_gpg(), DEFAULT_DOCS_URL).unwrap();

    assert_eq!(verdict.conclusion, Conclusion::Success);
    assert_eq!(*source.requests.borrow(), vec![COMMITS_URL.to_string()]);
}

#[test]
fn test_failures_are_reported_against_pull_request_head() {
    let source = StaticCommitSource::with_commits(&[signed("a", false), unsigned("b", true)]);
    let verdict =
        validate(&pull_request_event(), &source, RuleConfig::with_gpg(), DEFAULT_DOCS_URL).unwrap();

    assert_eq!(verdict.conclusion, Conclusion::Failure);
    assert_eq!(verdict.context.head_sha, "head-sha");
    assert_eq!(verdict.context.head_branch, "feature/dco");
    assert!(verdict.summary.contains("\n b"));
    assert!(verdict.summary.contains("\n a"));
}

#[test]
fn test_other_events_do_not_fetch() {
    let source = StaticCommitSource::with_commits(&[signed("a", true)]);
    let event = EventContext {
        event_name: "push".to_string(),
        pull_request: None,
        ..pull_request_event()
    };
    let verdict = validate(&event, &source, RuleConfig::default(), DEFAULT_DOCS_URL).unwrap();

    assert_eq!(verdict.title, "Failed Validation");
    assert!(verdict.summary.contains(DEFAULT_DOCS_URL));
    assert_eq!(verdict.context.head_sha, "merge-sha");
    assert!(source.requests.borrow().is_empty());
}

#[test]
fn test_malformed_commit_fails_fast() {
    let mut broken = payload(&signed("b", true));
    if let Some(detail) = broken.commit.as_mut() {
        detail.author = None;
    }
    let source = StaticCommitSource::with_payloads(vec![payload(&signed("a", true)), broken]);

    let err = validate(&pull_request_event(), &source, RuleConfig::default(), DEFAULT_DOCS_URL)
        .unwrap_err();
    match err {
        ValidationError::MalformedCommit { sha, field } => {
            assert_eq!(sha, "b");
            assert_eq!(field, "commit.author");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_payload_object_is_malformed() {
    let source = StaticCommitSource::with_payloads(vec![CommitPayload::default()]);
    let err = validate(&pull_request_event(), &source, RuleConfig::default(), DEFAULT_DOCS_URL)
        .unwrap_err();
    assert!(matches!(err, ValidationError::MalformedCommit { field: "sha", .. }));
}

#[test]
fn test_fetch_error_is_not_swallowed() {
    let source = StaticCommitSource::failing(ApiError::Transport {
        url: COMMITS_URL.to_string(),
        message: "connection reset".to_string(),
    });
    let err = validate(&pull_request_event(), &source, RuleConfig::default(), DEFAULT_DOCS_URL)
        .unwrap_err();

    assert!(matches!(err, ValidationError::Fetch(ApiError::Transport { .. })));
    assert!(err.to_string().contains("connection reset"));
}
