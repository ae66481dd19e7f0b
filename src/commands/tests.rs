//! Unit tests for the report command

use super::*;
use crate::{cli::types::ReportKind, config::ApiConfig, error::FootyError, LeagueId};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn params(kind: ReportKind, as_json: bool) -> ReportParams {
    ReportParams {
        kind,
        league_id: LeagueId::new("PD"),
        as_json,
        color: false,
    }
}

async fn serve(body: serde_json::Value, status: u16, resource: &str) -> (MockServer, ApiConfig) {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v4/competitions/PD/{resource}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&mock_server)
        .await;
    let config = ApiConfig::new(format!("{}/v4/competitions", mock_server.uri()), "token");
    (mock_server, config)
}

#[tokio::test]
async fn test_standings_table_written() {
    let body = json!({
        "standings": [{
            "table": [{
                "position": 1,
                "team": { "name": "FC Barcelona" },
                "playedGames": 3, "won": 3, "draw": 0, "lost": 0, "points": 9,
                "goalsFor": 8, "goalsAgainst": 1
            }]
        }]
    });
    let (_server, config) = serve(body, 200, "standings").await;

    let mut out = Vec::new();
    handle_report(&config, &params(ReportKind::Standings, false), &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("FC Barcelona"));
    assert!(text.contains("Goal Difference"));
    assert!(text.contains(" 7 "));
}

#[tokio::test]
async fn test_scorers_json_written() {
    let body = json!({
        "scorers": [{
            "player": { "name": "Robert Lewandowski" },
            "team": { "name": "FC Barcelona" },
            "playedMatches": 3, "goals": 4, "assists": null, "penalties": 1
        }]
    });
    let (_server, config) = serve(body, 200, "scorers").await;

    let mut out = Vec::new();
    handle_report(&config, &params(ReportKind::Scorers, true), &mut out)
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "scorers");
    assert_eq!(value["rows"][0], json!([1, "Robert Lewandowski", "FC Barcelona", 3, 4, "-", 1]));
}

#[tokio::test]
async fn test_http_failure_writes_nothing() {
    let (_server, config) = serve(json!({ "message": "nope" }), 403, "standings").await;

    let mut out = Vec::new();
    let result = handle_report(&config, &params(ReportKind::Standings, false), &mut out).await;

    assert!(matches!(result, Err(FootyError::HttpStatus(403))));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_malformed_payload_writes_nothing() {
    let (_server, config) = serve(json!({ "unexpected": true }), 200, "scorers").await;

    let mut out = Vec::new();
    let result = handle_report(&config, &params(ReportKind::Scorers, false), &mut out).await;

    assert!(matches!(result, Err(FootyError::MalformedPayload { .. })));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_run_without_report_flag_writes_nothing() {
    use clap::Parser;

    let app = crate::cli::Cli::try_parse_from(["footy", "--json"]).unwrap();
    let mut out = Vec::new();
    run(app, &mut out).await.unwrap();
    assert!(out.is_empty());
}
