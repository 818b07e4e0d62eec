use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use sympta_server::state::AppState;

/// Build an app backed by a temp data directory.
/// The tempdir guard must be kept alive for the duration of the test.
async fn test_app() -> (Router, tempfile::TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let state = AppState::open(tmp.path()).await.unwrap();
    (sympta_server::app(state), tmp)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn structured_payload(severity: u32, secondary: Value) -> Value {
    json!({
        "patient": {
            "patientId": "p-1",
            "patientName": "Test Patient",
            "age": 25,
            "sex": "M",
            "weight": 70.0,
            "height": 175.0
        },
        "lifestyle": { "smoking": false, "alcohol": false, "drugs": false },
        "primary_symptoms": [{ "name": "mild cough", "severity": severity }],
        "secondary_symptoms": secondary
    })
}

#[tokio::test]
async fn welcome_responds() {
    let (app, _tmp) = test_app().await;

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("welcome"));
}

#[tokio::test]
async fn initial_report_is_all_zeroes() {
    let (app, _tmp) = test_app().await;

    let response = app.oneshot(get_request("/api/report")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let counts = body["category_counts"].as_object().unwrap();
    assert_eq!(counts.len(), 5);
    for key in [
        "NOT_SICK",
        "MILD_ILLNESS",
        "ACUTE_ILLNESS",
        "CHRONIC_ILLNESS",
        "TERMINAL_ILLNESS",
    ] {
        assert_eq!(counts[key], 0, "expected zero count for {key}");
    }
    assert!(body["last_predictions"].as_array().unwrap().is_empty());
    assert!(body["last_prediction_date"].is_null());
    assert!(body["recent_entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn single_mild_symptom_is_not_sick() {
    let (app, _tmp) = test_app().await;

    let payload = structured_payload(1, json!({}));
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/diagnosis", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["diagnosis"], "NOT_SICK");
    assert_eq!(body["severityTier"], 0);
    assert_eq!(body["riskLabel"], "Low");
    assert_eq!(body["patientId"], "p-1");
    assert_eq!(body["patientName"], "Test Patient");
    assert_eq!(body["age"], 25);
    assert_eq!(body["sex"], "M");
    assert!(!body["recommendations"].as_str().unwrap().is_empty());

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    assert_eq!(report["category_counts"]["NOT_SICK"], 1);
    assert_eq!(report["recent_entries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn blood_and_fever_escalate_one_band() {
    let (app, _tmp) = test_app().await;

    let payload = structured_payload(1, json!({ "fever": true, "bloodInUrine": true }));
    let response = app
        .oneshot(json_request("POST", "/api/diagnosis", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // Base score is 1 + 0 + 2 = 3 → NOT_SICK, escalated one band.
    assert_eq!(body["diagnosis"], "MILD_ILLNESS");
    assert_eq!(body["severityTier"], 1);
    assert_eq!(body["riskLabel"], "Medium-Low");
}

#[tokio::test]
async fn capped_secondary_symptoms_land_on_acute_boundary() {
    let (app, _tmp) = test_app().await;

    let all_secondary = json!({
        "fever": false, "rash": true, "cough": true, "skinEruptions": true,
        "nightSweats": true, "bloodInUrine": true, "bloodInStool": true,
        "constipation": true, "nausea": true, "headache": true,
        "abdominalPain": true, "insomnia": true, "fatigue": true,
        "diarrhea": true
    });
    let mut payload = structured_payload(5, all_secondary);
    payload["secondary_symptoms"]["fever"] = json!(true);
    payload["lifestyle"] = json!({ "smoking": true, "alcohol": true, "drugs": true });

    let response = app
        .oneshot(json_request("POST", "/api/diagnosis", payload))
        .await
        .unwrap();
    let body = body_json(response).await;
    // 5 + 3 + min(10, 14) = 18, inclusive top of the acute band; the
    // critical trigger does not escalate acute.
    assert_eq!(body["diagnosis"], "ACUTE_ILLNESS");
    assert_eq!(body["severityTier"], 2);
}

#[tokio::test]
async fn unknown_fields_are_rejected_before_scoring() {
    let (app, _tmp) = test_app().await;

    let mut payload = structured_payload(1, json!({}));
    payload["unexpected"] = json!("field");
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/diagnosis", payload))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    // Nothing was recorded.
    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    let counts = report["category_counts"].as_object().unwrap();
    assert!(counts.values().all(|v| v == 0));
}

#[tokio::test]
async fn missing_patient_block_is_rejected() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/diagnosis",
            json!({ "primary_symptoms": [] }),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn simplified_defaults_apply() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({ "patientId": "42", "patientName": "Loose Patient" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    // Three severity levels default to 1 each; nothing else contributes.
    assert_eq!(body["riskScore"], 3);
    assert_eq!(body["diagnosis"], "NOT_SICK");
    assert_eq!(body["patientId"], "42");
    assert_eq!(body["patientName"], "Loose Patient");
}

#[tokio::test]
async fn simplified_counts_flags_and_free_text_symptoms() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({
                "smoking": true, "alcohol": true, "drugs": true,
                "severityLevel1": 2, "severityLevel2": 2, "severityLevel3": 1,
                "fever": true, "nausea": true, "headache": true,
                "primarySymptom": "sore throat",
                "secondarySymptom": "  ",
            }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    // 5 (severities) + 3 (lifestyle) + 3 flags + 1 non-blank text = 12.
    assert_eq!(body["riskScore"], 12);
    assert_eq!(body["diagnosis"], "MILD_ILLNESS");
}

#[tokio::test]
async fn simplified_escalates_on_blood_and_fever() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({ "fever": true, "bloodInStool": true }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    // 3 (default severities) + 2 flags = 5 → NOT_SICK, escalated.
    assert_eq!(body["riskScore"], 5);
    assert_eq!(body["diagnosis"], "MILD_ILLNESS");
}

#[tokio::test]
async fn simplified_coerces_numeric_strings() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({ "severityLevel1": "4" }),
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["riskScore"], 6);
}

#[tokio::test]
async fn simplified_rejects_non_numeric_severity() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({ "severityLevel2": "not a number" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    let counts = report["category_counts"].as_object().unwrap();
    assert!(counts.values().all(|v| v == 0));
}

#[tokio::test]
async fn simplified_rejects_severity_beyond_u32_range() {
    let (app, _tmp) = test_app().await;

    // 2^32 + 1 must fail at the coercion boundary, not wrap to 1.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({ "severityLevel1": 4294967297u64 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    let counts = report["category_counts"].as_object().unwrap();
    assert!(counts.values().all(|v| v == 0));
}

#[tokio::test]
async fn simplified_out_of_range_age_falls_back_to_default() {
    let (app, _tmp) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/simplified-diagnosis",
            json!({ "patientId": "p-age", "age": 4294967297u64 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["riskScore"], 3);

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    let entries = report["recent_entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["age"], 0);
}

#[tokio::test]
async fn both_variants_share_the_statistics_path() {
    let (app, _tmp) = test_app().await;

    let structured = structured_payload(1, json!({}));
    app.clone()
        .oneshot(json_request("POST", "/api/diagnosis", structured))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request("POST", "/api/simplified-diagnosis", json!({})))
        .await
        .unwrap();

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    let counts = report["category_counts"].as_object().unwrap();
    let total: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 2);
    assert_eq!(report["recent_entries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn history_is_bounded_at_five() {
    let (app, _tmp) = test_app().await;

    for i in 0..7 {
        let mut payload = structured_payload(1, json!({}));
        payload["patient"]["patientId"] = json!(format!("p-{i}"));
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/diagnosis", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    assert_eq!(report["last_predictions"].as_array().unwrap().len(), 5);
    assert_eq!(report["recent_entries"].as_array().unwrap().len(), 5);
    // The tail reflects the most recent calls, in order.
    let ids: Vec<_> = report["recent_entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["patient_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["p-2", "p-3", "p-4", "p-5", "p-6"]);
    let total: u64 = report["category_counts"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(total, 7);
}

#[tokio::test]
async fn report_reads_are_idempotent() {
    let (app, _tmp) = test_app().await;

    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/diagnosis",
            structured_payload(2, json!({})),
        ))
        .await
        .unwrap();

    let first = body_json(app.clone().oneshot(get_request("/api/report")).await.unwrap()).await;
    let second = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn all_five_categories_are_reachable() {
    let (app, _tmp) = test_app().await;

    // (secondary flags, primary severity, expected category), always with
    // all three lifestyle flags set.
    let cases = [
        (json!({}), 1, "NOT_SICK"),
        (json!({ "rash": true, "cough": true, "nausea": true, "headache": true, "fatigue": true }), 3, "MILD_ILLNESS"),
        (json!({ "rash": true, "cough": true, "nausea": true, "headache": true, "fatigue": true, "insomnia": true, "diarrhea": true, "constipation": true }), 4, "ACUTE_ILLNESS"),
        (json!({ "rash": true, "cough": true, "nausea": true, "headache": true, "fatigue": true, "insomnia": true, "diarrhea": true, "constipation": true, "nightSweats": true, "abdominalPain": true }), 7, "CHRONIC_ILLNESS"),
        (json!({ "rash": true, "cough": true, "nausea": true, "headache": true, "fatigue": true, "insomnia": true, "diarrhea": true, "constipation": true, "nightSweats": true, "abdominalPain": true }), 15, "TERMINAL_ILLNESS"),
    ];

    for (secondary, severity, expected) in cases {
        let mut payload = structured_payload(severity, secondary);
        payload["lifestyle"] = json!({ "smoking": true, "alcohol": true, "drugs": true });

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/diagnosis", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["diagnosis"], expected);
    }

    let report = body_json(app.oneshot(get_request("/api/report")).await.unwrap()).await;
    let counts = report["category_counts"].as_object().unwrap();
    for key in [
        "NOT_SICK",
        "MILD_ILLNESS",
        "ACUTE_ILLNESS",
        "CHRONIC_ILLNESS",
        "TERMINAL_ILLNESS",
    ] {
        assert_eq!(counts[key], 1, "expected one count for {key}");
    }
}
