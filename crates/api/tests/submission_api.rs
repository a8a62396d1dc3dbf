//! HTTP-level integration tests for the submitted-project endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth, send};
use serde_json::{json, Value};

fn sample_submission(examinee: &str, creator: &str, status: &str) -> Value {
    json!({
        "examineeEmail": examinee,
        "creatorEmail": creator,
        "approveStatus": status
    })
}

/// Create a submission through the API, returning its assigned id.
async fn create_submission(app: axum::Router, cookie: &str, body: Value) -> String {
    let response = post_json_auth(app, "/submitted-projects?userId=user-1", cookie, body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["acknowledged"], true);
    json["insertedId"].as_str().expect("insertedId").to_string()
}

/// A created submission shows up in the full listing with its fields intact.
#[tokio::test]
async fn create_then_list_round_trips() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    let id = create_submission(
        app.clone(),
        &cookie,
        sample_submission("examinee@test.com", "creator@test.com", "Pending"),
    )
    .await;
    assert_eq!(id.len(), 24);

    let response = get_auth(app, "/submitted-projects?userId=user-1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["_id"], id.as_str());
    assert_eq!(listed[0]["examineeEmail"], "examinee@test.com");
    assert_eq!(listed[0]["approveStatus"], "Pending");
}

/// The full listing sits behind the whole gate: 401 without a token, 403
/// without a matching identity declaration, 200 with both.
#[tokio::test]
async fn listing_is_gated() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    let response = send(
        app.clone(),
        axum::http::Method::GET,
        "/submitted-projects",
        None,
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app.clone(), "/submitted-projects", &cookie).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(app, "/submitted-projects?userId=user-1", &cookie).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// /my-submitted-projects/{email} returns only that examinee's submissions.
#[tokio::test]
async fn examinee_listing_filters_by_email() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    create_submission(
        app.clone(),
        &cookie,
        sample_submission("a@test.com", "creator@test.com", "Pending"),
    )
    .await;
    create_submission(
        app.clone(),
        &cookie,
        sample_submission("b@test.com", "creator@test.com", "Pending"),
    )
    .await;

    let response = get_auth(
        app,
        "/my-submitted-projects/a%40test.com?userId=user-1",
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["examineeEmail"], "a@test.com");
}

/// /pending-submit/{email} lists only this creator's still-pending work.
#[tokio::test]
async fn pending_listing_excludes_approved_and_other_creators() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    create_submission(
        app.clone(),
        &cookie,
        sample_submission("x@test.com", "creator@test.com", "Pending"),
    )
    .await;
    create_submission(
        app.clone(),
        &cookie,
        sample_submission("y@test.com", "creator@test.com", "Approved"),
    )
    .await;
    create_submission(
        app.clone(),
        &cookie,
        sample_submission("z@test.com", "other@test.com", "Pending"),
    )
    .await;

    let response = get_auth(
        app,
        "/pending-submit/creator%40test.com?userId=user-1",
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let listed = json.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["examineeEmail"], "x@test.com");
}

/// Grading stores marks and feedback and always lands the submission on
/// Approved, even when the body tries to say otherwise.
#[tokio::test]
async fn grading_forces_approved_status() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    let id = create_submission(
        app.clone(),
        &cookie,
        sample_submission("examinee@test.com", "creator@test.com", "Pending"),
    )
    .await;

    let response = put_json_auth(
        app.clone(),
        &format!("/pending-submit/{id}?userId=user-1"),
        &cookie,
        json!({
            "givenMarks": 55,
            "feedback": "Good work",
            "approveStatus": "Pending"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["matchedCount"], 1);
    assert_eq!(json["modifiedCount"], 1);

    let listed =
        body_json(get_auth(app, "/submitted-projects?userId=user-1", &cookie).await).await;
    assert_eq!(listed[0]["approveStatus"], "Approved");
    assert_eq!(listed[0]["givenMarks"], 55);
    assert_eq!(listed[0]["feedback"], "Good work");
}

/// Grading an absent id is Not-Found under the default policy.
#[tokio::test]
async fn grading_absent_id_is_not_found() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    let response = put_json_auth(
        app,
        "/pending-submit/65a1b2c3d4e5f60718293a4b?userId=user-1",
        &cookie,
        json!({"givenMarks": 10, "feedback": "?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A malformed id in the grading path is rejected before anything else.
#[tokio::test]
async fn grading_malformed_id_is_bad_request() {
    let app = common::build_test_app();
    let cookie = common::auth_cookie("user-1");

    let response = put_json_auth(
        app,
        "/pending-submit/not-an-id?userId=user-1",
        &cookie,
        json!({"givenMarks": 10, "feedback": "?"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
