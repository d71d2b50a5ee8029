/*!
 * End-to-end tests for the document upload endpoints
 */

use axum::body::Body;
use axum::http::{header, Request, StatusCode};

use translitner::MockOracle;

use crate::common::{
    create_test_docx, docx_upload_request, json_body, send, test_router, upload_request,
    TEST_UPLOAD_LIMIT,
};

#[tokio::test]
async fn test_transliterateFile_shouldReturnExtractedTextAndReply() {
    let oracle = MockOracle::fixed("জন ডো\nগুৱাহাটী");
    let docx = create_test_docx(&["John Doe", "Guwahati"]);

    let response = send(test_router(&oracle), docx_upload_request("/transliterate/file", &docx)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["original_text"], "John Doe\nGuwahati");
    assert_eq!(body["transliterated_text"], "জন ডো\nগুৱাহাটী");
    assert!(oracle.last_prompt().unwrap().contains("'John Doe\nGuwahati'"));
}

#[tokio::test]
async fn test_transliterateFile_withWrongContentType_shouldRejectWithoutCallingOracle() {
    let oracle = MockOracle::fixed("unused");
    let docx = create_test_docx(&["John"]);

    let response = send(
        test_router(&oracle),
        upload_request("/transliterate/file", "file", "application/pdf", &docx),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Invalid file type. Please upload a .docx file.");
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_transliterateFile_withMissingFileField_shouldAskForFile() {
    let oracle = MockOracle::fixed("unused");
    let docx = create_test_docx(&["John"]);

    let response = send(
        test_router(&oracle),
        upload_request(
            "/transliterate/file",
            "document",
            translitner::document::DOCX_CONTENT_TYPE,
            &docx,
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Please provide a file.");
}

#[tokio::test]
async fn test_transliterateFile_withNonMultipartRequest_shouldReturnJsonError() {
    let oracle = MockOracle::fixed("unused");
    let request = Request::builder()
        .method("POST")
        .uri("/transliterate/file")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("John"))
        .unwrap();

    let response = send(test_router(&oracle), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_transliterateFile_withCorruptDocument_shouldBeUnprocessable() {
    let oracle = MockOracle::fixed("unused");

    let response = send(
        test_router(&oracle),
        docx_upload_request("/transliterate/file", b"PK but not really a zip"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_ner_withFencedJsonReply_shouldReturnEntities() {
    let oracle = MockOracle::fixed("```json\n{\"John\": \"জন\"}\n```");
    let docx = create_test_docx(&["John filed the petition."]);

    let response = send(test_router(&oracle), docx_upload_request("/ner", &docx)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body, serde_json::json!({"entities": {"John": "জন"}}));

    let prompt = oracle.last_prompt().unwrap();
    assert!(prompt.contains("Extract named entities"));
    assert!(prompt.contains("Text: 'John filed the petition.'"));
}

#[tokio::test]
async fn test_ner_withPlainJsonReply_shouldReturnEntitiesUnchanged() {
    let oracle = MockOracle::fixed(r#"{"Mary": "মেৰী", "Dispur": "দিছপুৰ"}"#);
    let docx = create_test_docx(&["Mary moved to Dispur."]);

    let body = json_body(send(test_router(&oracle), docx_upload_request("/ner", &docx)).await).await;

    assert_eq!(body["entities"]["Mary"], "মেৰী");
    assert_eq!(body["entities"]["Dispur"], "দিছপুৰ");
}

#[tokio::test]
async fn test_ner_withNonStringValues_shouldReturnObjectUnchanged() {
    let oracle = MockOracle::fixed(r#"{"John": "জন", "2021": 2021, "Mary": null}"#);
    let docx = create_test_docx(&["John and Mary met in 2021."]);

    let response = send(test_router(&oracle), docx_upload_request("/ner", &docx)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(
        body,
        serde_json::json!({"entities": {"John": "জন", "2021": 2021, "Mary": null}})
    );
}

#[tokio::test]
async fn test_ner_withOversizeUpload_shouldReportSizeLimit() {
    let oracle = MockOracle::fixed("{}");
    let data = vec![b'a'; TEST_UPLOAD_LIMIT + 10];

    let response = send(test_router(&oracle), docx_upload_request("/ner", &data)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        format!("Upload exceeds the maximum size of {} bytes", TEST_UPLOAD_LIMIT)
    );
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_transliterateFile_withOversizeUpload_shouldReportSizeLimit() {
    let oracle = MockOracle::fixed("unused");
    let data = vec![b'a'; TEST_UPLOAD_LIMIT + 10];

    let response = send(test_router(&oracle), docx_upload_request("/transliterate/file", &data)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("maximum size"));
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_ner_withProseReply_shouldReturnClientErrorWithRawReply() {
    let oracle = MockOracle::fixed("I cannot process this.");
    let docx = create_test_docx(&["Anything"]);

    let response = send(test_router(&oracle), docx_upload_request("/ner", &docx)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("I cannot process this."));
    assert!(error.starts_with("Could not extract json for NER entities"));
}

#[tokio::test]
async fn test_ner_withWrongContentType_shouldRejectWithoutCallingOracle() {
    let oracle = MockOracle::fixed("{}");

    let response = send(
        test_router(&oracle),
        upload_request("/ner", "file", "text/plain", b"John"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_ner_withFailingOracle_shouldReturnBadGateway() {
    let docx = create_test_docx(&["John"]);

    let response = send(test_router(&MockOracle::failing()), docx_upload_request("/ner", &docx)).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
