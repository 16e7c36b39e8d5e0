use keyscope::mcp::{
    KeyscopeMcpServer,
    types::{ExtractKeysParams, ScanOverviewParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::{Value, json};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_mixed_project};

fn extract_params(fixture: &McpTestFixture) -> ExtractKeysParams {
    ExtractKeysParams {
        project_root_path: fixture.root(),
        file_path: None,
        limit: None,
        offset: None,
    }
}

fn effective_keys(result: &Value) -> Vec<Value> {
    result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["effectiveKey"].clone())
        .collect()
}

// ============================================================================
// extract_keys tests
// ============================================================================

#[tokio::test]
async fn test_extract_keys_whole_project() {
    let fixture = fixture_mixed_project().unwrap();
    let server = KeyscopeMcpServer::new();

    let result = server
        .extract_keys(Parameters(extract_params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(json_result["totalFileCount"], 3);
    assert_pagination(&json_result, 0, 50, false);

    // Files are sorted by path: home.tsx, nav.jsx, server.js
    assert_eq!(
        effective_keys(&json_result),
        vec![
            json!("home.title"),
            Value::Null,
            json!("nav.home"),
            json!("mail.subject"),
        ]
    );

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["library"], "next-intl");
    assert_eq!(items[0]["line"], 5);
    assert_eq!(items[1]["status"], "dynamic-key-unresolved");
    assert_eq!(items[2]["namespace"], "common");
    assert_eq!(items[3]["callKind"], "method:t");
    assert_eq!(items[3]["status"], "no-prefix");

    let parse_errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(parse_errors.len(), 1);
    assert!(
        parse_errors[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("broken.ts")
    );
}

#[tokio::test]
async fn test_extract_keys_pagination() {
    let fixture = fixture_mixed_project().unwrap();
    let server = KeyscopeMcpServer::new();

    let params = ExtractKeysParams {
        limit: Some(2),
        offset: Some(1),
        ..extract_params(&fixture)
    };
    let result = server.extract_keys(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_pagination(&json_result, 1, 2, true);
    assert_eq!(json_result["items"][1]["effectiveKey"], "nav.home");
}

#[tokio::test]
async fn test_extract_keys_limit_is_capped() {
    let fixture = fixture_mixed_project().unwrap();
    let server = KeyscopeMcpServer::new();

    let params = ExtractKeysParams {
        limit: Some(1000),
        ..extract_params(&fixture)
    };
    let result = server.extract_keys(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 200, false);
}

#[tokio::test]
async fn test_extract_keys_single_file() {
    let fixture = fixture_mixed_project().unwrap();
    let server = KeyscopeMcpServer::new();

    let params = ExtractKeysParams {
        file_path: Some("src/nav.jsx".to_string()),
        ..extract_params(&fixture)
    };
    let result = server.extract_keys(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["totalFileCount"], 1);
    assert!(
        json_result["items"][0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("src/nav.jsx")
    );
    assert_eq!(json_result["parseErrors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_extract_keys_single_unparseable_file() {
    let fixture = fixture_mixed_project().unwrap();
    let server = KeyscopeMcpServer::new();

    let absolute = fixture.root_path().join("src/broken.ts");
    let params = ExtractKeysParams {
        file_path: Some(absolute.to_string_lossy().to_string()),
        ..extract_params(&fixture)
    };
    let result = server.extract_keys(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["parseErrors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_extract_keys_respects_config_libraries() {
    let fixture = fixture_mixed_project().unwrap();
    fixture
        .write_config(&json!({ "libraries": ["next-intl"] }))
        .unwrap();
    let server = KeyscopeMcpServer::new();

    let result = server
        .extract_keys(Parameters(extract_params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    // `useTranslation` and `i18next.t` are not recognized; the unbound `t`
    // in nav.jsx is claimed by next-intl instead.
    let items = json_result["items"].as_array().unwrap();
    assert!(items.iter().all(|item| item["library"] == "next-intl"));
    assert!(
        items
            .iter()
            .all(|item| item["effectiveKey"] != "mail.subject")
    );
}

// ============================================================================
// scan_overview tests
// ============================================================================

#[tokio::test]
async fn test_scan_overview() {
    let fixture = fixture_mixed_project().unwrap();
    let server = KeyscopeMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });
    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceFilesChecked"], 5);
    assert_eq!(json_result["filesWithKeys"], 3);
    assert_eq!(json_result["totalCount"], 4);
    assert_eq!(
        json_result["byStatus"],
        json!({ "resolved": 2, "noPrefix": 1, "dynamicKeyUnresolved": 1 })
    );
    assert_eq!(json_result["unresolvedPrefixCount"], 0);
    assert_eq!(json_result["parseErrorCount"], 1);
    assert_eq!(
        json_result["byLibrary"],
        json!([
            { "library": "i18next", "count": 1 },
            { "library": "use-translation", "count": 2 },
            { "library": "translation-component", "count": 0 },
            { "library": "next-intl", "count": 1 },
        ])
    );
}

#[tokio::test]
async fn test_scan_overview_empty_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = KeyscopeMcpServer::new();

    let params = Parameters(ScanOverviewParams {
        project_root_path: fixture.root(),
    });
    let result = server.scan_overview(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sourceFilesChecked"], 0);
    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["parseErrorCount"], 0);
}
