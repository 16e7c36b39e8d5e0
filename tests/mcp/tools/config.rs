use keyscope::mcp::{KeyscopeMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = KeyscopeMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceRoot"], "./");
    assert_eq!(json_result["config"]["ignoreTestFiles"], true);
    assert!(json_result["config"]["includes"].is_array());
    assert_eq!(
        json_result["config"]["libraries"],
        json!(["i18next", "use-translation", "translation-component", "next-intl"])
    );
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "sourceRoot": "./app",
            "libraries": ["next-intl"]
        }))
        .unwrap();

    let server = KeyscopeMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourceRoot"], "./app");
    assert_eq!(json_result["config"]["libraries"], json!(["next-intl"]));
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "libraries": [] }))
        .unwrap();

    let server = KeyscopeMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let error = server.get_config(params).await.unwrap_err();
    assert!(error.message.contains("Failed to load config"));
}
