use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with JavaScript/TypeScript sources
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Config discovery stops at the repository root
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with source files
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_sources(vec![
    ///     ("src/page.tsx", r#"const t = useTranslations("home"); t("title");"#),
    /// ])?;
    /// ```
    pub fn with_sources(files: Vec<(&str, &str)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (path, content) in files {
            fixture.write_source_file(path, content)?;
        }
        Ok(fixture)
    }

    /// Write a source file relative to the project root
    pub fn write_source_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .keyscoperc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".keyscoperc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// A project mixing every supported library convention
pub fn fixture_mixed_project() -> Result<McpTestFixture> {
    McpTestFixture::with_sources(vec![
        (
            "src/home.tsx",
            r#"import { useTranslations } from "next-intl";

export function Home() {
  const t = useTranslations("home");
  return <h1>{t("title")}</h1>;
}
"#,
        ),
        (
            "src/nav.jsx",
            r#"import { useTranslation } from "react-i18next";

export function Nav({ item }) {
  const { t } = useTranslation("common", { keyPrefix: "nav" });
  return <a title={t(item)}>{t("home")}</a>;
}
"#,
        ),
        (
            "src/server.js",
            r#"import i18next from "i18next";

export function subject() {
  return i18next.t("mail.subject");
}
"#,
        ),
        ("src/broken.ts", "export const = ;"),
        ("src/empty.ts", "export const answer = 42;\n"),
    ])
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a tool result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
