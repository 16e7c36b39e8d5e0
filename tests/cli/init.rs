use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );
    assert_eq!(parsed["ignoreTestFiles"], true);
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(
        parsed["libraries"],
        serde_json::json!(["i18next", "use-translation", "translation-component", "next-intl"])
    );

    // 2-space indentation
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "✓ Created .keyscoperc.json\n");
    assert!(test.root().join(".keyscoperc.json").exists());

    let content = test.read_file(".keyscoperc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyscoperc.json", "{}")?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(out.code, Some(2));
    assert_eq!(out.stderr, "Error: .keyscoperc.json already exists\n");
    assert_eq!(test.read_file(".keyscoperc.json")?, "{}");

    Ok(())
}
