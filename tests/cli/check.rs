use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
export function Button() {
  const t = useTranslations("common");
  return <button>{t("submit")}</button>;
}
"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "✓ Checked 1 source file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_dynamic_key_warning() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"export function Label({ name }) {
  const t = useTranslations("labels");
  return <span>{t(name)}</span>;
}
"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert_eq!(
        out.stdout,
        r#"warning: "dynamic key passed to `t`"  dynamic-key
  --> ./src/app.tsx:3:17
  |
3 |   return <span>{t(name)}</span>;
  |                 ^
  = hint: use a string literal so the key can be extracted


✘ 1 problems (0 errors, 1 warning)
"#
    );

    Ok(())
}

#[test]
fn test_unresolved_prefix_warning() -> Result<()> {
    let test = CliTest::with_file(
        "src/section.jsx",
        r#"function Section({ id }) {
  const t = useTranslations(id);
  return t("title");
}
"#,
    )?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains(
        "warning: \"prefix of `t` is not a literal (key \"title\")\"  unresolved-prefix"
    ));
    assert!(out.stdout.contains("--> ./src/section.jsx:3:10"));

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("src/broken.tsx", "export const = ;")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("parse-error"));
    assert!(out.stdout.contains("--> ./src/broken.tsx\n"));
    assert!(out.stdout.contains("(1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyscoperc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("src/app.js", r#"t("ok");"#)?;
    test.write_file("generated/keys.js", r#"t(dynamic);"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_test_files_ignored_by_default() -> Result<()> {
    let test = CliTest::with_file("src/app.test.js", r#"t(dynamic);"#)?;
    test.write_file("src/app.js", r#"t("ok");"#)?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(0));

    test.write_file(".keyscoperc.json", r#"{ "ignoreTestFiles": false }"#)?;
    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("./src/app.test.js:1:1"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".keyscoperc.json", r#"{ "libraries": ["vue-i18n"] }"#)?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.starts_with("Error: Failed to parse config file"));

    Ok(())
}

#[test]
fn test_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::with_file("app.js", r#"t("k");"#)?;

    let mut cmd = test.check_command();
    cmd.arg("-v");
    let out = run(cmd)?;

    assert!(
        out.stderr
            .contains("Note: No .keyscoperc.json found, using default configuration")
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(out.code, Some(0));
    for command in ["keys", "check", "init", "serve"] {
        assert!(out.stdout.contains(command), "help should list {}", command);
    }

    Ok(())
}
