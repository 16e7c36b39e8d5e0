use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_keys_text_listing() -> Result<()> {
    let test = CliTest::with_file(
        "src/page.tsx",
        r#"import { useTranslations } from "next-intl";

export default function Page() {
  const t = useTranslations("home");
  return <h1>{t("title")}</h1>;
}
"#,
    )?;
    test.write_file("src/plain.js", r#"t("standalone");"#)?;

    let out = run(test.keys_command())?;

    assert_eq!(out.code, Some(0));
    assert_eq!(
        out.stdout,
        "./src/page.tsx\n  \
         5:15  home.title  (resolved, next-intl)\n\
         \n\
         ./src/plain.js\n  \
         1:1  standalone  (no-prefix, i18next)\n\
         \n\
         ✓ Found 2 key occurrences in 2 of 2 source files\n"
    );

    Ok(())
}

#[test]
fn test_keys_json_output() -> Result<()> {
    let test = CliTest::with_file(
        "app.jsx",
        r#"const Nav = () => {
  const { t } = useTranslation("common", { keyPrefix: "nav" });
  return <a>{t("home")}{t(label)}</a>;
};
"#,
    )?;

    let mut cmd = test.keys_command();
    cmd.args(["--format", "json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    let json: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(json["sourceFilesChecked"], 1);

    let occurrences = json["occurrences"].as_array().unwrap();
    assert_eq!(occurrences.len(), 2);
    assert_eq!(occurrences[0]["rawKey"], "home");
    assert_eq!(occurrences[0]["effectiveKey"], "nav.home");
    assert_eq!(occurrences[0]["namespace"], "common");
    assert_eq!(occurrences[0]["library"], "use-translation");
    assert_eq!(occurrences[0]["callKind"], "direct");
    assert_eq!(occurrences[0]["filePath"], "./app.jsx");
    assert_eq!(occurrences[0]["line"], 3);
    assert_eq!(occurrences[1]["status"], "dynamic-key-unresolved");
    assert!(occurrences[1]["effectiveKey"].is_null());
    assert_eq!(json["parseErrors"].as_array().unwrap().len(), 0);

    Ok(())
}

#[test]
fn test_keys_library_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file(
        "app.jsx",
        r#"const { t } = useTranslation("ns", { keyPrefix: "p" });
t("k");
"#,
    )?;
    test.write_file(".keyscoperc.json", r#"{ "libraries": ["use-translation"] }"#)?;

    let out = run(test.keys_command())?;
    assert!(out.stdout.contains("p.k  (resolved, use-translation, ns ns)"));

    let mut cmd = test.keys_command();
    cmd.args(["--library", "next-intl"]);
    let out = run(cmd)?;
    assert!(out.stdout.contains("  k  (no-prefix, next-intl)"));

    Ok(())
}

#[test]
fn test_keys_with_parse_error_still_succeeds() -> Result<()> {
    let test = CliTest::with_file("broken.tsx", "const = ;")?;
    test.write_file("ok.js", r#"t("fine");"#)?;

    let out = run(test.keys_command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("fine  (no-prefix, i18next)"));
    assert!(
        out.stderr
            .contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );

    Ok(())
}

#[test]
fn test_keys_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("web/app.js", r#"t("inside");"#)?;
    test.write_file("other/app.js", r#"t("outside");"#)?;

    let mut cmd = test.keys_command();
    cmd.args(["--source-root", "web"]);
    let out = run(cmd)?;

    assert!(out.stdout.contains("inside"));
    assert!(!out.stdout.contains("outside"));
    assert!(out.stdout.contains("in 1 of 1 source file\n"));

    Ok(())
}
