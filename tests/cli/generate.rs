use anyhow::Result;
use predicates::prelude::*;

use crate::CliTest;

#[test]
fn creates_catalog_from_templates() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file("html/index.html", "<h1><?msg b ?></h1>\n<p><?msg a ?></p>\n")?;

    test.generate_command("sv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"))
        .stdout(predicate::str::contains("2 messages, 2 new"));

    // two entries ordered a then b, ordinals 1 and 2, both untranslated
    let catalog = test.read_file("i18n/sv.po")?;
    assert_eq!(
        catalog,
        "msgid \"¹a\"\nmsgstr \"\"\n\nmsgid \"²b\"\nmsgstr \"\"\n"
    );
    Ok(())
}

#[test]
fn update_preserves_translations_and_adds_placeholders() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file("html/page.html", "<?msg a ?>\n<?msg c ?>\n")?;
    test.write_file("i18n/sv.po", "msgid \"¹a\"\nmsgstr \"x\"\n")?;

    test.generate_command("sv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"))
        .stdout(predicate::str::contains("2 messages, 1 new"));

    let catalog = test.read_file("i18n/sv.po")?;
    assert_eq!(
        catalog,
        "msgid \"¹a\"\nmsgstr \"x\"\n\nmsgid \"²c\"\nmsgstr \"\"\n"
    );
    Ok(())
}

#[test]
fn stale_entries_are_retained_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file("html/page.html", "<?msg a ?>\n")?;
    test.write_file(
        "i18n/de.po",
        "msgid \"¹a\"\nmsgstr \"x\"\n\nmsgid \"²z\"\nmsgstr \"old\"\n",
    )?;

    test.generate_command("de")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 stale"));

    let catalog = test.read_file("i18n/de.po")?;
    assert!(catalog.contains("msgstr \"old\""));
    assert!(catalog.contains("msgstr \"x\""));
    Ok(())
}

#[test]
fn prune_drops_stale_entries() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file("html/page.html", "<?msg a ?>\n")?;
    test.write_file(
        "i18n/de.po",
        "msgid \"¹a\"\nmsgstr \"x\"\n\nmsgid \"²z\"\nmsgstr \"old\"\n",
    )?;

    let mut cmd = test.generate_command("de");
    cmd.arg("--prune");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 pruned"));

    let catalog = test.read_file("i18n/de.po")?;
    assert_eq!(catalog, "msgid \"¹a\"\nmsgstr \"x\"\n");
    Ok(())
}

#[test]
fn second_run_is_byte_identical() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file(
        "html/index.html",
        "<?msg nav.home ?>\n<?msg nav.out ?>\n<?msg footer.note ?>\n",
    )?;

    test.generate_command("fr-fr").assert().success();
    let first = test.read_file("i18n/fr-fr.po")?;

    test.generate_command("fr-fr").assert().success();
    let second = test.read_file("i18n/fr-fr.po")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn unrecognised_tag_fails_before_touching_the_tree() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file("html/index.html", "<?msg a ?>\n")?;

    test.generate_command("xx-yy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognised language: xx-yy"));

    assert!(!test.root().join("i18n").exists());
    Ok(())
}

#[test]
fn missing_config_fails_before_creating_anything() -> Result<()> {
    let test = CliTest::new()?;
    // no .lingorc written

    test.generate_command("sv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file unavailable"));

    assert!(!test.root().join("i18n").exists());
    Ok(())
}

#[test]
fn missing_root_key_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc", "[web]\nurl=https://example.test\n")?;

    test.generate_command("sv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("`root`"));
    Ok(())
}

#[test]
fn missing_template_directory_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    // no html/ directory

    test.generate_command("sv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("template directory unavailable"));

    assert!(!test.root().join("i18n").exists());
    Ok(())
}

#[test]
fn malformed_catalog_block_is_a_warning_not_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config()?;
    test.write_file("html/page.html", "<?msg a ?>\n")?;
    test.write_file("i18n/sv.po", "msgid \"¹a\"\nmsgstr \"x\"\n\nbroken line\n")?;

    test.generate_command("sv")
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed entry"));

    let catalog = test.read_file("i18n/sv.po")?;
    assert_eq!(catalog, "msgid \"¹a\"\nmsgstr \"x\"\n");
    Ok(())
}
