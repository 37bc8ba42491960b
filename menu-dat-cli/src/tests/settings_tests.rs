use super::*;

#[test]
fn empty_file_uses_defaults() {
    let settings = Settings::from_toml("").unwrap();
    assert_eq!(settings, Settings::default());
    assert!(settings.save.backup);
    assert!(!settings.save.proceed_without_backup);
    assert!(settings.translations.is_empty());
}

#[test]
fn parses_all_sections() {
    let settings = Settings::from_toml(
        r#"
[paths]
data_dir = "/mnt/sd/openMenu"
backup_dir = "/tmp/menu-backups"

[save]
backup = false

[[translations.display]]
product = "T-9999N"
date = "19991231"
corrected = "T9998N"

[[translations.display]]
product = "MK-51000"
name_contains = "demo"
corrected = "MK5100050"

[translations.artwork]
T9998N50 = "T9998N"
"#,
    )
    .unwrap();

    assert_eq!(
        settings.paths.data_dir.as_deref(),
        Some(Path::new("/mnt/sd/openMenu"))
    );
    assert!(!settings.save.backup);
    assert!(!settings.save.proceed_without_backup);
    assert_eq!(settings.translations.display.len(), 2);
    assert_eq!(
        settings.translations.display[1].name_contains.as_deref(),
        Some("demo")
    );
    assert_eq!(
        settings.translations.artwork.get("T9998N50").map(String::as_str),
        Some("T9998N")
    );
    assert_eq!(
        settings.backup_dir(Path::new("/data")),
        PathBuf::from("/tmp/menu-backups")
    );
}

#[test]
fn backup_dir_defaults_under_data_dir() {
    let settings = Settings::default();
    assert_eq!(
        settings.backup_dir(Path::new("/data")),
        PathBuf::from("/data/backup")
    );
}

#[test]
fn data_dir_priority() {
    let mut settings = Settings::default();
    settings.paths.data_dir = Some(PathBuf::from("/from/settings"));

    let (dir, source) = settings.resolve_data_dir(Some(PathBuf::from("/from/cli")));
    assert_eq!(dir, PathBuf::from("/from/cli"));
    assert_eq!(source, DataDirSource::CommandLine);

    let (dir, source) = settings.resolve_data_dir(None);
    assert_eq!(dir, PathBuf::from("/from/settings"));
    assert_eq!(source, DataDirSource::Settings);

    settings.paths.data_dir = None;
    let (_, source) = settings.resolve_data_dir(None);
    assert_eq!(source, DataDirSource::CurrentDir);
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[save]\nbackup = \"sometimes\"\n").unwrap();

    assert_eq!(Settings::load_from(&path), Settings::default());
    assert_eq!(
        Settings::load_from(&dir.path().join("missing.toml")),
        Settings::default()
    );
}

#[test]
fn save_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");

    let mut settings = Settings::default();
    settings.paths.data_dir = Some(PathBuf::from("/mnt/sd"));
    settings.save.proceed_without_backup = true;
    settings
        .translations
        .artwork
        .insert("T1".to_string(), "T2".to_string());
    settings.save_to(&path).unwrap();

    assert!(!path.with_extension("toml.tmp").exists());
    assert_eq!(Settings::load_from(&path), settings);
}
