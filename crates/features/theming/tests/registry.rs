use phub_domain::config::ClientsConfig;
use phub_domain::site::SectionSet;
use phub_domain::tenant::ClientId;
use phub_theming::SiteRegistry;
use std::fs;

fn registry_from(files: &[(&str, &str)]) -> SiteRegistry {
    let dir = tempfile::tempdir().expect("tempdir");
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("write site file");
    }
    SiteRegistry::load(&ClientsConfig { dir: dir.path().to_path_buf() })
}

#[test]
fn loads_client_files_keyed_by_stem() {
    let registry = registry_from(&[(
        "acme.toml",
        r#"
            brand_name = "Acme Playbooks"
            has_developer_track = true
            sections = ["overview", "setup", "tracks"]
        "#,
    )]);

    assert_eq!(registry.len(), 1);
    let site = registry.resolve(&ClientId::from("acme"));
    assert_eq!(site.brand_name, "Acme Playbooks");
    assert!(site.has_developer_track);
    assert_eq!(site.sections, SectionSet::OVERVIEW | SectionSet::SETUP | SectionSet::TRACKS);
}

#[test]
fn unknown_client_falls_back_to_default() {
    let registry = registry_from(&[("acme.toml", "brand_name = \"Acme\"")]);

    let site = registry.resolve(&ClientId::from("ghost"));
    assert_eq!(site.brand_name, "Playbook Hub");
    assert_eq!(site.sections, SectionSet::ALL);
}

#[test]
fn deployed_default_file_overrides_the_built_in_record() {
    let registry = registry_from(&[("default.toml", "brand_name = \"House Brand\"")]);

    assert_eq!(registry.resolve(&ClientId::default_id()).brand_name, "House Brand");
    // Unknown ids get the same record.
    assert_eq!(registry.resolve(&ClientId::from("ghost")).brand_name, "House Brand");
}

#[test]
fn unreadable_files_are_skipped() {
    let registry = registry_from(&[
        ("acme.toml", "brand_name = \"Acme\""),
        ("broken.toml", "brand_name = [this is not toml"),
        ("notes.txt", "not a site file"),
    ]);

    assert_eq!(registry.len(), 1);
    assert!(registry.resolve(&ClientId::from("broken")).brand_name.contains("Playbook"));
}

#[test]
fn missing_directory_serves_defaults() {
    let registry =
        SiteRegistry::load(&ClientsConfig { dir: std::path::PathBuf::from("/nonexistent/phub") });

    assert_eq!(registry.len(), 0);
    assert_eq!(registry.resolve(&ClientId::from("anyone")).brand_name, "Playbook Hub");
}

#[test]
fn resolution_is_deterministic() {
    let registry = registry_from(&[("acme.toml", "brand_name = \"Acme\"")]);
    let id = ClientId::from("acme");

    let first = registry.resolve(&id) as *const _;
    let second = registry.resolve(&id) as *const _;
    assert_eq!(first, second, "same id must resolve to the same record");
}
