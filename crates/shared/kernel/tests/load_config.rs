use phub_domain::config::EdgeConfig;
use phub_kernel::config::load_config;
use std::fs;

#[test]
fn missing_file_boots_on_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg: EdgeConfig =
        load_config(Some(dir.path().join("edge"))).expect("defaults without a file");
    assert_eq!(cfg.server.port, 4680);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("edge.toml");
    fs::write(
        &path,
        r#"
            [server]
            port = 9090

            [tenancy]
            base_domain = "playbook.aisolutionhub.co.uk"
        "#,
    )
    .expect("write config");

    let cfg: EdgeConfig = load_config(Some(dir.path().join("edge"))).expect("load config");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.tenancy.base_domain.as_deref(), Some("playbook.aisolutionhub.co.uk"));
    // Untouched sections keep defaults.
    assert!(cfg.tenancy.excluded_prefixes.contains(&"/assets".to_owned()));
}
