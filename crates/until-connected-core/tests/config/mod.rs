use std::{io::Write, time::Duration};

use tempfile::NamedTempFile;
use until_connected_core::{CfgOverrides, Poller, Target};

fn config_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn path(file: &NamedTempFile) -> Option<String> {
    Some(file.path().to_string_lossy().into_owned())
}

#[test]
fn load_from_file() {
    let file = config_file(
        r#"
        target = "http://127.0.0.1:56789"
        max_retries = 8
        connection_interval = 250
        "#,
    );

    let poller = Poller::builder()
        .with_config_file(path(&file))
        .prepare()
        .unwrap();

    assert_eq!(
        poller.target(),
        &Target::Address("http://127.0.0.1:56789".to_string())
    );
    assert_eq!(poller.policy().max_retries(), 8);
    assert_eq!(
        poller.policy().connection_interval(),
        Some(Duration::from_millis(250))
    );
    assert_eq!(poller.policy().connect_timeout(), None);
}

#[test]
fn overrides_win_over_file() {
    let file = config_file(
        r#"
        target = 3000
        max_retries = 8
        connection_interval = 250
        "#,
    );

    let overrides = CfgOverrides::builder().max_retries(2).build();

    let poller = Poller::builder()
        .with_config_file(path(&file))
        .with_overrides(overrides)
        .prepare()
        .unwrap();

    assert_eq!(poller.target(), &Target::Port(3000));
    assert_eq!(poller.policy().max_retries(), 2);
    assert_eq!(
        poller.policy().connection_interval(),
        Some(Duration::from_millis(250))
    );
}

#[test]
fn target_override_replaces_file_target() {
    let file = config_file("target = \"http://127.0.0.1:56789\"");

    let overrides = CfgOverrides::builder().target(Target::Port(4000)).build();

    let poller = Poller::builder()
        .with_config_file(path(&file))
        .with_overrides(overrides)
        .prepare()
        .unwrap();

    assert_eq!(poller.target(), &Target::Port(4000));
}

#[test]
fn missing_file_is_an_error() {
    let result = Poller::builder()
        .with_config_file(Some("/nonexistent/until-connected.toml".to_string()))
        .prepare();

    assert!(result.is_err());
}
