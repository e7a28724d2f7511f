use clap::Parser;

use rshttpd::config::{Cli, Config};

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:4221");
    assert_eq!(cfg.server.backlog, 128);
    assert_eq!(cfg.files.directory.to_str(), Some("."));
}

#[test]
fn test_config_yaml_parsing() {
    let raw = "
server:
  listen_addr: 127.0.0.1:9000
  backlog: 16
files:
  directory: /srv/files
";
    let cfg: Config = serde_yaml::from_str(raw).unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:9000");
    assert_eq!(cfg.server.backlog, 16);
    assert_eq!(cfg.files.directory.to_str(), Some("/srv/files"));
}

#[test]
fn test_config_yaml_partial_keeps_defaults() {
    let cfg: Config = serde_yaml::from_str("files:\n  directory: /data\n").unwrap();
    assert_eq!(cfg.files.directory.to_str(), Some("/data"));
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:4221");
}

#[test]
fn test_config_directory_from_cli() {
    let cli = Cli::parse_from(["rshttpd", "--directory", "/tmp/store"]);
    let cfg = Config::load(cli).unwrap();
    assert_eq!(cfg.files.directory.to_str(), Some("/tmp/store"));
}

#[test]
fn test_config_directory_defaults_to_current_dir() {
    let cli = Cli::parse_from(["rshttpd"]);
    let cfg = Config::load(cli).unwrap();
    assert_eq!(cfg.files.directory.to_str(), Some("."));
}

#[test]
fn test_config_listen_addr_from_env() {
    unsafe {
        std::env::set_var("LISTEN", "0.0.0.0:3000");
    }
    let cfg = Config::load(Cli::parse_from(["rshttpd"])).unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr, cfg2.server.listen_addr);
    assert_eq!(cfg1.files.directory, cfg2.files.directory);
}
