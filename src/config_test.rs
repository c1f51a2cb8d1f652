use super::*;
use std::collections::HashMap;

fn parse(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = parse(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied() {
    let cfg = parse(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1"), ("SITE_ROOT", "/srv/site")]).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = parse(&[("PORT", "  "), ("SITE_ROOT", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_errors() {
    assert_eq!(parse(&[("PORT", "http")]).unwrap_err(), ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(parse(&[("PORT", "0")]).unwrap_err(), ConfigError::InvalidPort("0".to_owned()));
    assert_eq!(parse(&[("PORT", "70000")]).unwrap_err(), ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn invalid_bind_addr_errors() {
    let err = parse(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR 'localhost'");
}
