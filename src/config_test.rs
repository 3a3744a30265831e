use std::collections::HashMap;

use super::*;

fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config(&[]).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            backend_url: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            static_dir: None,
        }
    );
}

#[test]
fn reads_all_variables() {
    let cfg = config(&[
        ("PORT", "8080"),
        ("ASSET_API_URL", "https://assets.example.com/"),
        ("ASSET_API_CONNECT_TIMEOUT_SECS", "3"),
        ("ASSET_STATIC_DIR", "/srv/static"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url.as_deref(), Some("https://assets.example.com"));
    assert_eq!(cfg.connect_timeout_secs, 3);
    assert_eq!(cfg.static_dir, Some(PathBuf::from("/srv/static")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config(&[("PORT", "  "), ("ASSET_API_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
}

#[test]
fn invalid_port_is_rejected() {
    let err = config(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn backend_url_requires_http_scheme() {
    let err = config(&[("ASSET_API_URL", "localhost:5000")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "ASSET_API_URL", value: "localhost:5000".to_owned() });
}

#[test]
fn invalid_timeout_is_rejected() {
    assert!(config(&[("ASSET_API_CONNECT_TIMEOUT_SECS", "-1")]).is_err());
}
