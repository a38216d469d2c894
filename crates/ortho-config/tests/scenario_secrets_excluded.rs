//! Config files that inline credential-looking values must be refused
//! outright — the load fails before any field is read.

use std::io::Write;

use ortho_config::OrthoConfig;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn config_with_pasted_jwt_is_refused() {
    let f = write_config(
        "api:\n  base_url: https://admin.example.net\n  token: eyJhbGciOiJIUzI1NiJ9.e30.x\n",
    );
    let err = OrthoConfig::load(Some(f.path())).unwrap_err();
    assert!(err.to_string().contains("config rejected"), "{err}");
}

#[test]
fn config_with_stripe_style_key_is_refused() {
    let f = write_config("payment_key: sk_live_abcdef\n");
    assert!(OrthoConfig::load(Some(f.path())).is_err());
}

#[test]
fn clean_config_loads_and_merges_with_defaults() {
    let f = write_config("api:\n  base_url: https://admin.example.net\n");
    let cfg = OrthoConfig::load(Some(f.path())).unwrap();
    assert_eq!(cfg.api.base_url, "https://admin.example.net");
    // Unspecified sections keep their defaults.
    assert_eq!(cfg.api.timeout_secs, 10);
}
