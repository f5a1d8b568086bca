use super::*;

#[test]
fn defaults_have_no_timeout() {
    let config = PortfolioConfig::default();
    assert_eq!(config.submit_timeout, None);
    assert_eq!(config.status_dismiss_ms, 5000);
    assert_eq!(config.theme_storage_key, "theme");
}

#[test]
fn unset_values_keep_defaults() {
    assert_eq!(PortfolioConfig::from_values(None, None, None), PortfolioConfig::default());
}

#[test]
fn explicit_values_override_defaults() {
    let config = PortfolioConfig::from_values(Some("https://forms.example/abc"), Some("8000"), Some("3000"));
    assert_eq!(config.form_endpoint, "https://forms.example/abc");
    assert_eq!(config.submit_timeout, Some(Duration::from_millis(8000)));
    assert_eq!(config.status_dismiss_ms, 3000);
}

#[test]
fn zero_timeout_means_none() {
    let config = PortfolioConfig::from_values(None, Some("0"), None);
    assert_eq!(config.submit_timeout, None);
}

#[test]
fn garbage_values_fall_back() {
    let config = PortfolioConfig::from_values(Some("   "), Some("soon"), Some("-1"));
    assert_eq!(config, PortfolioConfig::default());
}
