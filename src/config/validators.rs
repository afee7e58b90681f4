//! 配置值验证模块

use url::Url;

use super::AppConfig;

/// Strip surrounding whitespace and trailing slashes
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// 验证 API 基础地址：必须是 http:// 或 https://，且有主机名
pub fn validate_base_url(base_url: &str) -> Result<(), String> {
    let parsed =
        Url::parse(base_url).map_err(|e| format!("Invalid api.base_url '{}': {}", base_url, e))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(format!(
                "Invalid api.base_url scheme: {}. Only http and https are allowed",
                other
            ));
        }
    }

    if parsed.host_str().is_none_or(|h| h.is_empty()) {
        return Err(format!("api.base_url '{}' has no host", base_url));
    }

    Ok(())
}

pub fn validate_config(config: &AppConfig) -> Result<(), String> {
    validate_base_url(&config.api.base_url)?;

    if config.api.timeout_secs == 0 {
        return Err("api.timeout_secs must be greater than 0".to_string());
    }
    if config.view.refresh_interval_ms == 0 {
        return Err("view.refresh_interval_ms must be greater than 0".to_string());
    }
    if config.view.display_limit == 0 {
        return Err("view.display_limit must be greater than 0".to_string());
    }
    if config.view.tick_rate_ms == 0 {
        return Err("view.tick_rate_ms must be greater than 0".to_string());
    }

    match config.logging.format.as_str() {
        "text" | "json" => Ok(()),
        other => Err(format!(
            "Invalid logging.format: '{}'. Valid: text, json",
            other
        )),
    }
}
