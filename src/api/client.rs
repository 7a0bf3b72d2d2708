use reqwest::Method;
use serde_json::Value;
use yansi::Paint;
use std::sync::atomic::{AtomicBool, Ordering};

use super::error::ApiError;
use crate::utils::build_query_string;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Render the request as a copy-pasteable curl command.
pub fn curl_command(method: &Method, url: &str, body: Option<&Value>) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    if let Some(d) = body {
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string_pretty(d).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!(
            "{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    parts.join(" ")
}

/// Send one request and fail on transport errors or a non-2xx status.
/// The body is left unread.
pub async fn send_request(
    client: &reqwest::Client,
    api_base_url: &str,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
    params: Option<&[(String, String)]>,
) -> Result<reqwest::Response, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);
    let url_for_log = match params {
        Some(p) if !p.is_empty() => format!("{}?{}", url, build_query_string(p)),
        _ => url.clone(),
    };
    log_output(format!("Request:\n{}", curl_command(&method, &url_for_log, body)));

    let mut req = client.request(method.clone(), &url);
    if let Some(p) = params {
        req = req.query(p);
    }
    if let Some(b) = body {
        req = req.json(b);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        log_output(format!("Response:\n{}", Paint::new(status.to_string()).red()));
        return Err(ApiError::Status {
            method: method.to_string(),
            url: url_for_log,
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

/// Send a request and decode its JSON body. An empty body decodes to `Null`.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
    params: Option<&[(String, String)]>,
) -> Result<Value, ApiError> {
    let resp = send_request(client, api_base_url, method, endpoint, body, params).await?;
    let text = resp.text().await?;
    let result: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text)?
    };

    // Grayed out so the request line stands out
    let json_str = serde_json::to_string(&result).unwrap_or_else(|_| format!("{:?}", result));
    log_output(format!("Response:\n{}", Paint::new(json_str).rgb(100, 100, 100)));

    Ok(result)
}

/// Send a request whose response body the caller ignores.
pub async fn api_call_discard(
    client: &reqwest::Client,
    api_base_url: &str,
    method: Method,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<(), ApiError> {
    let resp = send_request(client, api_base_url, method, endpoint, body, None).await?;
    log_output(format!("Response:\n{}", Paint::new(resp.status().to_string()).rgb(100, 100, 100)));
    Ok(())
}
