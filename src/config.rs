use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const USERS_ENDPOINT: &str = "/api/users";

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZES: [u32; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Initial page size; values outside [`PAGE_SIZES`] fall back to the default.
pub fn get_default_page_size() -> u32 {
    env::var("USERS_PAGE_SIZE")
        .ok()
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|n| is_valid_page_size(*n))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

pub fn is_valid_page_size(limit: u32) -> bool {
    PAGE_SIZES.contains(&limit)
}

/// `PAGE_SIZES` as "5, 10, 20, 50".
pub fn page_sizes_label() -> String {
    PAGE_SIZES.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
