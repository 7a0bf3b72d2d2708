/// Host part of a base URL, shown in the page header.
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = if let Some(idx) = s.find("://") { &s[idx + 3..] } else { s };
    s.split('/').next().unwrap_or(s).to_string()
}
