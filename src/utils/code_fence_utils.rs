use regex::Regex;

/// Drops a leading ```` ```lang ```` line and a trailing ```` ``` ```` fence.
pub fn strip_code_fences(code: &str) -> String {
    let regex = Regex::new(r"(?s)^```.*?\n|\n?```$").unwrap();
    regex.replace_all(code.trim(), "").to_string()
}
