//! Shared fixtures for coin form tests.

#![allow(dead_code)]

use coin_admin::models::user::UserOption;
use regex::Regex;

pub const APP_NAME: &str = "Test Admin";

/// Users in a deliberately non-sorted order, so order preservation is visible.
pub fn sample_users() -> Vec<UserOption> {
    vec![
        UserOption::new(7, "Zoe Park"),
        UserOption::new(2, "Adam Li"),
        UserOption::new(15, "Maria Santos"),
    ]
}

/// Inner markup of the `<select>` with the given name.
pub fn select_block<'a>(html: &'a str, name: &str) -> &'a str {
    let pattern = format!(r#"(?s)<select [^>]*name="{}"[^>]*>(.*?)</select>"#, regex::escape(name));
    let re = Regex::new(&pattern).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .unwrap_or_else(|| panic!("select '{name}' not found in HTML"))
}

/// (value, label) pairs of the selectable options, prompt option excluded.
pub fn option_pairs(select_html: &str) -> Vec<(String, String)> {
    let re = Regex::new(r#"<option value="([^"]+)">([^<]*)</option>"#)
        .expect("Failed to compile regex");
    re.captures_iter(select_html)
        .map(|cap| (cap[1].to_string(), cap[2].to_string()))
        .collect()
}

/// The opening tag of the widget for the given field name.
pub fn widget_tag<'a>(html: &'a str, name: &str) -> &'a str {
    let pattern = format!(r#"<(?:input|select|textarea) [^>]*name="{}"[^>]*>"#, regex::escape(name));
    let re = Regex::new(&pattern).expect("Failed to compile regex");
    re.find(html)
        .map(|m| m.as_str())
        .unwrap_or_else(|| panic!("widget '{name}' not found in HTML"))
}
