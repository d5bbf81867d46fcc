// String hygiene for generated fragments. Feed values end up inside both
// text nodes and attribute values, so everything goes through `escape`.

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Placeholder image served when a feed image fails to load.
pub fn placeholder(size: &str) -> String {
    format!("https://via.placeholder.com/{size}/cccccc/666666?text=?")
}

/// Dark placeholder variant showing the first letter of `name`.
pub fn placeholder_initial(size: &str, name: &str) -> String {
    let initial = name.chars().next().unwrap_or('?');
    format!(
        "https://via.placeholder.com/{size}/374151/9CA3AF?text={}",
        percent_encode_char(initial)
    )
}

fn percent_encode_char(ch: char) -> String {
    if ch.is_ascii_alphanumeric() {
        return ch.to_string();
    }
    let mut buf = [0u8; 4];
    ch.encode_utf8(&mut buf)
        .as_bytes()
        .iter()
        .map(|byte| format!("%{byte:02X}"))
        .collect()
}
