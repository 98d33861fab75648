//! Message rendering for notifications (Telegram HTML).

use crate::domain::{CatalogItem, Notification};

/// Maximum length of an item alert.
pub const MAX_ALERT_CHARS: usize = 1000;

/// Escaped length limits for the variable parts of an item alert. Together
/// with the fixed lines they stay under [`MAX_ALERT_CHARS`].
const MAX_NAME_CHARS: usize = 300;
const MAX_FIELD_CHARS: usize = 80;
const MAX_URL_CHARS: usize = 300;

/// A rendered message, ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Image to attach; `text` becomes its caption.
    pub image_url: Option<String>,
}

/// Render a notification.
///
/// `destination` is the masked destination code shown on item alerts.
#[must_use]
pub fn render(notification: &Notification, destination: &str) -> Rendered {
    match notification {
        Notification::WatcherOnline { destination } => Rendered {
            text: format!(
                "🟢 <b>Stock Watcher Online</b>\n\
                 Monitoring destination <b>{}</b>.\n\
                 New deliverable drops will be posted here in real time. 🔥",
                escape_html(destination)
            ),
            image_url: None,
        },
        Notification::StockIncreased { previous, current } => Rendered {
            text: stock_update(*previous, *current),
            image_url: None,
        },
        Notification::ItemAvailable { item, cod_eligible } => Rendered {
            text: item_alert(item, *cod_eligible, destination),
            image_url: item.image_url.clone().filter(|url| !url.is_empty()),
        },
    }
}

fn stock_update(previous: u64, current: u64) -> String {
    let delta = current.saturating_sub(previous);
    format!(
        "📊 <b>Stock Update</b>\n\
         Total products now: <b>{current}</b> (▲ +{delta})\n\
         🔥 New drops detected. Checking deliverable items…"
    )
}

fn item_alert(item: &CatalogItem, cod_eligible: Option<bool>, destination: &str) -> String {
    let name = if item.name.is_empty() {
        "N/A"
    } else {
        item.name.as_str()
    };
    let price = item.price.as_deref().unwrap_or("N/A");
    let cod = match cod_eligible {
        Some(true) => "💵 COD: Yes",
        Some(false) => "💵 COD: No",
        None => "💵 COD: ?",
    };

    let mut lines = vec![
        "🔥 <b>IN STOCK</b>".to_string(),
        format!("<b>{}</b>", escape_clipped(name, MAX_NAME_CHARS)),
        String::new(),
        format!("💰 Price: {}", escape_clipped(price, MAX_FIELD_CHARS)),
    ];
    if let Some(category) = item.category.as_deref().filter(|c| !c.is_empty()) {
        lines.push(format!(
            "📦 Category: {}",
            escape_clipped(category, MAX_FIELD_CHARS)
        ));
    }
    lines.push(String::new());
    lines.push("🚚 Deliverable ✅".to_string());
    lines.push(cod.to_string());
    lines.push(String::new());
    lines.push(format!(
        "📍 Destination: {}",
        escape_clipped(destination, MAX_FIELD_CHARS)
    ));
    lines.push(String::new());
    lines.push(format!(
        "🔗 {}",
        escape_clipped(item.url.as_deref().unwrap_or("N/A"), MAX_URL_CHARS)
    ));

    fit_lines(lines.into_iter().filter(|line| !line.is_empty()), MAX_ALERT_CHARS)
}

/// Join lines while the message stays within `max_chars`.
///
/// Every line is balanced on its own, so cutting between lines never leaves
/// an open tag or a split entity.
fn fit_lines(lines: impl Iterator<Item = String>, max_chars: usize) -> String {
    let mut message = String::new();
    let mut used = 0;
    for line in lines {
        let sep = usize::from(!message.is_empty());
        let len = line.chars().count();
        if used + sep + len > max_chars {
            break;
        }
        if sep == 1 {
            message.push('\n');
        }
        message.push_str(&line);
        used += sep + len;
    }
    message
}

/// Escape `s` and clip the escaped form to `max_chars`.
///
/// Clipping happens between escaped characters, so an entity is kept or
/// dropped whole. A clipped value ends in `…`.
fn escape_clipped(s: &str, max_chars: usize) -> String {
    let escaped = escape_html(s);
    if escaped.chars().count() <= max_chars {
        return escaped;
    }

    let budget = max_chars.saturating_sub(1);
    let mut clipped = String::new();
    let mut used = 0;
    for c in s.chars() {
        let piece = escape_char(c);
        let len = piece.chars().count();
        if used + len > budget {
            break;
        }
        clipped.push_str(&piece);
        used += len;
    }
    clipped.push('…');
    clipped
}

fn escape_char(c: char) -> String {
    match c {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        _ => c.to_string(),
    }
}

/// Escape text for Telegram's HTML parse mode.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem::new("443327217017")
            .with_name("Relaxed <Fit> Tee")
            .with_price("₹499")
            .with_category("T-Shirts")
            .with_url("https://shop.example/p/443327217017")
    }

    #[test]
    fn stock_update_shows_total_and_delta() {
        let rendered = render(
            &Notification::StockIncreased {
                previous: 100,
                current: 105,
            },
            "8****0",
        );
        assert!(rendered.text.contains("<b>105</b>"));
        assert!(rendered.text.contains("+5"));
        assert!(rendered.image_url.is_none());
    }

    #[test]
    fn item_alert_escapes_and_masks() {
        let rendered = render(
            &Notification::ItemAvailable {
                item: item(),
                cod_eligible: Some(false),
            },
            "8****0",
        );
        assert!(rendered.text.contains("Relaxed &lt;Fit&gt; Tee"));
        assert!(rendered.text.contains("💵 COD: No"));
        assert!(rendered.text.contains("📍 Destination: 8****0"));
        assert!(rendered.text.contains("📦 Category: T-Shirts"));
        assert!(!rendered.text.contains("\n\n"));
    }

    #[test]
    fn unknown_cod_renders_question_mark() {
        let rendered = render(
            &Notification::ItemAvailable {
                item: item(),
                cod_eligible: None,
            },
            "8****0",
        );
        assert!(rendered.text.contains("💵 COD: ?"));
    }

    #[test]
    fn item_with_image_is_rendered_as_caption() {
        let rendered = render(
            &Notification::ItemAvailable {
                item: item().with_image("https://img.example/a.jpg"),
                cod_eligible: Some(true),
            },
            "8****0",
        );
        assert_eq!(rendered.image_url.as_deref(), Some("https://img.example/a.jpg"));
    }

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn item_url_query_is_escaped() {
        let rendered = render(
            &Notification::ItemAvailable {
                item: item().with_url("https://shop.example/p/1?color=red&size=m"),
                cod_eligible: Some(true),
            },
            "8****0",
        );
        assert!(rendered
            .text
            .contains("🔗 https://shop.example/p/1?color=red&amp;size=m"));
        assert!(!rendered.text.contains("&size"));
    }

    #[test]
    fn long_alerts_are_truncated_on_char_boundary() {
        let long_name = "é".repeat(2000);
        let rendered = render(
            &Notification::ItemAvailable {
                item: item().with_name(long_name),
                cod_eligible: None,
            },
            "8****0",
        );
        assert!(rendered.text.chars().count() <= MAX_ALERT_CHARS);
        assert!(rendered.text.contains("…</b>"));
        assert_eq!(count(&rendered.text, "<b>"), count(&rendered.text, "</b>"));
        assert!(rendered.text.contains("📍 Destination: 8****0"));
        assert!(rendered.text.contains("🔗 https://shop.example/p/443327217017"));
    }

    #[test]
    fn clipping_never_splits_an_entity() {
        let rendered = render(
            &Notification::ItemAvailable {
                item: item().with_name("&".repeat(1200)),
                cod_eligible: None,
            },
            "8****0",
        );
        let name_line = rendered
            .text
            .lines()
            .nth(1)
            .unwrap_or_default()
            .to_string();
        let inner = name_line
            .trim_start_matches("<b>")
            .trim_end_matches("</b>")
            .trim_end_matches('…');
        assert!(!inner.is_empty());
        assert_eq!(inner.len() % "&amp;".len(), 0);
        assert_eq!(inner.replace("&amp;", ""), "");
        assert_eq!(count(&rendered.text, "<b>"), count(&rendered.text, "</b>"));
    }

    #[test]
    fn oversized_lines_are_dropped_whole() {
        let lines = ["<b>a</b>", "<b>bbbbbbbbbb</b>"].map(String::from);
        assert_eq!(fit_lines(lines.into_iter(), 12), "<b>a</b>");
    }
}
