//! HTML rendering for the activity listing.

use crate::domain::FormattedRecord;

/// Renders the `GET /webhook/` page.
#[must_use]
pub fn render_listing(records: &[FormattedRecord]) -> String {
    let mut items = String::new();

    if records.is_empty() {
        items.push_str(r#"<p class="empty">No repository activity recorded yet.</p>"#);
    } else {
        items.push_str("<ul class=\"feed\">\n");
        for record in records {
            items.push_str(&format!(
                r#"    <li id="record-{id}"><span class="record-id">{id}</span> {doc}</li>
"#,
                id = record.id,
                doc = html_escape(&record.formatted_doc),
            ));
        }
        items.push_str("</ul>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="15">
<title>GitHub activity</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; max-width: 860px; margin: 40px auto; color: #24292f; }}
.feed {{ list-style: none; padding: 0; }}
.feed li {{ padding: 10px 12px; border-bottom: 1px solid #d0d7de; }}
.record-id {{ font-family: monospace; font-size: 11px; color: #8c959f; margin-right: 8px; }}
.empty {{ color: #888; text-align: center; padding: 40px; }}
</style>
</head>
<body>
<h1>GitHub activity</h1>
{items}
</body>
</html>"#
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordId;

    #[test]
    fn empty_listing_has_placeholder() {
        let html = render_listing(&[]);
        assert!(html.contains("No repository activity recorded yet."));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn records_are_escaped_and_ordered() {
        let first = FormattedRecord {
            id: RecordId::generate(),
            formatted_doc: r#""alice" pushed to "main" on T0"#.to_string(),
        };
        let second = FormattedRecord {
            id: RecordId::generate(),
            formatted_doc: "<script>".to_string(),
        };
        let html = render_listing(&[first.clone(), second.clone()]);

        assert!(html.contains("&quot;alice&quot; pushed to &quot;main&quot; on T0"));
        assert!(html.contains("&lt;script&gt;"));
        let a = html.find(&first.id.to_string()).unwrap_or(usize::MAX);
        let b = html.find(&second.id.to_string()).unwrap_or(0);
        assert!(a < b);
    }
}
