use pushlog_activity_models::DisplayItem;

use crate::escape::escape_html;

/// Id of the page element the rendered fragment is appended into.
pub const CONTAINER_ID: &str = "github-container";

/// Render display items to the HTML fragment appended inside the activity
/// container.
///
/// The markup keeps the class names the site's stylesheet targets:
/// `github-commit` per item, `repo-link` on the repository anchor,
/// `timestamp` on the day-level date, with an `<hr>` separator after each
/// item. An empty slice renders an empty fragment.
#[must_use]
pub fn render_items(items: &[DisplayItem]) -> String {
    let mut html = String::new();
    for item in items {
        html.push_str(&render_item(item));
    }
    html
}

fn render_item(item: &DisplayItem) -> String {
    let time = format!("<span class='timestamp'>{}</span>", item.date);

    let repo = format!(
        "<a class='repo-link' target='_blank' href='{}'><h3>{}{time}</h3></a>",
        escape_html(&item.repo_url),
        escape_html(&item.repo_name),
    );

    let message = format!("<p>{}</p>", escape_html(&item.message));

    format!("<div class='github-commit'>{repo}{message}</div><hr>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(repo_name: &str, timestamp: &str, message: &str) -> DisplayItem {
        DisplayItem::new(repo_name, timestamp.parse().unwrap(), message)
    }

    #[test]
    fn test_renders_single_item() {
        let html = render_items(&[item("a/b", "2020-01-01T00:00:00Z", "fix bug")]);

        assert_eq!(
            html,
            "<div class='github-commit'>\
             <a class='repo-link' target='_blank' href='https://github.com/a/b'>\
             <h3>a/b<span class='timestamp'>2020-01-01</span></h3></a>\
             <p>fix bug</p></div><hr>"
        );
    }

    #[test]
    fn test_renders_items_in_order() {
        let html = render_items(&[
            item("a/b", "2020-01-02T00:00:00Z", "first"),
            item("c/d", "2020-01-01T00:00:00Z", "second"),
        ]);

        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<hr>").count(), 2);
    }

    #[test]
    fn test_empty_items_render_empty_fragment() {
        assert_eq!(render_items(&[]), "");
    }

    #[test]
    fn test_date_is_day_level() {
        let html = render_items(&[item("a/b", "2020-05-01T12:00:00Z", "msg")]);
        assert!(html.contains("<span class='timestamp'>2020-05-01</span>"));
    }

    #[test]
    fn test_escapes_commit_message() {
        let html = render_items(&[item(
            "a/b",
            "2020-01-01T00:00:00Z",
            "<script>alert('xss')</script>",
        )]);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escapes_repo_name_in_href() {
        let html = render_items(&[item("a'b", "2020-01-01T00:00:00Z", "msg")]);

        assert!(html.contains("href='https://github.com/a&#39;b'"));
    }

    #[test]
    fn test_rendering_is_pure() {
        let items = [item("a/b", "2020-01-01T00:00:00Z", "fix bug")];
        assert_eq!(render_items(&items), render_items(&items));
    }
}
