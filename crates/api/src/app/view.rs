//! HTML page rendering.
//!
//! The page is a pure function of the session and the notices raised by the
//! current request: handlers call [`render_page`] after every mutation.

use magazyn_infra::Session;
use magazyn_inventory::Inventory;

use crate::app::notice::Notice;

pub const TITLE: &str = "🛒 Simple Inventory";
pub const CAPTION: &str = "Manage product names, without quantities or prices.";
pub const ADD_HEADER: &str = "➕ Add a New Product";
pub const INVENTORY_HEADER: &str = "📦 Current Inventory";
pub const ADD_BUTTON: &str = "Add to Inventory";
pub const REMOVE_BUTTON: &str = "Remove";
pub const EMPTY_MESSAGE: &str = "The inventory is currently empty. Add your first product above!";

pub fn render_page(session: &Session, notices: &[Notice]) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(TITLE)));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(TITLE)));
    html.push_str(&format!("<p class=\"caption\">{}</p>\n", escape(CAPTION)));

    for notice in notices {
        html.push_str(&render_notice(notice));
    }

    html.push_str(&render_add_section(&session.product_input));
    html.push_str("<hr>\n");
    html.push_str(&render_inventory_section(&session.inventory));

    html.push_str("<form method=\"post\" action=\"/session/end\" class=\"end-session\">");
    html.push_str("<button type=\"submit\">End session</button></form>\n");
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_notice(notice: &Notice) -> String {
    format!(
        "<div class=\"notice notice-{level}\" role=\"status\">{message}</div>\n",
        level = notice.level.as_str(),
        message = escape(&notice.message),
    )
}

fn render_add_section(product_input: &str) -> String {
    format!(
        concat!(
            "<section id=\"add\">\n<h2>{header}</h2>\n",
            "<form method=\"post\" action=\"/add\">\n",
            "<label for=\"product_input\">Product name:</label>\n",
            "<input type=\"text\" id=\"product_input\" name=\"product_input\" value=\"{value}\">\n",
            "<button type=\"submit\">{button}</button>\n",
            "</form>\n</section>\n",
        ),
        header = escape(ADD_HEADER),
        value = escape(product_input),
        button = escape(ADD_BUTTON),
    )
}

fn render_inventory_section(inventory: &Inventory) -> String {
    let mut html = format!(
        "<section id=\"inventory\">\n<h2>{}</h2>\n",
        escape(INVENTORY_HEADER)
    );

    if inventory.is_empty() {
        html.push_str(&format!(
            "<div class=\"notice notice-info\">{}</div>\n",
            escape(EMPTY_MESSAGE)
        ));
    } else {
        html.push_str("<ul class=\"items\">\n");
        for (index, item) in inventory.items().iter().enumerate() {
            html.push_str(&render_row(index, item));
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</section>\n");
    html
}

// Rows are keyed by position so duplicate names get distinct controls.
fn render_row(index: usize, item: &str) -> String {
    let name = escape(item);
    format!(
        concat!(
            "<li id=\"row-{index}\"><strong>{name}</strong>",
            "<form method=\"post\" action=\"/remove/{index}\">",
            "<input type=\"hidden\" name=\"name\" value=\"{name}\">",
            "<button type=\"submit\" id=\"del-{index}\">{button}</button>",
            "</form></li>\n",
        ),
        index = index,
        name = name,
        button = escape(REMOVE_BUTTON),
    )
}

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

const STYLE: &str = "<style>\n\
body { font-family: sans-serif; margin: 2rem auto; max-width: 40rem; }\n\
.caption { color: #666; }\n\
.notice { padding: .5rem .75rem; border-radius: .25rem; margin: .5rem 0; }\n\
.notice-success { background: #e6f4ea; }\n\
.notice-info { background: #e8f0fe; }\n\
.notice-warning { background: #fef7e0; }\n\
.notice-error { background: #fce8e6; }\n\
.items { list-style: none; padding: 0; }\n\
.items li { display: flex; justify-content: space-between; padding: .25rem 0; }\n\
.items form, .end-session { display: inline; }\n\
</style>\n";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use magazyn_core::{DomainError, SessionId};

    fn session() -> Session {
        Session::start(SessionId::new(), Utc::now())
    }

    #[test]
    fn renders_seed_rows_in_order() {
        let html = render_page(&session(), &[]);

        let hammer = html.find("<strong>Młotek</strong>").unwrap();
        let driver = html.find("<strong>Śrubokręt</strong>").unwrap();
        let screws = html.find("<strong>Wkręty M4</strong>").unwrap();
        assert!(hammer < driver && driver < screws);
        assert!(html.contains("action=\"/remove/2\""));
        assert!(html.contains(ADD_BUTTON));
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn rendering_is_idempotent() {
        let s = session();
        assert_eq!(render_page(&s, &[]), render_page(&s, &[]));
    }

    #[test]
    fn empty_inventory_shows_invitation() {
        let mut s = session();
        for name in ["Młotek", "Śrubokręt", "Wkręty M4"] {
            s.inventory.remove(name).unwrap();
        }
        let html = render_page(&s, &[]);
        assert!(html.contains(EMPTY_MESSAGE));
        assert!(!html.contains("class=\"items\""));
    }

    #[test]
    fn duplicate_names_get_distinct_controls() {
        let mut s = session();
        s.inventory.add("Młotek").unwrap();
        let html = render_page(&s, &[]);

        assert!(html.contains("id=\"del-0\""));
        assert!(html.contains("id=\"del-3\""));
        assert_eq!(html.matches("<strong>Młotek</strong>").count(), 2);
    }

    #[test]
    fn notices_and_user_text_are_escaped() {
        let mut s = session();
        s.inventory.add("<b>\"Nóż\"</b>").unwrap();
        let html = render_page(&s, &[Notice::added("<b>\"Nóż\"</b>")]);

        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;&quot;Nóż&quot;&lt;/b&gt;"));
        assert!(html.contains(
            "<div class=\"notice notice-success\" role=\"status\">Added: &lt;b&gt;"
        ));
    }

    #[test]
    fn page_without_notices_has_no_status_element() {
        let html = render_page(&session(), &[]);
        assert!(!html.contains("role=\"status\""));
    }

    #[test]
    fn each_notice_renders_once_with_its_level() {
        let notices = [
            Notice::removed("Piła"),
            Notice::for_error(&DomainError::validation("x")),
        ];
        let html = render_page(&session(), &notices);

        assert_eq!(html.matches("role=\"status\"").count(), 2);
        assert!(html.contains(
            "<div class=\"notice notice-info\" role=\"status\">Removed: Piła</div>"
        ));
        assert!(html.contains("<div class=\"notice notice-warning\" role=\"status\">"));
    }

    #[test]
    fn bound_input_value_is_prefilled() {
        let mut s = session();
        s.product_input = "Piła".to_string();
        assert!(render_page(&s, &[]).contains("value=\"Piła\""));
    }
}
