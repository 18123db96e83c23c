//! Server-rendered HTML.
//!
//! Every page goes through [`layout`], which supplies the document shell,
//! navigation, and the notice area. User-provided text must pass through
//! [`escape`] before it is interpolated.

pub mod contact;
pub mod errors;
pub mod pages;

use std::fmt::Write;

use axum::response::Html;

use crate::flash::Notice;

pub const SITE_NAME: &str = "HostUp";

/// Top-level pages that appear in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Services,
    Testimonials,
    Faqs,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Testimonials,
        Page::Faqs,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Testimonials => "/testimonials",
            Page::Faqs => "/faqs",
            Page::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Testimonials => "Testimonials",
            Page::Faqs => "FAQs",
            Page::Contact => "Contact",
        }
    }
}

/// Escape text for safe interpolation into HTML content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `body` in the site shell.
///
/// `active` highlights the matching navigation link; error pages pass `None`.
pub fn layout(title: &str, active: Option<Page>, notices: &[Notice], body: &str) -> Html<String> {
    let mut nav = String::new();
    for page in Page::ALL {
        let class = if Some(page) == active {
            " class=\"active\" aria-current=\"page\""
        } else {
            ""
        };
        let _ = write!(
            nav,
            "<li><a href=\"{}\"{class}>{}</a></li>",
            page.path(),
            page.label()
        );
    }

    let mut flashes = String::new();
    for notice in notices {
        let _ = write!(
            flashes,
            "<div class=\"flash flash-{}\" role=\"alert\">{}</div>",
            notice.level.as_str(),
            escape(notice.message)
        );
    }

    Html(format!(
        "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title} | {SITE_NAME}</title>\n\
<link rel=\"stylesheet\" href=\"/static/css/style.css\">\n\
</head>\n\
<body>\n\
<header class=\"site-header\">\n\
<a class=\"brand\" href=\"/\">{SITE_NAME}</a>\n\
<button class=\"nav-toggle\" type=\"button\" aria-label=\"Menu\" aria-expanded=\"false\">&#9776;</button>\n\
<nav><ul class=\"nav-links\">{nav}</ul></nav>\n\
</header>\n\
<div class=\"flash-messages\">{flashes}</div>\n\
<main>\n{body}\n</main>\n\
<footer class=\"site-footer\">\n\
<p>&copy; {SITE_NAME}. Short-term rental management in Jaipur, Delhi and Mumbai.</p>\n\
</footer>\n\
<script src=\"/static/js/main.js\" defer></script>\n\
</body>\n\
</html>\n",
        title = escape(title),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::Notice;

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(
            escape("<a href=\"x\">Tom & Jerry's</a>"),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#x27;s&lt;/a&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Jaipur, Delhi"), "Jaipur, Delhi");
    }

    #[test]
    fn layout_marks_active_page() {
        let Html(html) = layout("About us", Some(Page::About), &[], "<p>x</p>");
        assert!(html.contains("<a href=\"/about\" class=\"active\" aria-current=\"page\">About</a>"));
        assert!(html.contains("<a href=\"/faqs\">FAQs</a>"));
        assert!(html.contains("<title>About us | HostUp</title>"));
    }

    #[test]
    fn layout_links_stylesheet_and_script() {
        let Html(html) = layout("Home", Some(Page::Home), &[], "");
        assert!(html.contains("href=\"/static/css/style.css\""));
        assert!(html.contains("<script src=\"/static/js/main.js\" defer></script>"));
        assert!(html.contains("class=\"nav-toggle\""));
    }

    #[test]
    fn layout_renders_notices() {
        let Html(html) = layout("Contact", None, &[Notice::error("Oops & sorry")], "");
        assert!(html.contains("flash-error"));
        assert!(html.contains("Oops &amp; sorry"));
    }
}
