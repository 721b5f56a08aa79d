//! Full HTML page: sidebar with logo and navigation, content area.

use std::fmt::Write as _;

use crate::loader::Logo;
use crate::render::escape;
use crate::render::theme::{SIDEBAR_LOGO_WIDTH, stylesheet};

pub const PAGE_TITLE: &str = "Bike Sharing Dashboard";
pub const SIDEBAR_HEADING: &str = "Bike Sharing Analysis";
pub const NAV_TITLE: &str = "Navigation";

/// One sidebar menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    /// Target page when navigating between pre-rendered files.
    pub href: Option<String>,
    pub active: bool,
}

/// Places `body` in the centre column of a 1:2:1 layout.
pub fn centered(body: &str) -> String {
    format!(
        r#"<div class="columns"><div class="left"></div><div class="center">{body}</div><div class="right"></div></div>"#
    )
}

pub fn render_page(heading: &str, nav: &[NavEntry], logo: &Logo, content: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><style>{}</style></head><body>"#,
        PAGE_TITLE,
        stylesheet()
    );

    let _ = write!(
        html,
        r#"<aside class="sidebar"><img src="{}" width="{SIDEBAR_LOGO_WIDTH}" alt="logo"><h2>{SIDEBAR_HEADING}</h2><nav><p class="nav-title">{NAV_TITLE}</p><ul>"#,
        logo.data_uri()
    );
    for entry in nav {
        let class = if entry.active { r#" class="active""# } else { "" };
        let label = escape(entry.label);
        match &entry.href {
            Some(href) => {
                let _ = write!(
                    html,
                    r#"<li{class}><a href="{}">{label}</a></li>"#,
                    escape(href)
                );
            }
            None => {
                let _ = write!(html, "<li{class}>{label}</li>");
            }
        }
    }
    html.push_str("</ul></nav></aside>");

    let _ = write!(
        html,
        r#"<main class="main"><div class="block-container"><h1>{}</h1>{content}</div></main></body></html>"#,
        escape(heading)
    );

    html
}
