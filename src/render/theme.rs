//! Colors, sizes and the stylesheet shared by every page.

use plotters::style::RGBColor;

/// `#355872`
pub const PRIMARY: RGBColor = RGBColor(0x35, 0x58, 0x72);
/// `#7AAACE`
pub const SECONDARY: RGBColor = RGBColor(0x7A, 0xAA, 0xCE);

pub const PAGE_BACKGROUND: &str = "#FFFBF1";
pub const SIDEBAR_BACKGROUND: &str = "#84B179";
pub const HEADING: &str = "#2E2E2E";

/// 4 x 2.5 figure units at 100 px per unit.
pub const FIGURE_SIZE: (u32, u32) = (400, 250);

// 9pt / 8pt / 7pt at 96 dpi
pub const TITLE_FONT_PX: f64 = 12.0;
pub const LABEL_FONT_PX: f64 = 10.7;
pub const TICK_FONT_PX: f64 = 9.3;

pub const SIDEBAR_LOGO_WIDTH: u32 = 140;

pub fn stylesheet() -> String {
    format!(
        r#"
* {{ box-sizing: border-box; }}
html, body {{
  margin: 0;
  padding: 0;
  min-height: 100%;
  font-family: "Source Sans Pro", system-ui, -apple-system, sans-serif;
}}
body {{ display: flex; }}
.sidebar {{
  width: 260px;
  min-height: 100vh;
  padding: 2rem 1.25rem;
  background-color: {SIDEBAR_BACKGROUND};
}}
.sidebar h2 {{ font-size: 1.4rem; margin: 1rem 0; }}
.sidebar .nav-title {{ font-size: 0.85rem; margin-bottom: 0.25rem; }}
.sidebar ul {{ list-style: none; padding: 0; margin: 0; }}
.sidebar li {{ padding: 0.2rem 0; }}
.sidebar li::before {{ content: "\25CB  "; }}
.sidebar li.active::before {{ content: "\25C9  "; }}
.sidebar li.active {{ font-weight: 600; }}
.sidebar a {{ color: inherit; text-decoration: none; }}
.main {{ flex: 1; background-color: {PAGE_BACKGROUND}; }}
.block-container {{ padding: 2rem 3rem; }}
h1, h2, h3 {{ color: {HEADING}; }}
.metrics {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }}
.metric-label {{ display: block; font-size: 0.9rem; }}
.metric-value {{ display: block; font-size: 2.25rem; }}
hr.divider {{ border: none; border-top: 1px solid rgba(49, 51, 63, 0.2); margin: 1.5rem 0; }}
table.preview {{ border-collapse: collapse; font-size: 0.8rem; }}
table.preview th, table.preview td {{ border: 1px solid rgba(49, 51, 63, 0.1); padding: 0.2rem 0.5rem; text-align: right; }}
.columns {{ display: grid; grid-template-columns: 1fr 2fr 1fr; gap: 1rem; }}
.columns .center {{ display: flex; justify-content: center; }}
"#
    )
}
