use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::card::{Beverage, Card};
use crate::error::Error;
use crate::heatmap::{COLUMNS, MAX_LEVEL};

const CARD_WIDTH: i32 = 450;
const LEFT_PADDING: i32 = 24;
const LINE_HEIGHT: i32 = 22;
const SECTION_GAP: i32 = 14;
const ALIGN_WIDTH: usize = 44;
const AVATAR_SIZE: i32 = 88;
const CELL_SIZE: i32 = 20;
const CELL_GAP: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Minimal,
    NeonGreen,
    NeonBlue,
    Hologram,
    MidnightTokyo,
    Industrial,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Minimal,
        Theme::NeonGreen,
        Theme::NeonBlue,
        Theme::Hologram,
        Theme::MidnightTokyo,
        Theme::Industrial,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Minimal => "minimal",
            Theme::NeonGreen => "neon-green",
            Theme::NeonBlue => "neon-blue",
            Theme::Hologram => "hologram",
            Theme::MidnightTokyo => "midnight-tokyo",
            Theme::Industrial => "industrial",
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Minimal => ThemeColors {
                bg: "#000000",
                border: "#000000",
                text: "#ffffff",
                accent: "#ffffff",
                cc: "#6b7280",
            },
            Theme::NeonGreen => ThemeColors {
                bg: "#000000",
                border: "#22c55e",
                text: "#dcfce7",
                accent: "#22c55e",
                cc: "#4b5563",
            },
            Theme::NeonBlue => ThemeColors {
                bg: "#000000",
                border: "#22d3ee",
                text: "#cffafe",
                accent: "#22d3ee",
                cc: "#4b5563",
            },
            Theme::Hologram => ThemeColors {
                bg: "#050505",
                border: "#f472b6",
                text: "#fce7f3",
                accent: "#f472b6",
                cc: "#22d3ee",
            },
            Theme::MidnightTokyo => ThemeColors {
                bg: "#080110",
                border: "#c026d3",
                text: "#f5d0fe",
                accent: "#c026d3",
                cc: "#701a75",
            },
            Theme::Industrial => ThemeColors {
                bg: "#111111",
                border: "#f97316",
                text: "#e5e5e5",
                accent: "#f97316",
                cc: "#737373",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidTheme(s.to_string()))
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Splits a stat row into (key, dot leader, value) padded to `align_width` chars.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.chars().count() + value.chars().count();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.chars().count());
    format!("{base}{}", "-".repeat(dash_count))
}

fn join_non_empty(items: &[String]) -> String {
    items
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rounded cells, one per heatmap level, starting at `top`. Returns (rects, height).
fn build_heatmap(levels: &[u8], top: i32) -> (String, i32) {
    let mut out = String::new();
    for (i, level) in levels.iter().enumerate() {
        let row = (i / COLUMNS) as i32;
        let col = (i % COLUMNS) as i32;
        let x = LEFT_PADDING + col * (CELL_SIZE + CELL_GAP);
        let y = top + row * (CELL_SIZE + CELL_GAP);
        let opacity = if *level == 0 {
            0.08
        } else {
            f32::from((*level).min(MAX_LEVEL)) / f32::from(MAX_LEVEL)
        };
        out.push_str(&format!(
            "<rect class=\"cell\" x=\"{x}\" y=\"{y}\" width=\"{CELL_SIZE}\" height=\"{CELL_SIZE}\" rx=\"4\" fill-opacity=\"{opacity:.2}\"/>\n"
        ));
    }
    let rows = levels.len().div_ceil(COLUMNS) as i32;
    (out, rows * (CELL_SIZE + CELL_GAP))
}

/// Renders `card` as a standalone SVG document.
///
/// The avatar is referenced by URL, not embedded. Anything rasterizing the
/// result must wait for that image to load before capturing.
pub fn render_card(card: &Card, theme: Theme) -> String {
    let colors = theme.colors();
    let accent = match (theme, &card.brand_color) {
        (Theme::Minimal, Some(brand)) => escape_xml(brand),
        _ => colors.accent.to_string(),
    };

    let mut body = String::new();
    let mut y = 40;

    // Header block, avatar on the right
    let avatar_x = CARD_WIDTH - LEFT_PADDING - AVATAR_SIZE;
    body.push_str(&format!(
        r#"<clipPath id="avatar"><circle cx="{cx}" cy="{cy}" r="{r}"/></clipPath>
<image href="{href}" x="{avatar_x}" y="{y0}" width="{AVATAR_SIZE}" height="{AVATAR_SIZE}" clip-path="url(#avatar)" preserveAspectRatio="xMidYMid slice"/>
"#,
        cx = avatar_x + AVATAR_SIZE / 2,
        cy = y - 16 + AVATAR_SIZE / 2,
        r = AVATAR_SIZE / 2,
        href = escape_xml(&card.image_url),
        y0 = y - 16,
    ));
    body.push_str(&format!(
        "<text x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"cc small\">{}</text>\n",
        escape_xml(&card.category_header.to_uppercase())
    ));
    y += LINE_HEIGHT + 8;
    body.push_str(&format!(
        "<text x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"title\">{}</text>\n",
        escape_xml(&card.name)
    ));
    y += LINE_HEIGHT;
    body.push_str(&format!(
        "<text x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"text\">{}</text>\n",
        escape_xml(&card.role)
    ));
    y += LINE_HEIGHT;
    body.push_str(&format!(
        "<text x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"accent rank\">// {}</text>\n",
        card.rank()
    ));
    y += LINE_HEIGHT + SECTION_GAP;

    // Stat table
    let mut lines = String::new();
    lines.push_str(&format!(
        "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
        escape_xml(&build_header_line("- Stats", ALIGN_WIDTH))
    ));
    for stat in card.display_stats() {
        y += LINE_HEIGHT;
        let (k, d, v) = build_stat_row(&stat.label, &stat.value, ALIGN_WIDTH);
        lines.push_str(&format!(
            r#"<tspan x="{LEFT_PADDING}" y="{y}" class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="accent">{}</tspan>
"#,
            escape_xml(&k),
            escape_xml(&d),
            escape_xml(&v)
        ));
    }
    y += LINE_HEIGHT + SECTION_GAP;

    for (label, items) in [("Languages", &card.languages), ("Tools", &card.tools)] {
        lines.push_str(&format!(
            "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
            escape_xml(&build_header_line(&format!("- {label}"), ALIGN_WIDTH))
        ));
        y += LINE_HEIGHT;
        lines.push_str(&format!(
            "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"accent\">{}</tspan>\n",
            escape_xml(&join_non_empty(items))
        ));
        y += LINE_HEIGHT + SECTION_GAP;
    }

    lines.push_str(&format!(
        "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
        escape_xml(&build_header_line("- Activity", ALIGN_WIDTH))
    ));
    y += 12;
    body.push_str(&format!("<text class=\"text\">\n{lines}</text>\n"));

    let (cells, grid_height) = build_heatmap(&card.heatmap, y);
    body.push_str(&cells);
    y += grid_height + SECTION_GAP;

    let fuel = match card.beverage {
        Beverage::Coffee => "coffee",
        Beverage::Chai => "chai",
    };
    y += 8;
    body.push_str(&format!(
        "<text x=\"{LEFT_PADDING}\" y=\"{y}\" class=\"cc small\">{} // fueled by {fuel}</text>\n",
        escape_xml(&card.tagline)
    ));

    let h = (y + 32).max(800);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="14px">

<style>
.text   {{ fill: {text}; }}
.title  {{ fill: {text}; font-size: 26px; font-weight: bold; }}
.key    {{ fill: {text}; }}
.accent {{ fill: {accent}; }}
.rank   {{ font-weight: bold; letter-spacing: 2px; }}
.cc     {{ fill: {cc}; }}
.small  {{ font-size: 11px; letter-spacing: 1px; }}
.cell   {{ fill: {accent}; }}
</style>

<rect x="0.5" y="0.5" width="{bw}px" height="{bh}px" fill="{bg}" stroke="{border}" stroke-opacity="0.3" rx="15"/>

{body}
</svg>
"#,
        w = CARD_WIDTH,
        h = h,
        bw = CARD_WIDTH - 1,
        bh = h - 1,
        bg = colors.bg,
        border = colors.border,
        text = colors.text,
        accent = accent,
        cc = colors.cc,
        body = body
    )
}
