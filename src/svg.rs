use chrono::NaiveDate;
use clap::ValueEnum;

use crate::age::Age;
use crate::i18n::Lang;

const CARD_MIN_WIDTH: f32 = 460.0;
const CARD_HEIGHT: f32 = 230.0;
const MARGIN: f32 = 24.0;
const PADDING: f32 = 36.0;
const CHAR_WIDTH: f32 = 10.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg_top: &'static str,
    pub bg_mid: &'static str,
    pub bg_bottom: &'static str,
    pub card: &'static str,
    pub card_border: &'static str,
    pub heading: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg_top: "#111827",
                bg_mid: "#1f2937",
                bg_bottom: "#374151",
                card: "#1f2937",
                card_border: "#6b7280",
                heading: "#ffffff",
                text: "#e5e7eb",
                accent: "#9333ea",
            },
            Theme::Light => ThemeColors {
                bg_top: "#f3e8ff",
                bg_mid: "#fce7f3",
                bg_bottom: "#dbeafe",
                card: "#ffffff",
                card_border: "#ffffff",
                heading: "#111827",
                text: "#374151",
                accent: "#9333ea",
            },
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders the age card: localized title, the birthdate, and the one-line
/// age sentence on a rounded card over a gradient background.
pub fn generate_svg(age: &Age, birthdate: NaiveDate, lang: Lang, theme: Theme) -> String {
    let colors = theme.colors();
    let labels = lang.labels();
    let result = lang.result_line(age);

    // Rough width from the longest line; Bengali glyph advances vary, so
    // count chars rather than bytes and keep a generous floor.
    let widest = [
        labels.title.chars().count(),
        labels.input_label.chars().count() + 12,
        result.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);

    let w = (widest as f32 * CHAR_WIDTH + 2.0 * (MARGIN + PADDING)).max(CARD_MIN_WIDTH);
    let h = CARD_HEIGHT;
    let card_w = w - 2.0 * MARGIN;
    let card_h = h - 2.0 * MARGIN;
    let text_x = MARGIN + PADDING;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="Poppins,Helvetica,Arial,sans-serif">

<defs>
<linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">
<stop offset="0%" stop-color="{bg_top}"/>
<stop offset="50%" stop-color="{bg_mid}"/>
<stop offset="100%" stop-color="{bg_bottom}"/>
</linearGradient>
</defs>

<rect width="{w}px" height="{h}px" fill="url(#bg)"/>

<!-- CARD -->
<rect x="{margin}" y="{margin}" width="{card_w}" height="{card_h}" rx="24"
      fill="{card}" fill-opacity="0.5" stroke="{card_border}" stroke-opacity="0.2"/>

<text x="{text_x}" y="76" font-size="28px" font-weight="bold" fill="{heading}">{title}</text>
<text x="{text_x}" y="120" font-size="15px" fill="{text}">{input_label}: <tspan fill="{accent}">{birthdate}</tspan></text>
<text x="{text_x}" y="166" font-size="19px" font-weight="600" fill="{heading}">{result}</text>

</svg>
"#,
        w = w,
        h = h,
        margin = MARGIN,
        card_w = card_w,
        card_h = card_h,
        text_x = text_x,
        bg_top = colors.bg_top,
        bg_mid = colors.bg_mid,
        bg_bottom = colors.bg_bottom,
        card = colors.card,
        card_border = colors.card_border,
        heading = colors.heading,
        text = colors.text,
        accent = colors.accent,
        title = escape_xml(labels.title),
        input_label = escape_xml(labels.input_label),
        birthdate = birthdate,
        result = escape_xml(&result)
    )
}
