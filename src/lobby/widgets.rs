//! Drawing helpers that turn effect models into ratatui widgets.

use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Context, Line as Stroke},
};
use senipy_effects::{LogoFrame, Orb, RevealUnit, ShineText, TextReveal, lerp};
use senipy_games::Feedback;
use unicode_width::UnicodeWidthStr;

/// Canvas half-extent for the orb, in "pixels".
const ORB_EXTENT: f64 = 24.0;

/// Base colour of shining text.
const SHINE_BASE: (u8, u8, u8) = (120, 90, 220);

/// Centers a `width` × `height` rect inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

/// HSL (degrees, 0..1, 0..1) to an RGB colour.
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let channel = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let mix = |a: u8, b: u8| lerp(f32::from(a), f32::from(b), t.clamp(0.0, 1.0)).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Text with the shine band drawn across it.
pub fn shine_line(shine: &ShineText, elapsed: Duration) -> Line<'static> {
    let chars: Vec<char> = shine.text().chars().collect();
    let n = chars.len().max(1) as f32;
    let spans = chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let x = (i as f32 + 0.5) / n;
            let glow = shine.highlight(x, elapsed);
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(blend(SHINE_BASE, (255, 255, 255), glow))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// The reveal at `now`: hidden segments are blank, others fade in.
pub fn reveal_line(reveal: &TextReveal, now: Duration) -> Line<'static> {
    let separator = match reveal.settings().unit() {
        RevealUnit::Words => " ",
        RevealUnit::Letters => "",
    };
    let mut spans = Vec::new();
    for (i, (segment, style)) in reveal.frame(now).into_iter().enumerate() {
        if i > 0 && !separator.is_empty() {
            spans.push(Span::raw(separator));
        }
        if style.opacity < 0.05 {
            spans.push(Span::raw(" ".repeat(segment.width())));
            continue;
        }
        let level = lerp(60.0, 235.0, style.opacity).round() as u8;
        let mut span_style = Style::default().fg(Color::Rgb(level, level, level));
        if style.blur > 4.0 {
            span_style = span_style.add_modifier(Modifier::DIM);
        }
        spans.push(Span::styled(segment.to_string(), span_style));
    }
    Line::from(spans)
}

/// The logo wordmark with its underline drawn to `frame.path_drawn`.
///
/// Returns the lines plus how many rows the mark floats below the top.
pub fn logo_lines(frame: &LogoFrame) -> (Vec<Line<'static>>, u16) {
    const MARK: &str = "◆ SENIPY ◆";
    let hue = lerp(260.0, 200.0, frame.gradient_position / 100.0);
    let glow = ((frame.glow_radius - 5.0) / 20.0).clamp(0.0, 1.0);
    let word = Span::styled(
        MARK,
        Style::default()
            .fg(hsl(hue, 0.7, lerp(0.55, 0.75, glow)))
            .add_modifier(Modifier::BOLD),
    );

    let width = MARK.width();
    let drawn = (width as f32 * frame.path_drawn).round() as usize;
    let level = lerp(60.0, 220.0, frame.path_opacity).round() as u8;
    let underline = Span::styled(
        format!("{}{}", "━".repeat(drawn), " ".repeat(width - drawn.min(width))),
        Style::default().fg(Color::Rgb(level, level / 2 + 60, level)),
    );

    // -8..8 px maps onto 0..2 rows.
    let rows = ((frame.float_offset + 8.0) / 8.0).round().clamp(0.0, 2.0) as u16;
    (vec![Line::from(word), Line::from(underline)], rows)
}

/// The orb as a braille canvas.
pub fn orb_canvas(orb: &Orb, now: Duration) -> Canvas<'static, impl Fn(&mut Context<'_>)> {
    let t = orb.transform(now);
    let palette = orb.palette();
    let glow = f64::from(t.inner_glow);
    let outer = f64::from(t.outer_glow);
    let cx = f64::from(t.translate_x);
    let cy = -f64::from(t.translate_y);
    let scale = f64::from(t.scale);
    let angle = f64::from(t.rotate_deg).to_radians();
    let body = hsl(palette[0], 0.8, 0.45 * t.brightness);
    let core = hsl(palette[1], 0.9, 0.55 * t.brightness);
    let rim = hsl(palette[3], 0.6, 0.3 + 0.3 * t.outer_glow);
    let spoke = hsl(palette[2], 0.9, 0.7);

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-ORB_EXTENT, ORB_EXTENT])
        .y_bounds([-ORB_EXTENT, ORB_EXTENT])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: 12.0 * scale + 6.0 * outer,
                color: rim,
            });
            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: 10.0 * scale,
                color: body,
            });
            ctx.draw(&Circle {
                x: cx,
                y: cy,
                radius: 6.0 * scale * glow,
                color: core,
            });
            ctx.draw(&Stroke {
                x1: cx - 8.0 * scale * angle.cos(),
                y1: cy - 8.0 * scale * angle.sin(),
                x2: cx + 8.0 * scale * angle.cos(),
                y2: cy + 8.0 * scale * angle.sin(),
                color: spoke,
            });
        })
}

/// Colours a feedback message green when it was right, red otherwise.
pub fn feedback_line(feedback: Option<&Feedback>) -> Line<'static> {
    match feedback {
        Some(f @ Feedback::Hint(_)) => Line::styled(f.to_string(), Style::default().fg(Color::Yellow)),
        Some(f) if f.is_correct() => Line::styled(f.to_string(), Style::default().fg(Color::Green)),
        Some(f) => Line::styled(f.to_string(), Style::default().fg(Color::Red)),
        None => Line::default(),
    }
}

/// The bottom help bar text style.
pub fn help_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
