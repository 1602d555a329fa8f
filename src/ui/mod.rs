pub mod colors;
pub mod overlays;
pub mod panes;

use ratatui::{
  layout::{
    Alignment,
    Constraint,
    Direction,
    Layout,
    Rect,
  },
  style::{
    Color,
    Style,
  },
  widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{
  App,
  Overlay,
};

pub fn draw(
  f: &mut ratatui::Frame,
  app: &mut App,
)
{
  // Header row, ROM list, footer row
  let full = f.area();
  let vchunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1),
      Constraint::Min(1),
      Constraint::Length(1),
    ])
    .split(full);

  draw_header(f, vchunks[0], app);
  panes::draw_current_panel(f, vchunks[1], app);
  draw_footer(f, vchunks[2], app);

  // overlays (draw last so they appear on top)
  match app.overlay
  {
    Overlay::None =>
    {}
    Overlay::Messages => overlays::draw_messages_panel(f, full, app),
    Overlay::Menu(_) => overlays::draw_menu_panel(f, full, app),
    Overlay::Notice(_) => overlays::draw_notice_panel(f, full, app),
  }
}

/// Expand `{system}`, `{index}`, `{count}`, `{page}`, `{pages}`, `{user}`
/// and `{host}` in a header template.
pub fn expand_header(
  template: &str,
  app: &App,
) -> String
{
  let system = app.current_system_name().unwrap_or_else(|| "-".to_string());
  let count = app.system_names().len();
  let index = if count == 0 { 0 } else { app.system_index() + 1 };
  let mut out = template
    .replace("{system}", &system.to_uppercase())
    .replace("{index}", &index.to_string())
    .replace("{count}", &count.to_string())
    .replace("{page}", &(app.page() + 1).to_string())
    .replace("{pages}", &app.page_count().to_string());
  if out.contains("{user}")
  {
    out = out.replace("{user}", &whoami::username());
  }
  if out.contains("{host}")
  {
    let host = whoami::fallible::hostname().unwrap_or_default();
    out = out.replace("{host}", &host);
  }
  out
}

fn title_style(app: &App) -> Style
{
  let mut style = Style::default().fg(Color::Gray);
  if let Some(th) = app.config.ui.theme.as_ref()
  {
    if let Some(fg) = th.title_fg.as_deref().and_then(colors::parse_color)
    {
      style = style.fg(fg);
    }
    if let Some(bg) = th.title_bg.as_deref().and_then(colors::parse_color)
    {
      style = style.bg(bg);
    }
  }
  style
}

fn draw_header(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let template = app
    .config
    .ui
    .header
    .as_deref()
    .unwrap_or("retroboi  {system} ({index}/{count})");
  let left_full = expand_header(template, app);
  let right_full = format!("page {}/{}", app.page() + 1, app.page_count());

  let total = area.width as usize;
  let right_w = UnicodeWidthStr::width(right_full.as_str());
  let left = truncate_to_width(&left_full, total.saturating_sub(right_w + 1));

  let style = title_style(app);
  f.render_widget(
    Paragraph::new(left).alignment(Alignment::Left).style(style),
    area,
  );
  f.render_widget(
    Paragraph::new(right_full).alignment(Alignment::Right).style(style),
    area,
  );
}

fn draw_footer(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &App,
)
{
  let hints = footer_hints(app);
  let last = app.messages().last().cloned().unwrap_or_default();
  let total = area.width as usize;
  let hint_w = UnicodeWidthStr::width(hints.as_str());
  let msg = truncate_to_width(&last, total.saturating_sub(hint_w + 2));
  let style = Style::default().fg(Color::DarkGray);
  f.render_widget(
    Paragraph::new(hints).alignment(Alignment::Left).style(style),
    area,
  );
  f.render_widget(
    Paragraph::new(msg).alignment(Alignment::Right).style(style),
    area,
  );
}

/// "key action" pairs for the main bindings, taken from the live keymap.
fn footer_hints(app: &App) -> String
{
  let mut parts = Vec::new();
  for (action, label) in [
    ("launch", "play"),
    ("system:next", "system"),
    ("menu", "menu"),
    ("reload", "reload"),
    ("quit", "quit"),
  ]
  {
    if let Some(m) =
      app.keys.map.mappings().iter().find(|m| m.action == action)
    {
      parts.push(format!("{} {}", m.sequence, label));
    }
  }
  parts.join("  ")
}

pub(crate) fn truncate_to_width(
  s: &str,
  max_w: usize,
) -> String
{
  if max_w == 0
  {
    return String::new();
  }
  let mut out = String::new();
  let mut w = 0usize;
  for ch in s.chars()
  {
    let cw = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
    if w + cw > max_w
    {
      break;
    }
    out.push(ch);
    w += cw;
  }
  out
}
