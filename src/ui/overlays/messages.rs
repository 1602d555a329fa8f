use ratatui::{
  layout::{
    Constraint,
    Direction,
    Layout,
    Rect,
  },
  style::{
    Color,
    Modifier,
    Style,
  },
  text::{
    Line,
    Span,
  },
  widgets::{
    Block,
    Borders,
    Clear,
    Paragraph,
    Wrap,
  },
};

use crate::ui::colors::parse_color;

/// Bottom-anchored log of recent messages (launch results, reloads, config
/// errors).
pub fn draw_messages_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let min_h = ((area.height as u32 * 20) / 100).max(3) as u16;
  let max_h = ((area.height as u32 * 50) / 100).max(min_h as u32) as u16;
  let count = app.messages().len().min(u16::MAX as usize) as u16;
  let needed = count.saturating_add(2).max(3);
  let panel_h = needed.min(max_h).max(min_h).min(area.height);

  let mut block = Block::default().borders(Borders::ALL).title(Span::styled(
    "Messages",
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ));
  if let Some(th) = app.config.ui.theme.as_ref()
  {
    if let Some(bg) = th.pane_bg.as_deref().and_then(parse_color)
    {
      block = block.style(Style::default().bg(bg));
    }
    if let Some(bfg) = th.border_fg.as_deref().and_then(parse_color)
    {
      block = block.border_style(Style::default().fg(bfg));
    }
  }
  let layout = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(panel_h)])
    .split(area);
  let panel = layout[1];
  f.render_widget(Clear, panel);

  // Newest at the bottom; older entries scroll off the top
  let avail_rows = panel_h.saturating_sub(2) as usize;
  let messages = app.messages();
  let start = messages.len().saturating_sub(avail_rows);
  let lines: Vec<Line> = if messages.is_empty()
  {
    vec![Line::from(Span::styled(
      "(no messages)",
      Style::default().fg(Color::DarkGray),
    ))]
  }
  else
  {
    messages[start..]
      .iter()
      .map(|m| {
        Line::from(Span::styled(m.clone(), Style::default().fg(Color::Gray)))
      })
      .collect()
  };
  let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
  f.render_widget(para, panel);
}
