use ratatui::{
  layout::Rect,
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

pub fn draw_notice_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let state = match app.overlay
  {
    crate::app::Overlay::Notice(ref s) => s.as_ref(),
    _ => return,
  };

  let width = 60.min(area.width);
  let height = 6.min(area.height);
  let popup = Rect::new(
    area.x + area.width.saturating_sub(width) / 2,
    area.y + area.height.saturating_sub(height) / 2,
    width,
    height,
  );
  f.render_widget(Clear, popup);

  let mut title_style =
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
  let mut block = Block::default().borders(Borders::ALL);
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
    if let Some(tb) = th.title_bg.as_deref().and_then(parse_color)
    {
      title_style = title_style.bg(tb);
    }
  }
  block = block.title(Span::styled(state.title.clone(), title_style));
  let inner = block.inner(popup);
  f.render_widget(block, popup);
  let lines: Vec<Line> = vec![
    Line::from(Span::raw(state.message.clone())),
    Line::from(""),
    Line::from(Span::styled(
      "press any key",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  let para = Paragraph::new(lines).wrap(Wrap { trim: true });
  f.render_widget(para, inner);
}
