use ratatui::{
  layout::{
    Alignment,
    Rect,
  },
  style::{
    Color,
    Modifier,
    Style,
  },
  text::Span,
  widgets::{
    Block,
    Borders,
    Clear,
    List,
    ListItem,
    Paragraph,
  },
};

use crate::ui::colors::parse_color;

/// ROM list of the active system, one page at a time.
pub fn draw_current_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &mut crate::App,
)
{
  f.render_widget(Clear, area);
  let title = match app.current_system_name()
  {
    Some(name) => format!(" {} ", name.to_uppercase()),
    None => String::from(" no systems "),
  };
  let mut block = Block::default()
    .borders(Borders::ALL)
    .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)));
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
  let inner = block.inner(area);
  f.render_widget(block, area);

  if app.page_roms().is_empty()
  {
    let text = if app.current_system_name().is_some()
    {
      "No ROMs found"
    }
    else
    {
      "No systems found, press r to rescan"
    };
    let para = Paragraph::new(text)
      .alignment(Alignment::Center)
      .style(Style::default().fg(Color::DarkGray));
    f.render_widget(para, inner);
    return;
  }

  let items: Vec<ListItem> = app
    .page_roms()
    .iter()
    .map(|name| {
      ListItem::new(crate::ui::truncate_to_width(name, inner.width as usize))
    })
    .collect();

  let mut list = List::new(items).highlight_symbol("> ");
  let mut hl = Style::default().fg(Color::Cyan);
  if let Some(th) = app.config.ui.theme.as_ref()
  {
    if let Some(fg) = th.selected_item_fg.as_deref().and_then(parse_color)
    {
      hl = hl.fg(fg);
    }
    if let Some(bg) = th.selected_item_bg.as_deref().and_then(parse_color)
    {
      hl = hl.bg(bg);
    }
    if let Some(fg) = th.item_fg.as_deref().and_then(parse_color)
    {
      list = list.style(Style::default().fg(fg));
    }
  }
  list = list.highlight_style(hl.add_modifier(Modifier::BOLD));

  f.render_stateful_widget(list, inner, &mut app.list_state);
}
