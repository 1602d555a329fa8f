use ratatui::{
  layout::Rect,
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
    ListState,
  },
};

use crate::{
  app::{
    MenuEntry,
    Overlay,
  },
  ui::colors::parse_color,
};

pub fn draw_menu_panel(
  f: &mut ratatui::Frame,
  area: Rect,
  app: &crate::App,
)
{
  let selected = match app.overlay
  {
    Overlay::Menu(ref st) => st.selected,
    _ => return,
  };

  let width = 30.min(area.width);
  let height = (MenuEntry::ALL.len() as u16 + 2).min(area.height);
  let popup = Rect::new(
    area.x + area.width.saturating_sub(width) / 2,
    area.y + area.height.saturating_sub(height) / 2,
    width,
    height,
  );
  f.render_widget(Clear, popup);

  let mut block = Block::default().borders(Borders::ALL).title(Span::styled(
    "Menu",
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
  ));
  let mut hl = Style::default().fg(Color::Cyan);
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
    if let Some(fg) = th.selected_item_fg.as_deref().and_then(parse_color)
    {
      hl = hl.fg(fg);
    }
    if let Some(bg) = th.selected_item_bg.as_deref().and_then(parse_color)
    {
      hl = hl.bg(bg);
    }
  }

  let items: Vec<ListItem> =
    MenuEntry::ALL.iter().map(|e| ListItem::new(e.label())).collect();
  let list = List::new(items)
    .block(block)
    .highlight_symbol("> ")
    .highlight_style(hl.add_modifier(Modifier::BOLD));
  let mut state = ListState::default();
  state.select(Some(selected));
  f.render_stateful_widget(list, popup, &mut state);
}
