//! System switching, paging and ROM selection for App.

use crate::{
  app::App,
  core::{
    pagination::PageState,
    roms::list_roms,
  },
};

impl App
{
  /// ROM slots per page for the current viewport.
  pub(crate) fn page_capacity(&self) -> usize
  {
    self.viewport_rows.saturating_sub(self.config.ui.chrome_rows).max(1) as usize
  }

  /// (Re)build the ROM list and pages of the active system.
  pub(crate) fn enter_system(&mut self)
  {
    self.roms = match self.nav.current()
    {
      Some(system) => list_roms(system),
      None => Vec::new(),
    };
    self.pages = PageState::new(self.roms.len(), self.page_capacity());
    self.select_first_on_page();
    self.force_full_redraw = true;
  }

  fn select_first_on_page(&mut self)
  {
    let on_page = self.pages.range().len();
    self.list_state.select(if on_page == 0 { None } else { Some(0) });
  }

  /// Absolute index of the selected ROM.
  pub fn selected_index(&self) -> Option<usize>
  {
    let rel = self.list_state.selected()?;
    let range = self.pages.range();
    let idx = range.start + rel;
    range.contains(&idx).then_some(idx)
  }

  pub fn selected_rom(&self) -> Option<&str>
  {
    self.selected_index().and_then(|i| self.roms.get(i)).map(String::as_str)
  }

  /// Select ROM `idx` (absolute), flipping to its page.
  pub fn select_index(
    &mut self,
    idx: usize,
  )
  {
    if idx >= self.roms.len()
    {
      return;
    }
    let page = self.pages.page_of(idx);
    self.pages.goto_page(page);
    let start = self.pages.range().start;
    self.list_state.select(Some(idx - start));
  }

  pub(crate) fn next_system(&mut self)
  {
    let name = self.nav.advance().map(|s| s.name.clone());
    self.enter_system();
    if let Some(name) = name
    {
      self.add_message(&format!("System: {}", name));
    }
  }

  /// Rescan the ROM root and restart on the first system.
  pub(crate) fn reload_systems(&mut self)
  {
    let count = self.nav.reload().len();
    self.enter_system();
    if count == 0
    {
      self.add_message(&format!(
        "No systems found in {}",
        self.nav.root().display()
      ));
    }
    else
    {
      self.add_message(&format!("Reloaded {} system(s)", count));
    }
  }

  /// Move within the active page; the cursor never crosses a page boundary.
  pub(crate) fn move_selection(
    &mut self,
    delta: isize,
  )
  {
    let on_page = self.pages.range().len();
    if on_page == 0
    {
      return;
    }
    let cur = self.list_state.selected().unwrap_or(0) as isize;
    let next = (cur + delta).clamp(0, on_page as isize - 1);
    self.list_state.select(Some(next as usize));
  }

  pub(crate) fn select_top(&mut self)
  {
    self.select_first_on_page();
  }

  pub(crate) fn select_bottom(&mut self)
  {
    let on_page = self.pages.range().len();
    if on_page > 0
    {
      self.list_state.select(Some(on_page - 1));
    }
  }

  pub(crate) fn next_page(&mut self)
  {
    self.pages.next_page();
    self.select_first_on_page();
  }

  pub(crate) fn prev_page(&mut self)
  {
    self.pages.prev_page();
    self.select_first_on_page();
  }

  /// Report the terminal height; pages are rebuilt when the capacity
  /// changes, keeping the selected ROM in view.
  pub fn set_viewport_rows(
    &mut self,
    rows: u16,
  )
  {
    if rows == self.viewport_rows
    {
      return;
    }
    self.viewport_rows = rows;
    let capacity = self.page_capacity();
    if capacity == self.pages.capacity()
    {
      return;
    }
    let anchor = self.selected_index();
    self.pages.resize(capacity, anchor.unwrap_or(0));
    match anchor
    {
      Some(idx) => self.select_index(idx),
      None => self.select_first_on_page(),
    }
  }
}
