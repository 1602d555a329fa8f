use std::ops::Range;

/// Split `items` into contiguous pages of at most `capacity` entries.
///
/// Pages preserve order and cover the input exactly once. An empty input
/// yields a single empty page. A zero capacity is treated as one.
pub fn paginate<T: Clone>(
  items: &[T],
  capacity: usize,
) -> Vec<Vec<T>>
{
  let capacity = capacity.max(1);
  if items.is_empty()
  {
    return vec![Vec::new()];
  }
  items.chunks(capacity).map(|c| c.to_vec()).collect()
}

/// Active page over a list of `len` items shown `capacity` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState
{
  len:      usize,
  capacity: usize,
  page:     usize,
}

impl PageState
{
  pub fn new(
    len: usize,
    capacity: usize,
  ) -> Self
  {
    Self { len, capacity: capacity.max(1), page: 0 }
  }

  pub fn len(&self) -> usize
  {
    self.len
  }

  pub fn is_empty(&self) -> bool
  {
    self.len == 0
  }

  pub fn capacity(&self) -> usize
  {
    self.capacity
  }

  pub fn page(&self) -> usize
  {
    self.page
  }

  /// Number of pages; never less than one.
  pub fn page_count(&self) -> usize
  {
    self.len.div_ceil(self.capacity).max(1)
  }

  /// Jump to page `n`; an out-of-range page wraps back to the first one.
  pub fn goto_page(
    &mut self,
    n: usize,
  ) -> usize
  {
    self.page = if n < self.page_count() { n } else { 0 };
    self.page
  }

  pub fn next_page(&mut self) -> usize
  {
    self.goto_page(self.page + 1)
  }

  pub fn prev_page(&mut self) -> usize
  {
    let target = if self.page == 0
    {
      self.page_count() - 1
    }
    else
    {
      self.page - 1
    };
    self.goto_page(target)
  }

  /// Index range of the items on the active page.
  pub fn range(&self) -> Range<usize>
  {
    let start = (self.page * self.capacity).min(self.len);
    let end = (start + self.capacity).min(self.len);
    start..end
  }

  /// Page that holds item `index` (clamped to the last page).
  pub fn page_of(
    &self,
    index: usize,
  ) -> usize
  {
    (index / self.capacity).min(self.page_count() - 1)
  }

  /// Change the capacity, keeping item `anchor` on the active page.
  pub fn resize(
    &mut self,
    capacity: usize,
    anchor: usize,
  )
  {
    self.capacity = capacity.max(1);
    self.page = self.page_of(anchor);
  }
}
