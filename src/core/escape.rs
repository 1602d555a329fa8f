//! Shell escaping for ROM paths interpolated into launch commands.
//!
//! Only `(`, `)` and the space character are escaped. Quotes, backslashes
//! and other shell metacharacters pass through untouched, so this is not a
//! general injection-safe escape.

/// Backslash-escape parentheses and spaces in `s`.
pub fn escape(s: &str) -> String
{
  let mut out = String::with_capacity(s.len() + 8);
  for ch in s.chars()
  {
    match ch
    {
      '(' | ')' | ' ' =>
      {
        out.push('\\');
        out.push(ch);
      }
      c => out.push(c),
    }
  }
  out
}
