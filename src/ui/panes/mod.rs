mod current;

pub use current::draw_current_panel;
