pub mod menu;
pub mod messages;
pub mod notice;

pub use menu::draw_menu_panel;
pub use messages::draw_messages_panel;
pub use notice::draw_notice_panel;
