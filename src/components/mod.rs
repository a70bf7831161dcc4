pub mod app;
pub mod board_controls;
pub mod board_view;
pub mod card_hand;
pub mod json_panel;
pub mod land_panel;
pub mod status_bar;
pub mod terrain_palette;
