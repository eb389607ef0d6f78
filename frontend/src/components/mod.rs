pub mod admin_page;
pub mod auth_gate;
pub mod header;
pub mod history_page;
pub mod home_page;
pub mod leave_modal;
pub mod member_form_modal;
pub mod members_page;
pub mod notice_banner;
pub mod settlement_panel;
pub mod status_page;
pub mod status_row;
pub mod summary_popup;
pub mod week_selector;
