pub mod use_admin;
pub mod use_auth;
pub mod use_history;
pub mod use_members;
pub mod use_notice;
pub mod use_settlement;
pub mod use_status_board;
