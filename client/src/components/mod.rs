//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation, dashboard widgets and result charts. They
//! take data through props and report mutations through callbacks; only the
//! navbar reads shared context directly.

pub mod analytics_widgets;
pub mod error_banner;
pub mod kanban_board;
pub mod navbar;
pub mod new_task_form;
pub mod radar_chart;
pub mod saved_items;
pub mod task_card;
pub mod user_profile;
