pub mod column_settings;
pub mod data_table;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod search_input;
pub mod table_checkbox;
pub mod three_dot_menu;
