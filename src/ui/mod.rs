pub mod result_list;
pub mod search_input;
pub mod status;
pub mod theme;
