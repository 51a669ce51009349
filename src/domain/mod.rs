pub mod credential;
pub mod dates;
pub mod red_list;
pub mod sheets;
pub mod table;
