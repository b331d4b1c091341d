pub mod notation;
pub mod pin_list;
