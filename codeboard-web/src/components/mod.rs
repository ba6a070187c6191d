pub mod code_item;
pub mod code_list;
pub mod header;
pub mod loading;
pub mod tabs;
pub mod toast;
