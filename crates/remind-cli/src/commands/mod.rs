pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod new_list;
pub mod show;
pub mod show_all;
pub mod show_lists;
pub mod uncomplete;
