pub mod inspector;
pub mod profiles;
pub mod scene_tree;
pub mod status_bar;
