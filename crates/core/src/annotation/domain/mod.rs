pub mod draw_command;
pub mod frame_annotator;
pub mod selection_policy;
