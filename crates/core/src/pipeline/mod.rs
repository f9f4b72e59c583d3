pub mod fps_meter;
pub mod track_faces_use_case;
