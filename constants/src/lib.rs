pub mod cube_frame;
pub mod palette;
pub mod render_settings;
