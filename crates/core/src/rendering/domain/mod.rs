pub mod drawing_surface;
pub mod skeleton_renderer;
