pub mod raster_surface;
pub mod recording_surface;
