pub mod fixed_rate_scheduler;
pub mod threaded_frame_driver;
