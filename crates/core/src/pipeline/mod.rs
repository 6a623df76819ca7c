pub mod frame_driver;
pub mod frame_scheduler;
pub mod infrastructure;
pub mod pipeline_logger;
