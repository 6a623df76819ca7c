/// Reference capture resolution the lift threshold was tuned for.
pub const DEFAULT_FRAME_WIDTH: u32 = 640;
pub const DEFAULT_FRAME_HEIGHT: u32 = 480;

/// Minimum wrist-to-fingertip rise, in pixels at 640x480. Not scale-normalized.
pub const DEFAULT_LIFT_THRESHOLD: f32 = 70.0;

pub const DEFAULT_PALETTE: &[&str] = &[
    "#FF5733", "#33FF57", "#3357FF", "#F3FF33", "#FF33F3", "#33FFF3",
];

pub const DEFAULT_MAX_HANDS: usize = 2;
pub const DEFAULT_TARGET_FPS: u32 = 60;

pub const DEFAULT_POINT_RADIUS: f32 = 5.0;
pub const DEFAULT_LINE_WIDTH: u32 = 2;

pub const CONFIG_DIR_NAME: &str = "HandLift";
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

pub const STATUS_LOADING_MODEL: &str = "Loading hand detection model...";
pub const STATUS_MODEL_LOADED: &str = "Model loaded! Lift your hand to change background color.";
