pub mod channel_presentation_target;
