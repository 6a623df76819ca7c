pub mod presentation_target;
