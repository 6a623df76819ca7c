pub mod background_controller;
pub mod cyclic_state;
pub mod edge_debouncer;
