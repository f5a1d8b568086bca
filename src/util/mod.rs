pub mod counter;
pub mod dom;
pub mod easing;
pub mod effects;
pub mod frame_gate;
pub mod frames;
pub mod preference_store;
