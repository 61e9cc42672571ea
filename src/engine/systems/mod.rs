pub mod frame_clock;
pub mod keyboard_input_system;

pub use frame_clock::{ FrameClock, FrameReport };
pub use keyboard_input_system::{ Key, KeyboardInputSystem };
