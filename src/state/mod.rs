pub mod gesture;

pub use gesture::{Gesture, GestureState};
