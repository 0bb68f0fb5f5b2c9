//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s;
//! `dispatch` fans them out to an `InputHandler`.

mod handler;
pub(crate) mod platform;
mod state;
mod types;

pub use handler::{dispatch, InputHandler};
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    MouseWheelDelta,
    PointerButtonEvent,
    PointerMoveEvent,
};
