//! Camera state driven by input.
//!
//! `ViewState` is the pan/zoom pair read by the renderer once per frame.
//! `DragState` tracks an in-progress click-and-drag gesture.
//!
//! Pan is accumulated in raw logical pixels. Screen space is +Y down while
//! the view shader is +Y up, so callers translating a cursor drag subtract
//! the X delta and add the Y delta (see [`ViewState::apply_drag`]).

mod drag;
mod state;

pub use drag::DragState;
pub use state::{ViewState, ZOOM_FLOOR, ZOOM_STEP};
