pub mod drag;
pub mod events;

// Re-export the essential types
pub use drag::{DragSession, DragState};
pub use events::{EventHandled, PointerEvent, PointerEvents};
