mod ui;
mod viewport;

pub use ui::{UIState, Warning};
pub use viewport::ViewportState;
