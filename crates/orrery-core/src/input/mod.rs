pub mod axes;
pub mod queue;

pub use axes::{pick_scale_axis, DEFAULT_AXIS_PRIORITY};
pub use queue::{InputEvent, InputQueue};
