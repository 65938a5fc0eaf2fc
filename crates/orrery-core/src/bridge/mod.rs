pub mod frame;
pub mod protocol;

pub use frame::{build_frame, FrameBuffer};
pub use protocol::{BodyInstance, FrameLayout};
