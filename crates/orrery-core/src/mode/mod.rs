pub mod controller;
pub mod detect;
pub mod profile;

pub use controller::{ModeController, RootState, SessionEvent};
pub use detect::{classify, SessionDescriptor, SessionKind};
pub use profile::{ModeProfiles, PresentationMode, PresentationProfile, ScaleTuning};
