//! AR-vs-VR session-kind detection.
//!
//! Headset/browser combinations expose "AR-ness" through different,
//! inconsistently implemented signals, so classification walks an ordered
//! list from most to least authoritative and defaults to VR (never an
//! error) when nothing is conclusive.

/// Capability bit flags the host packs into the session-start call.
pub const FEATURE_PLANE_DETECTION: u32 = 1 << 0;
pub const FEATURE_ANCHORS: u32 = 1 << 1;
pub const FEATURE_CAMERA_ACCESS: u32 = 1 << 2;

/// Environment blend modes that indicate real-world passthrough.
const AR_BLEND_MODES: [&str; 2] = ["additive", "alpha-blend"];

/// Everything the host told us about a freshly started XR session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDescriptor {
    /// Explicit session mode string ("immersive-ar", "immersive-vr"), if the
    /// host labeled the session at all.
    pub session_mode: Option<String>,
    /// Environment blend mode ("opaque", "additive", "alpha-blend").
    pub blend_mode: Option<String>,
    /// Session supports plane detection (AR-only capability).
    pub plane_detection: bool,
    /// Session supports spatial anchors (AR-only capability).
    pub anchors: bool,
    /// Session grants camera passthrough access (AR-only capability).
    pub camera_access: bool,
}

impl SessionDescriptor {
    /// Build a descriptor from the flat values crossing the WASM boundary.
    /// Empty strings mean the host did not report that signal.
    pub fn from_wire(session_mode: &str, blend_mode: &str, feature_bits: u32) -> Self {
        Self {
            session_mode: (!session_mode.is_empty()).then(|| session_mode.to_owned()),
            blend_mode: (!blend_mode.is_empty()).then(|| blend_mode.to_owned()),
            plane_detection: feature_bits & FEATURE_PLANE_DETECTION != 0,
            anchors: feature_bits & FEATURE_ANCHORS != 0,
            camera_access: feature_bits & FEATURE_CAMERA_ACCESS != 0,
        }
    }

    fn has_ar_capability(&self) -> bool {
        self.plane_detection || self.anchors || self.camera_access
    }
}

/// The two immersive session kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Vr,
    Ar,
}

/// Classify a session descriptor, most-authoritative signal first:
/// 1. explicit "immersive-ar" / "immersive-vr" label,
/// 2. AR-indicating environment blend mode,
/// 3. any AR-only capability,
/// 4. default VR.
pub fn classify(desc: &SessionDescriptor) -> SessionKind {
    match desc.session_mode.as_deref() {
        Some("immersive-ar") => return SessionKind::Ar,
        Some("immersive-vr") => return SessionKind::Vr,
        _ => {}
    }
    if let Some(blend) = desc.blend_mode.as_deref() {
        if AR_BLEND_MODES.contains(&blend) {
            return SessionKind::Ar;
        }
    }
    if desc.has_ar_capability() {
        return SessionKind::Ar;
    }
    SessionKind::Vr
}
