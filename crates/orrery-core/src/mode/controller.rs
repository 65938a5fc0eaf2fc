use glam::Vec3;

use crate::mode::detect::{classify, SessionDescriptor, SessionKind};
use crate::mode::profile::{ModeProfiles, PresentationMode, PresentationProfile, ScaleTuning};

/// The root transform of the whole system: one scalar scale (isotropy by
/// construction) and a translation. Every body renders relative to this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootState {
    pub scale: f32,
    pub position: Vec3,
}

/// Present only while a drag gesture is live.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Rigid offset between the root and the picking device at grab time.
    offset: Vec3,
}

/// Session lifecycle events delivered by the host XR runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// An immersive session started; the descriptor carries whatever kind
    /// signals the host managed to collect.
    Started(SessionDescriptor),
    /// The immersive session ended.
    Ended,
    /// Explicit user gesture asking to flip VR <-> AR while presenting.
    ToggleKind,
}

/// Tracks the current presentation mode and reconciles the root transform
/// across transitions, joystick scaling, and drag repositioning.
///
/// All methods run inside the single per-frame callback; root mutations are
/// applied before the kinematics pass reads the transform, so a frame never
/// renders a half-updated state.
pub struct ModeController {
    mode: PresentationMode,
    root: RootState,
    saved: Option<RootState>,
    drag: Option<DragState>,
    profiles: ModeProfiles,
    tuning: ScaleTuning,
    /// Modes in which a grab may start. AR-only in the default policy.
    drag_modes: Vec<PresentationMode>,
}

impl ModeController {
    pub fn new(profiles: ModeProfiles, tuning: ScaleTuning, drag_modes: Vec<PresentationMode>) -> Self {
        let desktop = profiles.desktop;
        Self {
            mode: PresentationMode::Desktop,
            root: RootState {
                scale: desktop.scale,
                position: desktop.position,
            },
            saved: None,
            drag: None,
            profiles,
            tuning,
            drag_modes,
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn root(&self) -> RootState {
        self.root
    }

    pub fn is_presenting(&self) -> bool {
        self.mode.is_xr()
    }

    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// The profile belonging to the current mode.
    pub fn active_profile(&self) -> &PresentationProfile {
        self.profiles.get(self.mode)
    }

    /// Sun-light values consistent with the current mode and scale.
    pub fn light_values(&self) -> (f32, f32) {
        self.active_profile().light_for_scale(self.root.scale)
    }

    /// Drive the mode state machine with one host event.
    pub fn handle_session(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Started(desc) => self.on_session_start(&desc),
            SessionEvent::Ended => self.on_session_end(),
            SessionEvent::ToggleKind => self.on_toggle_kind(),
        }
    }

    fn on_session_start(&mut self, desc: &SessionDescriptor) {
        let target = match classify(desc) {
            SessionKind::Ar => PresentationMode::Ar,
            SessionKind::Vr => PresentationMode::Vr,
        };
        if self.is_presenting() {
            // A start while already presenting is a kind change; the
            // original desktop snapshot stays authoritative for exit.
            log::warn!("session start while presenting, switching kind to {target:?}");
            self.switch_to(target);
            return;
        }
        self.saved = Some(self.root);
        self.switch_to(target);
    }

    fn on_session_end(&mut self) {
        // A session end mid-drag must not leave an orphaned grab behind.
        self.drag = None;
        if let Some(saved) = self.saved.take() {
            self.root = saved;
        }
        log::info!("presentation mode: {:?} -> Desktop", self.mode);
        self.mode = PresentationMode::Desktop;
    }

    fn on_toggle_kind(&mut self) {
        let target = match self.mode {
            PresentationMode::Vr => PresentationMode::Ar,
            PresentationMode::Ar => PresentationMode::Vr,
            // Toggling only means something while presenting.
            PresentationMode::Desktop => return,
        };
        self.switch_to(target);
    }

    /// Apply the target mode's profile to the root. The snapshot is NOT
    /// touched here; only session start/end manage it.
    fn switch_to(&mut self, target: PresentationMode) {
        let profile = *self.profiles.get(target);
        log::info!("presentation mode: {:?} -> {:?}", self.mode, target);
        self.mode = target;
        self.root.scale = profile.scale;
        self.root.position = profile.position;
    }

    /// Integrate one joystick sample into the root scale.
    ///
    /// Multiplicative on purpose: zoom speed stays proportional to current
    /// size, so large systems don't run away and tiny ones still move.
    /// Sign is inverted so pushing forward (negative axis) enlarges.
    pub fn apply_scale_delta(&mut self, axis: f32) {
        if !axis.is_finite() {
            // One bad sample must not corrupt accumulated scale state.
            return;
        }
        if axis.abs() < self.tuning.deadzone {
            return;
        }
        let next = self.root.scale * (1.0 + (-axis * self.tuning.scale_rate));
        self.root.scale = next.clamp(self.tuning.min_scale, self.tuning.max_scale);
    }

    /// Start a drag if the pick landed on a grab target and the current
    /// mode admits dragging. Returns whether the drag actually began.
    pub fn begin_drag(&mut self, device_pos: Vec3, on_target: bool) -> bool {
        if !on_target || !self.drag_modes.contains(&self.mode) {
            return false;
        }
        self.drag = Some(DragState {
            offset: self.root.position - device_pos,
        });
        true
    }

    /// Rigid-offset follow while dragging; no physics, no inertia.
    pub fn update_drag(&mut self, device_pos: Vec3) {
        if let Some(drag) = &self.drag {
            self.root.position = device_pos + drag.offset;
        }
    }

    /// End the drag. No snapping or animation back.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::detect::FEATURE_PLANE_DETECTION;

    fn ar_started() -> SessionEvent {
        SessionEvent::Started(SessionDescriptor::from_wire("immersive-ar", "", 0))
    }

    fn vr_started() -> SessionEvent {
        SessionEvent::Started(SessionDescriptor::from_wire("immersive-vr", "", 0))
    }

    fn controller() -> ModeController {
        ModeController::new(
            ModeProfiles::default(),
            ScaleTuning::default(),
            vec![PresentationMode::Ar],
        )
    }

    #[test]
    fn starts_on_desktop_profile() {
        let c = controller();
        assert_eq!(c.mode(), PresentationMode::Desktop);
        assert_eq!(c.root().scale, 1.0);
        assert_eq!(c.root().position, Vec3::ZERO);
    }

    #[test]
    fn entering_ar_applies_profile_and_exit_restores_exactly() {
        let mut c = controller();
        let before = c.root();

        c.handle_session(ar_started());
        assert_eq!(c.mode(), PresentationMode::Ar);
        assert_eq!(c.root().scale, 0.02);
        assert_eq!(c.root().position, Vec3::new(0.0, -0.15, -0.5));

        c.handle_session(SessionEvent::Ended);
        assert_eq!(c.mode(), PresentationMode::Desktop);
        // Exact restore, not approximate
        assert_eq!(c.root(), before);
    }

    #[test]
    fn vr_round_trip_restores_scale_and_position() {
        let mut c = controller();
        let before = c.root();
        c.handle_session(vr_started());
        c.handle_session(SessionEvent::Ended);
        assert_eq!(c.root(), before);
    }

    #[test]
    fn toggle_flips_kind_without_touching_snapshot() {
        let mut c = controller();
        let desktop = c.root();

        c.handle_session(vr_started());
        c.handle_session(SessionEvent::ToggleKind);
        assert_eq!(c.mode(), PresentationMode::Ar);
        assert_eq!(c.root().scale, 0.02);

        c.handle_session(SessionEvent::ToggleKind);
        assert_eq!(c.mode(), PresentationMode::Vr);

        // The original desktop snapshot still governs the eventual exit
        c.handle_session(SessionEvent::Ended);
        assert_eq!(c.root(), desktop);
    }

    #[test]
    fn toggle_on_desktop_is_a_no_op() {
        let mut c = controller();
        c.handle_session(SessionEvent::ToggleKind);
        assert_eq!(c.mode(), PresentationMode::Desktop);
    }

    #[test]
    fn capability_only_session_enters_ar() {
        let mut c = controller();
        c.handle_session(SessionEvent::Started(SessionDescriptor::from_wire(
            "",
            "",
            FEATURE_PLANE_DETECTION,
        )));
        assert_eq!(c.mode(), PresentationMode::Ar);
    }

    #[test]
    fn scale_delta_below_deadzone_is_bit_exact_no_op() {
        let mut c = controller();
        let before = c.root().scale;
        c.apply_scale_delta(0.1);
        c.apply_scale_delta(-0.149_999);
        assert_eq!(c.root().scale.to_bits(), before.to_bits());
    }

    #[test]
    fn full_deflection_zoom_compounds_multiplicatively() {
        let mut c = controller();
        // Push forward at full deflection: each sample multiplies by 1.01
        c.apply_scale_delta(-1.0);
        assert!((c.root().scale - 1.01).abs() < 1e-6);

        for _ in 0..99 {
            c.apply_scale_delta(-1.0);
        }
        // 1.01^100 ≈ 2.7048
        assert!((c.root().scale - 1.01_f32.powi(100)).abs() < 1e-3);
    }

    #[test]
    fn scale_never_leaves_bounds() {
        let mut c = controller();
        for _ in 0..10_000 {
            c.apply_scale_delta(-1.0);
        }
        assert_eq!(c.root().scale, 10.0);

        for _ in 0..10_000 {
            c.apply_scale_delta(1.0);
        }
        assert_eq!(c.root().scale, 0.01);
    }

    #[test]
    fn nan_and_infinite_samples_are_ignored() {
        let mut c = controller();
        let before = c.root().scale;
        c.apply_scale_delta(f32::NAN);
        c.apply_scale_delta(f32::INFINITY);
        c.apply_scale_delta(f32::NEG_INFINITY);
        assert_eq!(c.root().scale.to_bits(), before.to_bits());
    }

    #[test]
    fn drag_requires_grab_target() {
        let mut c = controller();
        c.handle_session(ar_started());
        assert!(!c.begin_drag(Vec3::new(1.0, 0.0, 0.0), false));
        assert!(!c.drag_active());

        // A stray move after the refused grab must not reposition anything
        let pos = c.root().position;
        c.update_drag(Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(c.root().position, pos);
    }

    #[test]
    fn drag_is_gated_by_mode_policy() {
        let mut c = controller();
        c.handle_session(vr_started());
        assert!(!c.begin_drag(Vec3::ZERO, true));

        c.handle_session(SessionEvent::ToggleKind); // now AR
        assert!(c.begin_drag(Vec3::ZERO, true));
    }

    #[test]
    fn drag_follows_with_rigid_offset() {
        let mut c = controller();
        c.handle_session(ar_started());
        let root_start = c.root().position;
        let device = Vec3::new(0.1, 0.0, -0.2);
        assert!(c.begin_drag(device, true));

        c.update_drag(device + Vec3::new(0.3, 0.1, 0.0));
        assert_eq!(c.root().position, root_start + Vec3::new(0.3, 0.1, 0.0));

        c.end_drag();
        assert!(!c.drag_active());
    }

    #[test]
    fn session_end_clears_mid_flight_drag() {
        let mut c = controller();
        c.handle_session(ar_started());
        assert!(c.begin_drag(Vec3::ZERO, true));

        c.handle_session(SessionEvent::Ended);
        assert!(!c.drag_active());
        assert_eq!(c.mode(), PresentationMode::Desktop);
    }

    #[test]
    fn light_values_follow_current_scale() {
        let mut c = controller();
        c.handle_session(vr_started());
        let (i0, _) = c.light_values();
        c.apply_scale_delta(1.0); // shrink
        let (i1, _) = c.light_values();
        assert!(i1 < i0);
    }
}
