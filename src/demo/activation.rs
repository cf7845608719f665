//! Decides what the 3D demo area renders: the real scene, a placeholder,
//! an "unsupported" notice, or a manual-activation prompt. Pure state, no
//! DOM access, so the whole decision table is testable on the host.

/// Outcome of the one-time WebGL probe. Resolved at most once per mount.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Capability {
    Unknown,
    Supported,
    Unsupported,
}

/// What the demo container should show right now. Derived, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActivationMode {
    Placeholder,
    Unsupported,
    AwaitingUserActivation,
    Active,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Quality {
    Low,
    High,
}

/// Environment snapshot taken once when the demo mounts. Read-only after
/// construction; the scene uses it to size the particle field and to still
/// the motion effects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderPrefs {
    pub reduced_motion: bool,
    pub quality: Quality,
}

/// Viewports narrower than this get the low particle budget.
pub const QUALITY_WIDTH_CUTOFF: f64 = 768.0;

impl RenderPrefs {
    pub fn from_environment(reduced_motion: bool, viewport_width: f64) -> Self {
        let quality = if viewport_width < QUALITY_WIDTH_CUTOFF {
            Quality::Low
        } else {
            Quality::High
        };
        Self {
            reduced_motion,
            quality,
        }
    }
}

impl Default for RenderPrefs {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            quality: Quality::High,
        }
    }
}

/// The activation controller. `visible` and `user_activated` only ever go
/// from false to true; the capability result is first-write-wins. Once
/// `mode()` returns `Active` it stays `Active` for the component lifetime.
#[derive(Clone, PartialEq, Debug)]
pub struct ActivationState {
    capability: Capability,
    visible: bool,
    user_activated: bool,
    prefs: RenderPrefs,
}

impl ActivationState {
    pub fn new(prefs: RenderPrefs) -> Self {
        Self {
            capability: Capability::Unknown,
            visible: false,
            user_activated: false,
            prefs,
        }
    }

    /// Record the probe outcome. Repeated calls keep the first result.
    pub fn resolve(&mut self, supported: bool) {
        if self.capability == Capability::Unknown {
            self.capability = if supported {
                Capability::Supported
            } else {
                Capability::Unsupported
            };
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// The observed element entered the viewport. Monotonic.
    pub fn mark_visible(&mut self) {
        self.visible = true;
    }

    /// User pressed the activation affordance. Accepted even before the
    /// element is visible; a no-op when the capability is unsupported.
    pub fn activate(&mut self) {
        if self.capability != Capability::Unsupported {
            self.user_activated = true;
        }
    }

    pub fn mode(&self) -> ActivationMode {
        match self.capability {
            Capability::Unsupported => ActivationMode::Unsupported,
            Capability::Unknown => ActivationMode::Placeholder,
            Capability::Supported => {
                if self.visible || self.user_activated {
                    ActivationMode::Active
                } else {
                    ActivationMode::AwaitingUserActivation
                }
            }
        }
    }

    /// The single mount signal handed to the renderer.
    pub fn should_render(&self) -> bool {
        self.mode() == ActivationMode::Active
    }

    /// Observation is only worth starting once the probe confirmed support
    /// and the flag has not fired yet.
    pub fn wants_observation(&self) -> bool {
        self.capability == Capability::Supported && !self.visible
    }

    pub fn prefs(&self) -> RenderPrefs {
        self.prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supported_state() -> ActivationState {
        let mut state = ActivationState::new(RenderPrefs::default());
        state.resolve(true);
        state
    }

    #[test]
    fn test_initial_mode_is_placeholder() {
        let state = ActivationState::new(RenderPrefs::default());
        assert_eq!(state.mode(), ActivationMode::Placeholder);
        assert!(!state.should_render());
        assert!(!state.wants_observation());
    }

    #[test]
    fn test_capability_resolves_once() {
        let mut state = ActivationState::new(RenderPrefs::default());
        state.resolve(true);
        assert_eq!(state.capability(), Capability::Supported);
        // A contradictory second probe result is ignored.
        state.resolve(false);
        assert_eq!(state.capability(), Capability::Supported);
        assert_eq!(state.mode(), ActivationMode::AwaitingUserActivation);
    }

    #[test]
    fn test_unsupported_overrides_everything() {
        // All four (visible, user_activated) combinations.
        for (visible, activated) in [(false, false), (true, false), (false, true), (true, true)] {
            let mut state = ActivationState::new(RenderPrefs::default());
            state.resolve(false);
            if visible {
                state.mark_visible();
            }
            if activated {
                state.activate();
            }
            assert_eq!(state.mode(), ActivationMode::Unsupported);
            assert!(!state.should_render());
            assert!(!state.wants_observation());
        }
    }

    #[test]
    fn test_supported_but_idle_awaits_activation() {
        let state = supported_state();
        assert_eq!(state.mode(), ActivationMode::AwaitingUserActivation);
        assert!(!state.should_render());
        assert!(state.wants_observation());
    }

    #[test]
    fn test_visibility_activates() {
        let mut state = supported_state();
        state.mark_visible();
        assert_eq!(state.mode(), ActivationMode::Active);
        assert!(state.should_render());
        assert!(!state.wants_observation());
    }

    #[test]
    fn test_manual_activation_before_visibility() {
        // The user may force-start the scene before it scrolls into view;
        // the mount is permanent from then on.
        let mut state = supported_state();
        state.activate();
        assert_eq!(state.mode(), ActivationMode::Active);
        assert!(state.should_render());

        state.mark_visible();
        assert_eq!(state.mode(), ActivationMode::Active);
        assert!(state.should_render());
    }

    #[test]
    fn test_unsupported_never_reaches_renderer() {
        let mut state = ActivationState::new(RenderPrefs::default());
        state.resolve(false);
        assert!(!state.should_render());
        state.mark_visible();
        state.activate();
        assert!(!state.should_render());
        assert_eq!(state.mode(), ActivationMode::Unsupported);
    }

    #[test]
    fn test_quality_splits_on_viewport_width() {
        let narrow = RenderPrefs::from_environment(false, 480.0);
        assert_eq!(narrow.quality, Quality::Low);
        let wide = RenderPrefs::from_environment(true, 1440.0);
        assert_eq!(wide.quality, Quality::High);
        assert!(wide.reduced_motion);
    }

    #[test]
    fn test_prefs_snapshot_survives_transitions() {
        let prefs = RenderPrefs::from_environment(true, 320.0);
        let mut state = ActivationState::new(prefs);
        state.resolve(true);
        state.activate();
        assert_eq!(state.prefs(), prefs);
    }
}
