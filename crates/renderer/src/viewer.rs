//! The per-frame driver: input, camera, hinges, then the traversal.

use tracing::{trace, warn};

use campus_scene::{
    CameraState, DirectionalLight, HingeAnimator, HingeConfig, HingeState, InputState,
    NavigationConfig, Navigator, Projection, ProjectionConfig, StartPose, Transform,
};

use crate::backend::DrawPrimitive;
use crate::composer::SceneComposer;
use crate::frame::{FrameCounter, FrameStats};
use crate::ubo::FrameUniforms;

/// Everything that changes from frame to frame.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub camera: CameraState,
    pub hinges: HingeState,
    pub input: InputState,
}

impl SceneState {
    /// Camera at `pose`, both hinges closed, no keys held.
    pub fn new(pose: &StartPose) -> Self {
        Self {
            camera: CameraState::from_pose(pose),
            hinges: HingeState::default(),
            input: InputState::new(),
        }
    }
}

/// Settings for a [`Viewer`].
#[derive(Clone, Debug, Default)]
pub struct ViewerConfig {
    pub navigation: NavigationConfig,
    pub hinge: HingeConfig,
    pub projection: ProjectionConfig,
    pub light: DirectionalLight,
}

/// Advances the scene and renders it, once per frame.
#[derive(Debug)]
pub struct Viewer {
    navigator: Navigator,
    animator: HingeAnimator,
    composer: SceneComposer,
    projection: Projection,
    light: DirectionalLight,
    frames: FrameCounter,
}

impl Viewer {
    /// Create a viewer for a surface with the given aspect ratio.
    pub fn new(config: &ViewerConfig, aspect: f32) -> Self {
        let mut projection = Projection::from_config(&config.projection, 1.0);
        projection.set_aspect(aspect);
        Self {
            navigator: Navigator::new(config.navigation.clone()),
            animator: HingeAnimator::new(config.hinge.clone()),
            composer: SceneComposer::new(config.hinge.clone()),
            projection,
            light: config.light,
            frames: FrameCounter::new(),
        }
    }

    /// Update the projection after a resize. Degenerate sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.projection.set_aspect(width as f32 / height as f32);
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Frame uniforms for the current camera.
    pub fn frame_uniforms(&self, camera: &CameraState) -> FrameUniforms {
        FrameUniforms::new(
            camera.view_matrix(),
            self.projection.matrix(),
            camera.eye,
            self.light,
        )
    }

    /// Run one frame: navigate, animate the hinges, then draw.
    ///
    /// State advances even when the backend refuses the frame, so motion
    /// stays smooth across dropped frames.
    pub fn tick<B>(&mut self, state: &mut SceneState, dt: f32, backend: &mut B) -> FrameStats
    where
        B: DrawPrimitive + ?Sized,
    {
        state.camera = self.navigator.step(&state.camera, &state.input, dt);
        state.hinges = self.animator.step(&state.hinges, &state.input);

        let frame_index = self.frames.advance();
        let uniforms = self.frame_uniforms(&state.camera);
        if let Err(err) = backend.begin_frame(&uniforms) {
            warn!(frame = frame_index, %err, "Backend refused frame, skipping draw");
            return FrameStats {
                frame_index,
                skipped: true,
                ..FrameStats::default()
            };
        }

        let mut stats = self.composer.render(Transform::IDENTITY, &state.hinges, backend);
        stats.frame_index = frame_index;
        trace!(
            frame = frame_index,
            eye = ?state.camera.eye,
            angle = state.camera.angle,
            gate = state.hinges.gate,
            door = state.hinges.door,
            "Frame rendered"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{FaultPlan, RecordingBackend};
    use campus_scene::Action;

    #[test]
    fn test_tick_draws_full_scene() {
        let mut viewer = Viewer::new(&ViewerConfig::default(), 4.0 / 3.0);
        let mut state = SceneState::new(&StartPose::default());
        let mut backend = RecordingBackend::new();

        let stats = viewer.tick(&mut state, 1.0 / 60.0, &mut backend);
        assert_eq!(stats.frame_index, 0);
        assert!(stats.is_complete());
        assert!(stats.is_balanced());
        assert_eq!(backend.commands().len(), stats.draw_calls as usize);
        assert!(backend.frame_uniforms().is_some());
    }

    #[test]
    fn test_tick_advances_camera_and_hinges() {
        let mut viewer = Viewer::new(&ViewerConfig::default(), 1.0);
        let mut state = SceneState::new(&StartPose::default());
        state.input.on_key_down(Action::MoveForward);
        state.input.on_key_down(Action::ToggleGate);
        let mut backend = RecordingBackend::new();

        viewer.tick(&mut state, 1.0 / 60.0, &mut backend);
        assert!(state.camera.eye.x < 30.0);
        assert!(state.hinges.gate < 0.0);
        assert_eq!(state.hinges.door, 0.0);
    }

    #[test]
    fn test_refused_frame_is_skipped_but_state_advances() {
        let mut viewer = Viewer::new(&ViewerConfig::default(), 1.0);
        let mut state = SceneState::new(&StartPose::default());
        state.input.on_key_down(Action::Ascend);
        let mut backend = RecordingBackend::with_faults(FaultPlan {
            fail_frames: true,
            ..FaultPlan::default()
        });

        let stats = viewer.tick(&mut state, 1.0 / 60.0, &mut backend);
        assert!(stats.skipped);
        assert_eq!(stats.draw_calls, 0);
        assert!(backend.commands().is_empty());
        assert!(state.camera.eye.y > 10.0);

        let next = viewer.tick(&mut state, 1.0 / 60.0, &mut backend);
        assert_eq!(next.frame_index, 1);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut viewer = Viewer::new(&ViewerConfig::default(), 1.0);
        viewer.resize(1600, 900);
        viewer.resize(0, 900);
        match viewer.projection() {
            Projection::Perspective { aspect, .. } => {
                assert!((aspect - 16.0 / 9.0).abs() < 1e-6)
            }
            Projection::Orthographic { .. } => panic!("expected perspective"),
        }
    }
}
