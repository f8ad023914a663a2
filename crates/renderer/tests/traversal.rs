//! Traversal tests against recording and fault-injecting backends.

use glam::{Mat4, Vec3};

use campus_renderer::{
    DrawGroup, FaultPlan, RecordingBackend, SceneComposer, SceneState, Viewer, ViewerConfig,
};
use campus_scene::layout::{
    CHIMNEY_ORIGIN, DOOR_HALF_WIDTH, DOOR_HINGE, GATE_HALF_WIDTH, GATE_HINGE, MAIN_BUILDING_ORIGIN,
};
use campus_scene::{
    Action, Color, DrawError, DrawResult, HingeConfig, HingeState, MeshKind, StartPose, Transform,
};

const EPSILON: f32 = 1e-4;

fn origin_of(model: Mat4) -> Vec3 {
    model.transform_point3(Vec3::ZERO)
}

fn clean_draw_count(group: DrawGroup) -> u32 {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::new();
    let report = composer.render_group(group, Transform::IDENTITY, &HingeState::default(), &mut backend);
    assert_eq!(report.result, Ok(()), "{} failed without faults", group.name());
    report.draw_calls
}

#[test]
fn test_failure_at_any_draw_leaves_stack_balanced() {
    for group in DrawGroup::ALL {
        let total = clean_draw_count(group);
        assert!(total > 0, "{} draws nothing", group.name());

        for fail_at in 0..total {
            let mut composer = SceneComposer::default();
            let mut seen = 0;
            let mut backend = |_: MeshKind, _: Color, _: &Transform| -> DrawResult {
                let attempt = seen;
                seen += 1;
                if attempt == fail_at {
                    Err(DrawError::Backend("injected".into()))
                } else {
                    Ok(())
                }
            };

            let report =
                composer.render_group(group, Transform::IDENTITY, &HingeState::default(), &mut backend);

            assert!(report.result.is_err());
            assert_eq!(report.draw_calls, fail_at);
            assert_eq!(report.depth_after, 0);
            assert!(
                composer.stack_counters().is_balanced(),
                "{} unbalanced after failing draw {}",
                group.name(),
                fail_at
            );
        }
    }
}

#[test]
fn test_unavailable_prism_only_skips_roofs() {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::with_faults(FaultPlan {
        unavailable_mesh: Some(MeshKind::Prism),
        ..FaultPlan::default()
    });

    let stats = composer.render(Transform::IDENTITY, &HingeState::default(), &mut backend);

    assert_eq!(stats.groups_failed, 1);
    assert_eq!(stats.groups_drawn as usize, DrawGroup::ALL.len() - 1);
    assert!(stats.is_balanced());
    assert_eq!(backend.count_mesh(MeshKind::Prism), 0);
    assert!(backend.count_mesh(MeshKind::Cube) > 0);
}

#[test]
fn test_unavailable_cube_fails_every_group_but_roofs() {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::with_faults(FaultPlan {
        unavailable_mesh: Some(MeshKind::Cube),
        ..FaultPlan::default()
    });

    for group in DrawGroup::ALL {
        let report = composer.render_group(group, Transform::IDENTITY, &HingeState::default(), &mut backend);
        assert_eq!(report.depth_after, 0, "{} left frames behind", group.name());
        if group == DrawGroup::Roofs {
            assert_eq!(report.result, Ok(()));
        } else {
            assert_eq!(report.result, Err(DrawError::MeshUnavailable(MeshKind::Cube)));
            assert_eq!(report.draw_calls, 0);
        }
    }
    assert!(composer.stack_counters().is_balanced());

    let stats = composer.render(Transform::IDENTITY, &HingeState::default(), &mut backend);
    assert_eq!(stats.groups_failed, 12);
    assert_eq!(stats.groups_drawn, 1);
    assert!(stats.is_balanced());
    assert_eq!(stats.draw_calls, 3);
}

#[test]
fn test_full_scene_draw_counts() {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::new();
    let stats = composer.render(Transform::IDENTITY, &HingeState::default(), &mut backend);

    assert_eq!(stats.draw_calls, 148);
    assert_eq!(backend.commands().len(), 148);
    assert_eq!(backend.count_mesh(MeshKind::Prism), 3);
    assert_eq!(clean_draw_count(DrawGroup::Windows), 26);
    assert_eq!(clean_draw_count(DrawGroup::Gate), 12);
}

#[test]
fn test_chimney_pipe_nests_under_building_and_chimney() {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::new();
    composer.render_group(
        DrawGroup::MainBuilding,
        Transform::IDENTITY,
        &HingeState::default(),
        &mut backend,
    );

    let pipe = backend.commands().last().copied().unwrap();
    assert_eq!(pipe.color, Color::DarkGrey);
    let expected = MAIN_BUILDING_ORIGIN + CHIMNEY_ORIGIN + Vec3::new(0.0, 1.4, 0.0);
    assert!((origin_of(pipe.uniforms.model) - expected).length() < EPSILON);
}

#[test]
fn test_closed_gate_spans_the_opening() {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::new();
    composer.render_group(DrawGroup::Gate, Transform::IDENTITY, &HingeState::default(), &mut backend);

    // Posts first, then the top rail
    let rail = backend.commands()[2];
    assert_eq!(rail.color, Color::Grey);
    let expected = GATE_HINGE + Vec3::new(GATE_HALF_WIDTH, 0.6, 0.0);
    assert!((origin_of(rail.uniforms.model) - expected).length() < EPSILON);
}

#[test]
fn test_open_door_swings_out_about_its_hinge() {
    let config = HingeConfig::default();
    let hinges = HingeState {
        gate: 0.0,
        door: config.min,
    };
    let mut composer = SceneComposer::new(config.clone());
    let mut backend = RecordingBackend::new();
    composer.render_group(DrawGroup::Doors, Transform::IDENTITY, &hinges, &mut backend);

    let panel = backend.commands()[0];
    assert_eq!(panel.color, Color::Brown);

    let angle = config.min;
    let reach = DOOR_HALF_WIDTH + config.slide_offset(angle);
    let expected = DOOR_HINGE + Vec3::new(angle.cos() * reach, 0.0, -angle.sin() * reach);
    let center = origin_of(panel.uniforms.model);
    assert!((center - expected).length() < EPSILON, "got {center:?}, expected {expected:?}");
    // Swung outward, toward the front of the building
    assert!(center.z > DOOR_HINGE.z);
}

#[test]
fn test_disabled_slide_keeps_panel_on_its_arc() {
    let config = HingeConfig {
        slide_factor: 0.0,
        ..HingeConfig::default()
    };
    let hinges = HingeState {
        gate: -0.7,
        door: 0.0,
    };
    let mut composer = SceneComposer::new(config);
    let mut backend = RecordingBackend::new();
    composer.render_group(DrawGroup::Gate, Transform::IDENTITY, &hinges, &mut backend);

    // Top rail center, half a panel from the hinge line
    let rail = origin_of(backend.commands()[2].uniforms.model);
    let radial = Vec3::new(rail.x - GATE_HINGE.x, 0.0, rail.z - GATE_HINGE.z).length();
    assert!((radial - GATE_HALF_WIDTH).abs() < EPSILON);
}

#[test]
fn test_flat_ground_gets_identity_normals() {
    let mut composer = SceneComposer::default();
    let mut backend = RecordingBackend::new();
    composer.render_group(DrawGroup::Ground, Transform::IDENTITY, &HingeState::default(), &mut backend);

    let ground = backend.commands()[0];
    assert_eq!(ground.color, Color::Green);
    assert_eq!(ground.uniforms.normal_matrix, Mat4::IDENTITY);
}

#[test]
fn test_gate_opens_over_frames() {
    let mut viewer = Viewer::new(&ViewerConfig::default(), 1.0);
    let mut state = SceneState::new(&StartPose::default());
    let mut backend = RecordingBackend::new();
    state.input.on_key_down(Action::ToggleGate);
    state.input.on_key_up(Action::ToggleGate);

    for _ in 0..100 {
        let stats = viewer.tick(&mut state, 1.0 / 60.0, &mut backend);
        assert!(stats.is_complete());
        assert!(stats.is_balanced());
        assert_eq!(stats.draw_calls, 148);
    }
    assert_eq!(state.hinges.gate, HingeConfig::default().min);
    assert_eq!(state.hinges.door, 0.0);
}

#[test]
fn test_root_transform_moves_whole_scene() {
    let offset = Vec3::new(0.0, 5.0, 0.0);
    let mut composer = SceneComposer::default();
    let mut plain = RecordingBackend::new();
    let mut shifted = RecordingBackend::new();

    composer.render(Transform::IDENTITY, &HingeState::default(), &mut plain);
    composer.render(Transform::from_translation(offset), &HingeState::default(), &mut shifted);

    assert_eq!(plain.commands().len(), shifted.commands().len());
    for (a, b) in plain.commands().iter().zip(shifted.commands()) {
        let moved = origin_of(b.uniforms.model) - origin_of(a.uniforms.model);
        assert!((moved - offset).length() < EPSILON);
    }
}
