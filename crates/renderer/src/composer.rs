//! Render traversal over the campus draw groups.
//!
//! A frame is a fixed, ordered list of [`DrawGroup`]s. Each group runs inside
//! its own transform scope, so a backend error abandons only the rest of that
//! group: the stack is unwound by the scope guards, the failure is logged, and
//! the traversal moves on to the next group.

use glam::Vec3;
use tracing::{debug, error, warn};

use campus_scene::layout::{
    self, BENCH_BACK, BENCH_LEGS, BENCH_ORIGINS, BENCH_SEAT, BIN_BODY, BIN_LID, BIN_ORIGIN,
    CHIMNEY_ORIGIN, CHIMNEY_PIPE, CHIMNEY_STACK, DOOR_HALF_WIDTH, DOOR_HANDLE, DOOR_HINGE,
    DOOR_PANEL, FENCE_POST, FENCE_RAIL_COLOR, FENCE_RAIL_HEIGHTS, FENCE_RAIL_SECTION, FENCE_RUNS,
    GATE_BAR, GATE_HALF_WIDTH, GATE_HINGE, GATE_POSTS, GATE_RAILS, GROUND, LAMP_ARM,
    LAMP_ARM_ORIGIN, LAMP_HEAD, LAMP_ORIGIN, LAMP_POLE, MAIN_BUILDING_BODY, MAIN_BUILDING_ORIGIN,
    ROADS, ROOF_EDGES, ROOFS, SIDE_BUILDING, SIDE_DOOR, WINDOW_GLASS, WINDOW_SILL, WINDOWS,
};
use campus_scene::{
    DrawResult, HingeConfig, HingeId, HingeState, MeshKind, StackCounters, Transform,
    TransformStack,
};

use crate::backend::DrawPrimitive;
use crate::frame::FrameStats;
use crate::painter::Painter;

/// One independently failing section of the scene, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawGroup {
    Ground,
    Roads,
    MainBuilding,
    SideBuilding,
    Roofs,
    RoofEdges,
    Doors,
    Windows,
    Bin,
    Benches,
    LampPost,
    Fences,
    Gate,
}

impl DrawGroup {
    /// Every group, in traversal order.
    pub const ALL: [DrawGroup; 13] = [
        DrawGroup::Ground,
        DrawGroup::Roads,
        DrawGroup::MainBuilding,
        DrawGroup::SideBuilding,
        DrawGroup::Roofs,
        DrawGroup::RoofEdges,
        DrawGroup::Doors,
        DrawGroup::Windows,
        DrawGroup::Bin,
        DrawGroup::Benches,
        DrawGroup::LampPost,
        DrawGroup::Fences,
        DrawGroup::Gate,
    ];

    /// Name used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            DrawGroup::Ground => "ground",
            DrawGroup::Roads => "roads",
            DrawGroup::MainBuilding => "main_building",
            DrawGroup::SideBuilding => "side_building",
            DrawGroup::Roofs => "roofs",
            DrawGroup::RoofEdges => "roof_edges",
            DrawGroup::Doors => "doors",
            DrawGroup::Windows => "windows",
            DrawGroup::Bin => "bin",
            DrawGroup::Benches => "benches",
            DrawGroup::LampPost => "lamp_post",
            DrawGroup::Fences => "fences",
            DrawGroup::Gate => "gate",
        }
    }

    /// The mesh every part of this group is drawn with.
    pub const fn mesh(self) -> MeshKind {
        match self {
            DrawGroup::Roofs => MeshKind::Prism,
            _ => MeshKind::Cube,
        }
    }

    fn draw<B>(self, p: &mut Painter<'_, B>, hinges: &Hinges<'_>) -> DrawResult
    where
        B: DrawPrimitive + ?Sized,
    {
        p.use_mesh(self.mesh())?;
        match self {
            DrawGroup::Ground => p.part(&GROUND),
            DrawGroup::Roads => p.parts(&ROADS),
            DrawGroup::MainBuilding => draw_main_building(p),
            DrawGroup::SideBuilding => p.part(&SIDE_BUILDING),
            DrawGroup::Roofs => p.parts(&ROOFS),
            DrawGroup::RoofEdges => p.parts(&ROOF_EDGES),
            DrawGroup::Doors => draw_doors(p, hinges),
            DrawGroup::Windows => draw_windows(p),
            DrawGroup::Bin => draw_bin(p),
            DrawGroup::Benches => draw_benches(p),
            DrawGroup::LampPost => draw_lamp_post(p),
            DrawGroup::Fences => draw_fences(p),
            DrawGroup::Gate => draw_gate(p, hinges),
        }
    }
}

/// Hinge angles plus the settings needed to place a swung panel.
struct Hinges<'a> {
    state: &'a HingeState,
    config: &'a HingeConfig,
}

impl Hinges<'_> {
    /// Open a frame at the center of a panel hung on `hinge`.
    ///
    /// The panel swings about the y axis through `hinge`; `half_width` is the
    /// distance from the hinge line to the panel center when closed.
    fn swing<B, F>(
        &self,
        p: &mut Painter<'_, B>,
        id: HingeId,
        hinge: Vec3,
        half_width: f32,
        body: F,
    ) -> DrawResult
    where
        B: DrawPrimitive + ?Sized,
        F: FnOnce(&mut Painter<'_, B>) -> DrawResult,
    {
        let angle = self.state.angle(id);
        let slide = self.config.slide_offset(angle);
        p.nested(|panel| {
            panel.translate(hinge);
            panel.rotate(angle.to_degrees(), Vec3::Y);
            panel.translate(Vec3::new(half_width + slide, 0.0, 0.0));
            body(panel)
        })
    }
}

fn draw_main_building<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>) -> DrawResult {
    p.nested(|building| {
        building.translate(MAIN_BUILDING_ORIGIN);
        building.part(&MAIN_BUILDING_BODY)?;
        building.nested(|chimney| {
            chimney.translate(CHIMNEY_ORIGIN);
            chimney.part(&CHIMNEY_STACK)?;
            chimney.part(&CHIMNEY_PIPE)
        })
    })
}

fn draw_doors<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>, hinges: &Hinges<'_>) -> DrawResult {
    hinges.swing(p, HingeId::Door, DOOR_HINGE, DOOR_HALF_WIDTH, |panel| {
        panel.part(&DOOR_PANEL)?;
        panel.part(&DOOR_HANDLE)
    })?;
    p.part(&SIDE_DOOR)
}

fn draw_windows<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>) -> DrawResult {
    for spot in &WINDOWS {
        p.nested(|window| {
            window.translate(spot.origin);
            window.rotate(spot.facing_degrees, Vec3::Y);
            window.part(&WINDOW_GLASS)?;
            window.part(&WINDOW_SILL)
        })?;
    }
    Ok(())
}

fn draw_bin<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>) -> DrawResult {
    p.nested(|bin| {
        bin.translate(BIN_ORIGIN);
        bin.part(&BIN_BODY)?;
        bin.part(&BIN_LID)
    })
}

fn draw_benches<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>) -> DrawResult {
    for origin in BENCH_ORIGINS {
        p.nested(|bench| {
            bench.translate(origin);
            bench.part(&BENCH_SEAT)?;
            bench.part(&BENCH_BACK)?;
            bench.parts(&BENCH_LEGS)
        })?;
    }
    Ok(())
}

fn draw_lamp_post<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>) -> DrawResult {
    p.nested(|lamp| {
        lamp.translate(LAMP_ORIGIN);
        lamp.part(&LAMP_POLE)?;
        lamp.nested(|arm| {
            arm.translate(LAMP_ARM_ORIGIN);
            arm.part(&LAMP_ARM)?;
            arm.part(&LAMP_HEAD)
        })
    })
}

fn draw_fences<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>) -> DrawResult {
    let (rail_height, rail_depth) = FENCE_RAIL_SECTION;
    for run in &FENCE_RUNS {
        p.nested(|fence| {
            fence.translate(run.start);
            fence.rotate(run.heading_degrees, Vec3::Y);
            for x in layout::fence_post_offsets(run.length) {
                fence.nested(|post| {
                    post.translate(Vec3::new(x, 0.0, 0.0));
                    post.part(&FENCE_POST)
                })?;
            }
            for y in FENCE_RAIL_HEIGHTS {
                fence.nested(|rail| {
                    rail.translate(Vec3::new(run.length / 2.0, y, 0.0));
                    rail.scale(Vec3::new(run.length, rail_height, rail_depth));
                    rail.draw(FENCE_RAIL_COLOR)
                })?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

fn draw_gate<B: DrawPrimitive + ?Sized>(p: &mut Painter<'_, B>, hinges: &Hinges<'_>) -> DrawResult {
    p.parts(&GATE_POSTS)?;
    hinges.swing(p, HingeId::Gate, GATE_HINGE, GATE_HALF_WIDTH, |panel| {
        panel.parts(&GATE_RAILS)?;
        for x in layout::gate_bar_offsets() {
            panel.nested(|bar| {
                bar.translate(Vec3::new(x, 0.0, 0.0));
                bar.part(&GATE_BAR)
            })?;
        }
        Ok(())
    })
}

/// Outcome of drawing a single group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupReport {
    pub group: DrawGroup,
    pub result: DrawResult,
    /// Successful draws before the group finished or failed
    pub draw_calls: u32,
    /// Stack depth once the group's scope closed; always 0 for a sound group
    pub depth_after: usize,
}

/// Walks the draw groups once per frame.
#[derive(Debug)]
pub struct SceneComposer {
    stack: TransformStack,
    hinge_config: HingeConfig,
}

impl Default for SceneComposer {
    fn default() -> Self {
        Self::new(HingeConfig::default())
    }
}

impl SceneComposer {
    /// Create a composer. `hinge_config` supplies the panel slide factor.
    pub fn new(hinge_config: HingeConfig) -> Self {
        Self {
            stack: TransformStack::default(),
            hinge_config,
        }
    }

    /// Push/pop counts of the most recent traversal.
    pub fn stack_counters(&self) -> StackCounters {
        self.stack.counters()
    }

    /// Draw every group, in order, under `root`.
    ///
    /// A failing group is logged and skipped; later groups still draw.
    pub fn render<B>(&mut self, root: Transform, hinges: &HingeState, backend: &mut B) -> FrameStats
    where
        B: DrawPrimitive + ?Sized,
    {
        self.stack.reset(root);
        let mut stats = FrameStats::default();

        for group in DrawGroup::ALL {
            let report = self.run_group(group, hinges, backend);
            stats.draw_calls += report.draw_calls;
            match report.result {
                Ok(()) => stats.groups_drawn += 1,
                Err(err) => {
                    warn!(group = group.name(), %err, "Draw group failed, skipping the rest of it");
                    stats.groups_failed += 1;
                }
            }
        }

        stats.stack = self.stack.counters();
        if !stats.stack.is_balanced() {
            error!(
                pushes = stats.stack.pushes,
                pops = stats.stack.pops,
                "Unbalanced transform stack after traversal"
            );
        }
        debug!(
            groups = stats.groups_drawn,
            failed = stats.groups_failed,
            draws = stats.draw_calls,
            "Scene traversal complete"
        );
        stats
    }

    /// Draw a single group under `root`, starting from a fresh stack.
    pub fn render_group<B>(
        &mut self,
        group: DrawGroup,
        root: Transform,
        hinges: &HingeState,
        backend: &mut B,
    ) -> GroupReport
    where
        B: DrawPrimitive + ?Sized,
    {
        self.stack.reset(root);
        self.run_group(group, hinges, backend)
    }

    fn run_group<B>(
        &mut self,
        group: DrawGroup,
        hinges: &HingeState,
        backend: &mut B,
    ) -> GroupReport
    where
        B: DrawPrimitive + ?Sized,
    {
        let hinges = Hinges {
            state: hinges,
            config: &self.hinge_config,
        };
        let mut draw_calls = 0;
        let result = {
            let mut painter = Painter::new(&mut self.stack, backend, &mut draw_calls);
            painter.nested(|p| group.draw(p, &hinges))
        };

        let depth_after = self.stack.depth();
        if depth_after != 0 {
            error!(
                group = group.name(),
                depth = depth_after,
                "Draw group left frames on the transform stack, unwinding"
            );
            debug_assert_eq!(depth_after, 0, "draw group {} leaked frames", group.name());
            while self.stack.pop().is_ok() {}
        }

        GroupReport {
            group,
            result,
            draw_calls,
            depth_after,
        }
    }
}
