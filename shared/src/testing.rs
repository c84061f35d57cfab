//! In-memory doubles of the host engine for unit tests.

use std::{cell::RefCell, sync::Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{
    actor::{MarkerObject, ModelView, ParkourHost, PlayerActor, RegionId},
    collision::{CollisionLayer, PhysicsWorld, PickHit},
    math::{Direction3, Point3, SurfaceNormal},
    scene::{NodeTree, SceneGraph},
};

#[derive(Clone, Debug)]
struct TestBox {
    min: Point3,
    max: Point3,
    layer: CollisionLayer,
    top_normal: Option<SurfaceNormal>,
}

/// Axis-aligned boxes with exact slab ray tests. Coordinates are physics units.
#[derive(Clone, Debug)]
pub struct BoxWorld {
    boxes: Vec<TestBox>,
    world_scale: f32,
}

impl BoxWorld {
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            world_scale: 1.0,
        }
    }

    /// Large ground slab whose top is at z = 0.
    pub fn with_ground(self) -> Self {
        self.with_box(
            Point3::new(-10_000.0, -10_000.0, -1000.0),
            Point3::new(10_000.0, 10_000.0, 0.0),
            CollisionLayer::Ground,
        )
    }

    pub fn with_box(mut self, min: Point3, max: Point3, layer: CollisionLayer) -> Self {
        self.boxes.push(TestBox {
            min,
            max,
            layer,
            top_normal: None,
        });
        self
    }

    /// Box whose top face reports `top_normal` instead of +Z.
    pub fn with_sloped_box(
        mut self,
        min: Point3,
        max: Point3,
        layer: CollisionLayer,
        top_normal: SurfaceNormal,
    ) -> Self {
        self.boxes.push(TestBox {
            min,
            max,
            layer,
            top_normal: Some(top_normal),
        });
        self
    }

    pub fn with_world_scale(mut self, world_scale: f32) -> Self {
        self.world_scale = world_scale;
        self
    }
}

impl Default for BoxWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry fraction and normal of the segment `from + t * d`, `t` in `[0, 1]`.
fn slab_hit(b: &TestBox, from: &Point3, d: &Direction3) -> Option<(f32, SurfaceNormal)> {
    let mut t_enter = 0.0_f32;
    let mut t_exit = 1.0_f32;
    let mut normal = None;

    for axis in 0..3 {
        let (o, dir, lo, hi) = (from[axis], d[axis], b.min[axis], b.max[axis]);
        if dir == 0.0 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }

        let (mut t0, mut t1) = ((lo - o) / dir, (hi - o) / dir);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            let mut n = SurfaceNormal::zeros();
            n[axis] = -dir.signum();
            normal = Some(n);
        }
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    let normal = match normal {
        // Started inside the box.
        None => -d.normalize(),
        Some(n) if n.z > 0.0 => b.top_normal.unwrap_or(n),
        Some(n) => n,
    };
    Some((t_enter, normal))
}

impl PhysicsWorld for BoxWorld {
    fn world_scale(&self) -> f32 {
        self.world_scale
    }

    fn pick(&self, from: Point3, to: Point3, query_layer: CollisionLayer) -> Option<PickHit> {
        let mask = query_layer.collides_with();
        let d = to - from;

        self.boxes
            .iter()
            .filter(|b| mask.has(b.layer))
            .filter_map(|b| slab_hit(b, &from, &d).map(|(t, n)| (t, n, b.layer)))
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(fraction, normal, layer)| PickHit {
                fraction,
                normal,
                filter_info: layer.filter_info(0),
            })
    }
}

/// Player double. Defaults to standing at the origin in region 1 with no models.
#[derive(Clone, Debug)]
pub struct TestPlayer {
    pub position: Point3,
    pub region: RegionId,
    pub swimming: bool,
    pub loaded: bool,
    pub third_person: Option<NodeTree>,
    pub first_person: Option<NodeTree>,
}

impl Default for TestPlayer {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            region: RegionId(1),
            swimming: false,
            loaded: true,
            third_person: None,
            first_person: None,
        }
    }
}

impl TestPlayer {
    pub fn unloaded(mut self) -> Self {
        self.loaded = false;
        self
    }

    pub fn with_third_person(mut self, tree: NodeTree) -> Self {
        self.third_person = Some(tree);
        self
    }

    pub fn with_first_person(mut self, tree: NodeTree) -> Self {
        self.first_person = Some(tree);
        self
    }

    pub fn at(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    pub fn swimming(mut self) -> Self {
        self.swimming = true;
        self
    }
}

impl PlayerActor for TestPlayer {
    fn position(&self) -> Point3 {
        self.position
    }

    fn region(&self) -> RegionId {
        self.region
    }

    fn is_swimming(&self) -> bool {
        self.swimming
    }

    fn is_3d_loaded(&self) -> bool {
        self.loaded
    }

    fn model(&self, view: ModelView) -> Option<&dyn SceneGraph> {
        let tree = match view {
            ModelView::ThirdPerson => self.third_person.as_ref(),
            ModelView::FirstPerson => self.first_person.as_ref(),
        };
        tree.map(|t| t as &dyn SceneGraph)
    }
}

/// Marker double that records every write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestMarker {
    pub region: Option<RegionId>,
    pub position: Option<Point3>,
    pub yaw: Option<f32>,
    pub moves: u32,
}

impl TestMarker {
    /// Vault, mid, high and indicator markers, all unplaced.
    pub fn quad() -> (Self, Self, Self, Self) {
        Default::default()
    }

    /// Same as [`TestMarker::quad`], as an array in the same order.
    pub fn array() -> [Self; 4] {
        Default::default()
    }

    pub fn is_untouched(&self) -> bool {
        self.position.is_none() && self.yaw.is_none() && self.moves == 0
    }
}

impl MarkerObject for TestMarker {
    fn region(&self) -> Option<RegionId> {
        self.region
    }

    fn move_to(&mut self, region: RegionId, position: Point3) {
        self.region = Some(region);
        self.position = Some(position);
        self.moves += 1;
    }

    fn set_position(&mut self, position: Point3) {
        self.position = Some(position);
    }

    fn set_yaw(&mut self, yaw: f32) {
        self.yaw = Some(yaw);
    }
}

/// Host double with one physics world shared by every region.
pub struct TestHost {
    pub player: Option<TestPlayer>,
    pub camera: Option<Direction3>,
    pub world: Option<Box<dyn PhysicsWorld>>,
    pub jump_toggles: Vec<bool>,
}

impl TestHost {
    pub fn new(player: TestPlayer, world: Box<dyn PhysicsWorld>) -> Self {
        Self {
            player: Some(player),
            camera: None,
            world: Some(world),
            jump_toggles: Vec::new(),
        }
    }

    pub fn without_world(player: TestPlayer) -> Self {
        Self {
            player: Some(player),
            camera: None,
            world: None,
            jump_toggles: Vec::new(),
        }
    }

    pub fn with_camera(mut self, forward: Direction3) -> Self {
        self.camera = Some(forward);
        self
    }

    pub fn without_player(mut self) -> Self {
        self.player = None;
        self
    }
}

impl ParkourHost for TestHost {
    fn player(&self) -> Option<&dyn PlayerActor> {
        self.player.as_ref().map(|p| p as &dyn PlayerActor)
    }

    fn camera_forward(&self) -> Option<Direction3> {
        self.camera
    }

    fn physics_world(&self, _region: RegionId) -> Option<&dyn PhysicsWorld> {
        self.world.as_deref()
    }

    fn set_jumping_enabled(&mut self, enabled: bool) {
        self.jump_toggles.push(enabled);
    }
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

/// Records log lines emitted on the thread that is inside [`capture_logs`].
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            if let Some(lines) = captured.borrow_mut().as_mut() {
                lines.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Run `f` and return what it logged on this thread, with levels.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    INSTALL_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    let out = f();
    let lines = CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default());
    (out, lines)
}
