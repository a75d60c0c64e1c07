//! Headless spatial index demo
//!
//! Two scenes, both driven per frame:
//! - culling: items bounce inside the world box, an octree is rebuilt over
//!   them every frame and culled against an orbiting camera
//! - picking: a static procedural terrain mesh is indexed once and picked
//!   with rays cast from the camera through a sweeping target
//!
//! Usage: galaxy3d_spatial_demo [frames]

use galaxy_3d_spatial::galaxy3d::log::{self, LogSeverity};
use galaxy_3d_spatial::galaxy3d::{
    Aabb, BvhBuilder, Camera, Frustum, IdAllocator, IndexBuilder, Item, Mesh, OctreeBuilder,
    QueryOptions, Ray, Result,
};
use galaxy_3d_spatial::glam::Vec3;
use galaxy_3d_spatial::{spatial_bail, spatial_info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SOURCE: &str = "galaxy3d::Demo";
const DEFAULT_FRAMES: u32 = 60;
const ITEM_COUNT: usize = 2000;
const FRAME_TIME: f32 = 1.0 / 60.0;
const TERRAIN_CELLS: u32 = 64;

fn main() -> Result<()> {
    log::set_min_severity(LogSeverity::Info);

    let frames = parse_frames()?;
    let world = Aabb::new(Vec3::splat(-7.5), Vec3::splat(7.5));

    run_culling(world, frames)?;
    run_picking(frames)?;
    Ok(())
}

fn parse_frames() -> Result<u32> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_FRAMES),
        Some(arg) => match arg.parse::<u32>() {
            Ok(frames) if frames > 0 => Ok(frames),
            _ => spatial_bail!(SOURCE, "frame count must be a positive integer, got '{}'", arg),
        },
    }
}

// ============================================================================
// CULLING
// ============================================================================

/// An item plus the velocity the demo moves it with
struct Bouncer {
    item: Item,
    velocity: Vec3,
}

impl Bouncer {
    /// Move and reflect off the world walls so the box never leaves it
    fn step(&mut self, world: &Aabb, dt: f32) {
        self.item.translate(self.velocity * dt);
        let aabb = *self.item.aabb();
        let mut correction = Vec3::ZERO;
        for axis in 0..3 {
            if aabb.min[axis] < world.min[axis] {
                correction[axis] = world.min[axis] - aabb.min[axis];
                self.velocity[axis] = self.velocity[axis].abs();
            } else if aabb.max[axis] > world.max[axis] {
                correction[axis] = world.max[axis] - aabb.max[axis];
                self.velocity[axis] = -self.velocity[axis].abs();
            }
        }
        if correction != Vec3::ZERO {
            self.item.translate(correction);
        }
    }
}

fn spawn_bouncers(rng: &mut StdRng, ids: &mut IdAllocator, count: usize) -> Vec<Bouncer> {
    (0..count)
        .map(|_| {
            let center = Vec3::new(
                rng.random_range(-6.0..6.0),
                rng.random_range(-6.0..6.0),
                rng.random_range(-6.0..6.0),
            );
            let size = Vec3::splat(rng.random_range(0.05..0.4));
            let velocity = Vec3::new(
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
                rng.random_range(-2.0..2.0),
            );
            Bouncer { item: Item::from_center_size(ids, center, size), velocity }
        })
        .collect()
}

fn orbit_position(frame: u32, radius: f32) -> Vec3 {
    let angle = frame as f32 * 0.05;
    Vec3::new(radius * angle.cos(), 3.0, radius * angle.sin())
}

fn run_culling(world: Aabb, frames: u32) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0x6a1a);
    let mut ids = IdAllocator::new();
    let mut bouncers = spawn_bouncers(&mut rng, &mut ids, ITEM_COUNT);
    let mut camera = Camera::new(orbit_position(0, 14.0), Vec3::ZERO, Vec3::Y, 0.8, 16.0 / 9.0, 0.1, 30.0)?;
    let builder = OctreeBuilder::default();

    spatial_info!(SOURCE, "Culling {} items over {} frames", ids.allocated(), frames);

    let mut total_visible = 0usize;
    for frame in 0..frames {
        for bouncer in &mut bouncers {
            bouncer.step(&world, FRAME_TIME);
        }
        camera.set_look_at(orbit_position(frame, 14.0), Vec3::ZERO)?;

        // Rebuilt from scratch: the index borrows the items immutably
        let items: Vec<Item> = bouncers.iter().map(|b| b.item.clone()).collect();
        let index = builder.build(&items, world);
        let visible = index.query_frustum_with(&Frustum::from_camera(&camera), QueryOptions::LEAF_NODES);
        total_visible += visible.hit_count();

        let leaves_reached = visible.diagnostics.as_ref().map_or(0, |d| d.leaf_nodes.len());
        spatial_info!(
            SOURCE,
            "frame {:>3}: {:>4} visible, {:>5} tests, {}/{} leaves, build {:.3} ms, cull {:.3} ms",
            frame,
            visible.hit_count(),
            visible.primitive_test_count,
            leaves_reached,
            index.leaf_count(),
            index.build_duration_ms(),
            visible.elapsed_ms()
        );
    }

    spatial_info!(
        SOURCE,
        "Culling done: {:.1} visible per frame on average",
        total_visible as f64 / frames as f64
    );
    Ok(())
}

// ============================================================================
// PICKING
// ============================================================================

/// Height field over [-7, 7] x [-7, 7], two triangles per cell
fn terrain(cells: u32) -> Result<Mesh> {
    let extent = 7.0;
    let step = 2.0 * extent / cells as f32;
    let stride = cells + 1;

    let mut vertices = Vec::with_capacity((stride * stride) as usize);
    for j in 0..stride {
        for i in 0..stride {
            let x = -extent + i as f32 * step;
            let z = -extent + j as f32 * step;
            let y = 0.8 * (x * 0.7).sin() * (z * 0.5).cos();
            vertices.push(Vec3::new(x, y, z));
        }
    }

    let mut indices = Vec::with_capacity((cells * cells * 6) as usize);
    for j in 0..cells {
        for i in 0..cells {
            let v0 = j * stride + i;
            let v1 = v0 + 1;
            let v2 = v0 + stride;
            let v3 = v2 + 1;
            // Counter-clockwise seen from +y
            indices.extend_from_slice(&[v0, v2, v1, v1, v2, v3]);
        }
    }

    Mesh::new(vertices, indices)
}

fn run_picking(frames: u32) -> Result<()> {
    let mesh = terrain(TERRAIN_CELLS)?;
    let world = mesh.bounding_box();
    let octree = OctreeBuilder::new(8).build(&mesh, world);
    let bvh = BvhBuilder::new(4).build(&mesh, world);

    spatial_info!(
        SOURCE,
        "Picking on {} faces: octree {} nodes ({} references), bvh {} nodes",
        mesh.face_count(),
        octree.node_count(),
        octree.primitive_reference_count(),
        bvh.node_count()
    );

    let eye = Vec3::new(0.0, 12.0, 12.0);
    let mut hits = 0u32;
    let mut disagreements = 0u32;
    for frame in 0..frames {
        let angle = frame as f32 * 0.1;
        let target = Vec3::new(5.0 * angle.cos(), 0.0, 5.0 * angle.sin());
        let ray = Ray::through(eye, target);

        let picked = octree.query_ray(&ray);
        let checked = bvh.query_ray(&ray);
        if picked.t != checked.t {
            disagreements += 1;
        }

        match (picked.face, picked.hit_point(&ray)) {
            (Some(face), Some(point)) => {
                hits += 1;
                spatial_info!(
                    SOURCE,
                    "frame {:>3}: face {} at ({:.2}, {:.2}, {:.2}), t = {:.3}, {} tests, {:.3} ms",
                    frame,
                    face,
                    point.x,
                    point.y,
                    point.z,
                    picked.t,
                    picked.primitive_test_count,
                    picked.elapsed_ms()
                );
            }
            _ => spatial_info!(
                SOURCE,
                "frame {:>3}: nothing picked, {} tests",
                frame,
                picked.primitive_test_count
            ),
        }
    }

    spatial_info!(
        SOURCE,
        "Picking done: {}/{} hits, {} octree/bvh disagreements",
        hits,
        frames,
        disagreements
    );
    Ok(())
}
