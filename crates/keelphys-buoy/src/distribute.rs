use keelphys_core::{BodyId, Isometry, ForceSink};
use keelphys_fluid::{Fluid, MIN_DIVISOR};
use keelphys_geom::{BodyProfile, sample_points, SAMPLE_POINT_COUNT};
use keelphys_hydro::ForceOutput;
use keelphys_viz::{Ledger, LedgerEvent, PointDraw};

/// Map the aggregate force onto the five-point constellation and push it
/// into the host integrator. The only side-effectful code in the force
/// path.
///
/// Each submerged point receives its share of the total buoyancy, scaled by
/// that point's own submersion factor and divided by the point count so the
/// fully-submerged sum equals the total. Points above the surface receive
/// nothing — no out-of-water thrust. With `share_drag` the drag total is
/// conserved the same way; without it every wet point gets the full drag
/// vector.
pub fn distribute(
    body: BodyId,
    profile: &BodyProfile,
    pose: &Isometry,
    out: &ForceOutput,
    fluid: &Fluid,
    share_drag: bool,
    sink: &mut dyn ForceSink,
    draw: &mut dyn PointDraw,
    ledger: &mut Ledger,
) {
    let inv_n = 1.0 / SAMPLE_POINT_COUNT as f32;
    let reach = profile.height_m.max(MIN_DIVISOR);
    for (i, p_local) in sample_points(profile.half_extents_m).into_iter().enumerate() {
        let p_world = pose.transform_point(p_local);
        let depth = fluid.depth_below_surface(p_world.y);
        if depth <= 0.0 {
            draw.point(p_world, false);
            continue;
        }
        let factor = (depth / reach).clamp(0.0, 1.0);
        let drag_share = if share_drag { out.drag * inv_n } else { out.drag };
        let f_world = out.buoyancy * (factor * inv_n) + drag_share;
        let f_local = pose.inverse_transform_vector(f_world);
        sink.apply_local_force(body, p_local, f_local);
        draw.point(p_world, true);
        ledger.push(LedgerEvent::PointForce {
            body,
            idx: i as u8,
            factor,
            force_n: f_world.length(),
        });
    }
}
