use keelphys_buoy::FloatConfig;
use keelphys_core::{vec3, hash::hex32};
use keelphys_fluid::Fluid;
use keelphys_testbed::BobWorld;

fn main() {
    let mut w = BobWorld::new(Fluid::default());

    // 2 m cube of light wood, dropped at the waterline
    let cfg = FloatConfig { density: 400.0, ..FloatConfig::default() };
    let id = w
        .add_hull(vec3(100.0, 100.0, 100.0), cfg, vec3(0.0, 0.5, 0.0))
        .expect("hull bounds are valid");

    for step in 0..600 {
        w.step(1.0 / 60.0).expect("profile was built");
        if step % 30 == 0 {
            let p = w.body_pose(id);
            let v = w.body_vel(id);
            println!("t={:5.2}s  y={:+7.3}m  vy={:+7.3}m/s", step as f32 / 60.0, p.pos.y, v.lin.y);
        }
    }
    println!("state hash: {}", hex32(w.step_hash()));
}
