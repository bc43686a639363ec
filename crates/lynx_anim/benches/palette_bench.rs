use criterion::{criterion_group, criterion_main, Criterion};

use lynx_anim::*;
use lynx_math::prelude::*;

fn build_component() -> AnimComponent {
    let joints = (0..MAX_JOINTS)
        .map(|idx| Joint::new(format!("joint{idx}"), idx as i32 - 1, Matrix4::create_translation(&Vector3::UNIT_Y)))
        .collect();
    let skeleton = Skeleton::new(joints).unwrap();

    let tracks = (0..MAX_JOINTS)
        .map(|idx| Track::new(vec![
            KeyFrame::new(0, Matrix4::create_rotation_z(0.01 * idx as f32)),
            KeyFrame::new(30, Matrix4::create_rotation_x(0.02 * idx as f32)),
        ]))
        .collect();
    let animation = Animation::new("wave", 30, tracks).unwrap();

    AnimComponent::new(skeleton, animation, AnimSettings::default()).unwrap()
}

fn palette_bench(c: &mut Criterion) {
    let mut anim = build_component();
    c.bench_function(&format!("AnimComponent::update ({} joints)", MAX_JOINTS), |bench| bench.iter(|| {
        anim.update(1.0 / 60.0);
    }));
}

criterion_group!(benches, palette_bench);
criterion_main!(benches);
