use lynx_anim::*;
use lynx_math::prelude::*;
use lynx_scene::*;

fn waving_arm() -> AnimComponent {
    let bone = Matrix4::create_translation(&Vector3::UNIT_Y);
    let skeleton = Skeleton::new(vec![
        Joint::new("shoulder", -1, Matrix4::IDENTITY),
        Joint::new("elbow", 0, bone),
        Joint::new("wrist", 1, bone),
    ]).unwrap();

    let bent = bone * Matrix4::create_rotation_z(f32::HALF_PI);
    let animation = Animation::new("wave", 10, vec![
        Track::default(),
        Track::new(vec![KeyFrame::new(0, bone), KeyFrame::new(10, bent)]),
        Track::default(),
    ]).unwrap();

    let settings = AnimSettings { frames_per_second: 10.0, playback: PlaybackMode::Clamp };
    AnimComponent::new(skeleton, animation, settings).unwrap()
}

#[test]
fn world_ticks_transforms_and_animations() {
    let mut world = World::new();
    let handle = world.spawn(GameObject::new("waver")
        .with_transform(Transform::from_translation(Vector3::new(0.0, 0.0, 3.0)))
        .with_spin(true)
        .with_anim(waving_arm()));

    world.update(1.0);

    let object = world.get(handle).unwrap();
    let anim = object.anim().unwrap();
    assert_eq!(anim.current_frame(), 10);

    // skin the tip of the hand, then place it in the world
    let mut tip = Vector3::new(0.0, 3.0, 0.0);
    tip.transform(&anim.matrix_palette()[2]);
    assert!(tip.is_close_to(Vector3::new(-2.0, 1.0, 0.0), 1e-5));

    tip.transform(&object.transform.world_matrix());
    assert!(tip.is_close_to(Vector3::new(0.0, 1.0, 5.0), 1e-4), "got {tip}");
}

#[test]
fn camera_sees_spawned_objects() {
    let mut world = World::new();
    let handle = world.spawn(GameObject::new("box").with_transform(Transform::from_translation(Vector3::new(0.0, 0.0, 10.0))));

    let mut camera = Camera::default();
    camera.look_at(Vector3::ZERO, Vector3::UNIT_Z, Vector3::UNIT_Y);

    let mut pos = Vector3::ZERO;
    pos.transform(&world.get(handle).unwrap().transform.world_matrix());
    pos.transform(&camera.view_matrix());
    assert!(pos.is_close_to(Vector3::new(0.0, 0.0, 10.0), 1e-5));

    // turning around puts the object behind the camera
    camera.yaw(f32::PI);
    let mut behind = Vector3::new(0.0, 0.0, 10.0);
    behind.transform(&camera.view_matrix());
    assert!(behind.z() < 0.0);
}

#[test]
fn removing_an_object_drops_its_animation() {
    let mut world = World::new();
    let handle = world.spawn(GameObject::new("waver").with_anim(waving_arm()));
    let mut object = world.remove(handle).unwrap();
    assert!(object.set_anim(None).is_some());
    assert!(object.anim().is_none());
    assert!(world.is_empty());
}
