use lynx_anim::*;
use lynx_math::prelude::*;

/// 3 joint chain along +y, each bone 1 unit long
fn arm() -> Skeleton {
    let bone = Matrix4::create_translation(&Vector3::UNIT_Y);
    Skeleton::new(vec![
        Joint::new("shoulder", -1, Matrix4::IDENTITY),
        Joint::new("elbow", 0, bone),
        Joint::new("wrist", 1, bone),
    ]).unwrap()
}

/// Bends the elbow by 90 degrees around z over 10 frames
fn bend() -> Animation {
    let bone = Matrix4::create_translation(&Vector3::UNIT_Y);
    let mut bent = bone;
    bent.multiply(&Matrix4::create_rotation_z(f32::HALF_PI));

    Animation::new("bend", 10, vec![
        Track::new(vec![KeyFrame::new(0, Matrix4::IDENTITY)]),
        Track::new(vec![KeyFrame::new(0, bone), KeyFrame::new(10, bent)]),
        Track::new(vec![KeyFrame::new(0, bone)]),
    ]).unwrap()
}

fn skin(anim: &AnimComponent, joint: usize, vertex: Vector3) -> Vector3 {
    let mut skinned = vertex;
    skinned.transform(&anim.matrix_palette()[joint]);
    skinned
}

#[test]
fn skinning_follows_the_hierarchy() {
    let settings = AnimSettings { frames_per_second: 10.0, playback: PlaybackMode::Clamp };
    let mut anim = AnimComponent::new(arm(), bend(), settings).unwrap();

    // vertex at the tip of the hand, in model space of the bind pose
    let tip = Vector3::new(0.0, 3.0, 0.0);
    assert!(skin(&anim, 2, tip).is_close_to(tip, 1e-5));

    anim.update(1.0);
    assert_eq!(anim.current_frame(), 10);

    // elbow at (0, 1, 0), the forearm now points along -x
    let skinned = skin(&anim, 2, tip);
    assert!(skinned.is_close_to(Vector3::new(-2.0, 1.0, 0.0), 1e-5), "got {skinned}");

    // the shoulder did not move
    let shoulder = Vector3::new(0.0, 0.5, 0.0);
    assert!(skin(&anim, 0, shoulder).is_close_to(shoulder, 1e-5));
}

#[test]
fn palette_is_aligned_for_simd() {
    let anim = AnimComponent::new(arm(), bend(), AnimSettings::default()).unwrap();
    let palette = anim.matrix_palette();
    assert_eq!(palette.len(), 3);
    assert_eq!(palette.as_ptr() as usize % MatrixPalette::ALIGNMENT, 0);
}

#[test]
fn settings_drive_the_clock() {
    let settings = AnimSettings::load("frames_per_second = 20.0\nplayback = \"loop\"").unwrap();
    let mut anim = AnimComponent::new(arm(), bend(), settings).unwrap();

    anim.update(0.25);
    assert!(anim.time().is_close_to(5.0, 1e-5));
    anim.update(0.5);
    assert!(anim.time().is_close_to(5.0, 1e-5));
}
