use reachy::{Chain, Vec2};
use reachy::Vec;

#[test]
fn chain_correct_joint_count() {
    let chain: Chain<f32> = Chain::new(Vec2::new(0.0, 0.0), &[10.0, 10.0, 10.0], true);
    assert_eq!(chain.segment_count(), 3);
    assert_eq!(chain.joints().len(), 4); // segments + 1
}

#[test]
fn empty_chain_is_tolerated() {
    let mut chain: Chain<f32> = Chain::new(Vec2::new(5.0, 5.0), &[], true);
    chain.follow(Vec2::new(100.0, 100.0));
    assert!(chain.is_empty());
    assert!(chain.joints().is_empty());
    assert!(chain.end_effector().is_none());
    assert_eq!(chain.total_length(), 0.0);
}

#[test]
fn two_segments_unreachable_target() {
    // base=(0,0), two segments of 5, attached, target (100,0): the chain
    // straightens along the x-axis and the end effector stops at full reach.
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &[5.0, 5.0], true);
    chain.follow(Vec2::new(100.0, 0.0));

    let joints = chain.joints();
    assert!((joints[0] - Vec2::new(0.0, 0.0)).length() < 1e-9);
    assert!((joints[1] - Vec2::new(5.0, 0.0)).length() < 1e-9);
    assert!((joints[2] - Vec2::new(10.0, 0.0)).length() < 1e-9);
}

#[test]
fn detached_end_effector_reaches_exactly() {
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &[4.0, 3.0, 2.0], false);
    let target = Vec2::new(37.0, -12.5);
    chain.follow(target);
    let ee = chain.end_effector().unwrap();
    assert!((ee - target).length() < 1e-9, "end effector at {:?}", ee);
}

#[test]
fn detached_chain_is_not_re_anchored() {
    let base = Vec2::new(0.0f64, 0.0);
    let mut chain: Chain<f64> = Chain::new(base, &[2.0, 2.0], false);
    chain.follow(Vec2::new(50.0, 50.0));
    // Far target: the root drifts off the anchor entirely.
    assert!((chain.segments()[0].base - base).length() > 1.0);
}

#[test]
fn attached_follow_restores_root_and_contiguity() {
    let base = Vec2::new(3.0f64, -1.0);
    let mut chain: Chain<f64> = Chain::new(base, &[6.0, 5.0, 4.0, 3.0], true);
    chain.follow(Vec2::new(10.0, 9.0));

    // The forward pass rebases exactly, so these hold bitwise.
    assert_eq!(chain.segments()[0].base, base);
    for pair in chain.segments().windows(2) {
        assert_eq!(pair[1].base, pair[0].head);
    }
}

#[test]
fn follow_preserves_segment_lengths() {
    let lengths = [6.0f64, 5.0, 4.0, 3.0];
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &lengths, true);
    let targets = [
        Vec2::new(10.0, 2.0),
        Vec2::new(-3.0, 14.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(200.0, -50.0),
    ];
    for &t in &targets {
        chain.follow(t);
        for (segment, &expected) in chain.segments().iter().zip(lengths.iter()) {
            let relative = (segment.length() - expected).abs() / expected;
            assert!(relative < 1e-9, "segment length {} != {}", segment.length(), expected);
        }
    }
}

#[test]
fn stationary_target_is_a_fixed_point() {
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &[5.0, 4.0, 3.0], true);
    let target = Vec2::new(6.0, 4.0);

    // Let the per-tick re-invocation converge first.
    for _ in 0..500 {
        chain.follow(target);
    }
    let before = chain.joints();

    chain.follow(target);
    let after = chain.joints();
    for (a, b) in before.iter().zip(after.iter()) {
        assert!((*a - *b).length() < 1e-9, "joint moved from {:?} to {:?}", a, b);
    }
}

#[test]
fn attached_chain_converges_to_reachable_target() {
    // One pass per tick: successive calls act as successive FABRIK
    // iterations and close in on a target within reach.
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &[5.0, 4.0, 3.0], true);
    let target = Vec2::new(6.0, 4.0); // |target| ~ 7.2, reach = 12
    for _ in 0..500 {
        chain.follow(target);
    }
    let ee = chain.end_effector().unwrap();
    assert!((ee - target).length() < 1e-6, "end effector stuck at {:?}", ee);
    assert_eq!(chain.segments()[0].base, Vec2::new(0.0, 0.0));
}

#[test]
fn unreachable_target_straightens_the_chain() {
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &[5.0, 4.0, 3.0], true);
    let target = Vec2::new(0.0, 100.0);
    for _ in 0..50 {
        chain.follow(target);
    }
    // Fully extended straight up: reach 12 along +y.
    let ee = chain.end_effector().unwrap();
    assert!((ee - Vec2::new(0.0, 12.0)).length() < 1e-6, "end effector at {:?}", ee);
    for segment in chain.segments() {
        assert!(segment.base.x.abs() < 1e-6);
    }
}

#[test]
fn rebuild_is_a_hard_reset() {
    let base = Vec2::new(1.0f32, 2.0);
    let mut chain: Chain<f32> = Chain::new(base, &[5.0, 5.0], true);
    chain.follow(Vec2::new(30.0, 40.0));

    chain.rebuild(&[7.0, 6.0, 5.0]);
    assert_eq!(chain.segment_count(), 3);
    // Every segment starts horizontal at the anchor again.
    for (segment, expected) in chain.segments().iter().zip([7.0f32, 6.0, 5.0]) {
        assert_eq!(segment.base, base);
        assert!((segment.head.y - base.y).abs() < 1e-6);
        assert!((segment.length() - expected).abs() < 1e-5);
    }
}

#[test]
fn zero_length_segment_is_well_defined() {
    let mut chain: Chain<f64> = Chain::new(Vec2::new(0.0, 0.0), &[5.0, 0.0], false);
    let target = Vec2::new(9.0, 0.0);
    chain.follow(target);
    let joints = chain.joints();
    // The zero-length tip collapses onto the target.
    assert!((joints[2] - target).length() < 1e-9);
    assert!((joints[1] - target).length() < 1e-9);
}
