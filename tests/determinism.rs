use reachy::{Chain, NoOpTickObserver, Rig, RigConfig, Vec2};

#[test]
fn chain_deterministic() {
    let results: Vec<_> = (0..5)
        .map(|_| {
            let mut chain: Chain<f32> =
                Chain::new(Vec2::new(0.0, 0.0), &[6.0, 5.0, 4.0, 3.0], true);
            for step in 0..240 {
                let t = step as f32 * 0.13;
                chain.follow(Vec2::new(10.0 + t.sin() * 8.0, t.cos() * 8.0));
            }
            chain.joints()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}

#[test]
fn rig_deterministic() {
    let results: Vec<_> = (0..5)
        .map(|_| {
            let mut rig: Rig<f32> =
                Rig::new(Vec2::new(480.0, 600.0), RigConfig::new()).unwrap();
            for step in 0..240 {
                let t = step as f32 * 0.05;
                rig.set_target(Vec2::new(480.0 + t.sin() * 200.0, 300.0 + t.cos() * 200.0));
                rig.tick(&mut NoOpTickObserver);
            }
            rig.joints()
        })
        .collect();

    for r in &results[1..] {
        for (a, b) in results[0].iter().zip(r.iter()) {
            assert_eq!(a.x, b.x);
            assert_eq!(a.y, b.y);
        }
    }
}
