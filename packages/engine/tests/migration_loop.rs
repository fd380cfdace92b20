use crossfall_engine::core::Vec2;
use crossfall_engine::domain::style::{Color, ObjectStyle};
use crossfall_engine::migration::{self, Edge, EntryTransform, MigrationRule, MigrationState};
use crossfall_engine::domain::config::{CubeParams, KinematicParams};
use crossfall_engine::scenes::{CubeScene, KinematicScene};
use crossfall_engine::{Bounds, PortalState, Scene, SceneId, SceneKind};

fn scenes() -> Vec<Box<dyn Scene>> {
    let bubbles = KinematicParams {
        count: 0,
        ..KinematicParams::bubbles()
    };
    let cubes = CubeParams {
        count: 0,
        ..CubeParams::default()
    };
    vec![
        Box::new(KinematicScene::new(SceneKind::Bubbles, bubbles, Bounds::new(400.0, 500.0), 1)) as Box<dyn Scene>,
        Box::new(CubeScene::new(cubes, Bounds::new(400.0, 600.0), 2)),
    ]
}

#[test]
fn bubble_becomes_a_yellow_cube_and_back() {
    let mut scenes = scenes();
    let mut state = MigrationState::new();
    let rules = [
        MigrationRule::new(SceneId(0), Edge::Bottom, SceneId(1), EntryTransform::through(Edge::Top)),
        MigrationRule::new(SceneId(1), Edge::Bottom, SceneId(0), EntryTransform::through(Edge::Top)),
    ];
    let yellow = rules[0].with_style(ObjectStyle::colored(Color::Yellow));
    let rules = [yellow, rules[1]];

    let bubble = scenes[0].admit(
        PortalState {
            position: Vec2::new(350.0, 501.0),
            velocity: Vec2::new(30.0, 120.0),
        },
        ObjectStyle::default(),
    );
    assert!(scenes[0].contains(bubble));

    let report = migration::run(&mut scenes, &rules, &mut state, 1000.0, 500.0);
    assert_eq!(report.migrated.len(), 1);
    let cube = report.migrated[0].arrived;
    assert_eq!(scenes[0].len(), 0);
    assert_eq!(scenes[1].len(), 1);

    // Canvas x = 350 is x = 150 in the centered frame, clear of the middle
    // wall; it enters at the top edge falling at the same speed.
    let entered = scenes[1].portal_state(cube).unwrap();
    assert!((entered.position - Vec2::new(350.0, 0.0)).length() < 1e-3);
    assert!((entered.velocity - Vec2::new(30.0, 120.0)).length() < 1e-3);

    let mut now = 1000.0;
    while scenes[1].len() == 1 && now < 20_000.0 {
        now += 1000.0 / 60.0;
        scenes[1].step(1000.0 / 60.0);
        migration::run(&mut scenes, &rules, &mut state, now, 500.0);
    }
    assert_eq!(scenes[1].len(), 0);
    assert_eq!(scenes[0].len(), 1);
}
