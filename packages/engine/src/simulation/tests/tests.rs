use super::*;
use crate::core::Vec2;
use crate::domain::config::{RuleSpec, SceneKind, SceneSpec};
use crate::domain::style::ObjectStyle;
use crate::migration::Edge;
use crate::scenes::PortalState;
use crate::render::{DrawCommand, Projection, RecordingSurface};

const SIZE: Bounds = Bounds {
    width: 400.0,
    height: 500.0,
};

/// Two empty bubble scenes joined by one downward rule
fn two_scene_stage() -> StageCore {
    let mut empty = SceneSpec::new(SceneKind::Bubbles, "a");
    empty.params.count = Some(0);
    let mut other = empty.clone();
    other.canvas = "b".to_string();

    let config = StageConfig {
        scenes: vec![empty, other],
        rules: vec![RuleSpec::new(0, Edge::Bottom, 1, Edge::Top)],
        ..StageConfig::default()
    };
    StageCore::new(&config, &[SIZE, SIZE]).unwrap()
}

fn default_stage() -> StageCore {
    StageCore::with_defaults(&[SIZE, Bounds::new(400.0, 600.0), SIZE])
}

#[test]
fn bubble_past_bottom_migrates_once_per_cooldown() {
    let mut stage = two_scene_stage();
    let leaving = stage
        .scene_mut(SceneId(0))
        .unwrap()
        .add_object(Vec2::new(120.0, 501.0), ObjectStyle::default());
    let exit = stage.scene(SceneId(0)).unwrap().portal_state(leaving).unwrap();

    // First frame has zero delta, so the bubble is still at y = 501.
    let report = stage.advance(600.0).clone();
    assert_eq!(report.migrated.len(), 1);
    let m = report.migrated[0];
    assert_eq!(m.entry.position, Vec2::new(120.0, 0.0));
    assert_eq!(m.entry.velocity, Vec2::new(exit.velocity.x, exit.velocity.y.abs()));
    assert!(!stage.scene(SceneId(0)).unwrap().contains(leaving));
    assert!(stage.scene(SceneId(1)).unwrap().contains(m.arrived));

    // 100ms later the pair is still cooling down.
    stage
        .scene_mut(SceneId(0))
        .unwrap()
        .add_object(Vec2::new(200.0, 900.0), ObjectStyle::default());
    let report = stage.advance(700.0);
    assert!(report.is_empty());
    assert_eq!(report.cooling, vec![0]);
    assert_eq!(stage.object_count(SceneId(0)), 1);
    assert_eq!(stage.migration_state().last_transition((SceneId(0), SceneId(1))), 600.0);
}

#[test]
fn nothing_moves_before_the_first_cooldown_elapses() {
    let mut stage = two_scene_stage();
    stage
        .scene_mut(SceneId(0))
        .unwrap()
        .add_object(Vec2::new(120.0, 900.0), ObjectStyle::default());

    assert!(stage.advance(100.0).is_empty());
    assert!(stage.advance(500.0).is_empty());
    assert_eq!(stage.advance(501.0).migrated.len(), 1);
}

#[test]
fn default_loop_conserves_objects() {
    let mut stage = default_stage();
    let total = stage.total_objects();
    assert_eq!(total, 3 + 10 + 3);

    let mut migrated = 0;
    for frame in 0..1200 {
        migrated += stage.advance(frame as f64 * 16.0).migrated.len();
        assert_eq!(stage.total_objects(), total);
    }
    // Cubes fall out of the middle scene within twenty seconds.
    assert!(migrated > 0);
    assert_eq!(stage.stats().migrated_total(), migrated as u64);
}

#[test]
fn default_rules_follow_the_ring() {
    let stage = default_stage();
    let pairs: Vec<(usize, usize)> = stage.rules().iter().map(|r| (r.source.0, r.dest.0)).collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(stage.cooldown_ms(), 500.0);
    assert_eq!(stage.canvas_ids()[1], "canvas-scene-2");
}

#[test]
fn resize_clamps_in_bounds_bubbles() {
    let mut stage = default_stage();
    let scene = SceneId(0);
    let pending = stage
        .scene_mut(scene)
        .unwrap()
        .add_object(Vec2::new(50.0, 520.0), ObjectStyle::default());

    stage.resize(scene, Bounds::new(100.0, 80.0));

    let s = stage.scene(scene).unwrap();
    for id in s.ids() {
        let p = s.portal_state(id).unwrap().position;
        if id == pending {
            assert_eq!(p.y, 520.0);
            continue;
        }
        assert!(p.x >= 5.0 && p.x <= 95.0);
        assert!(p.y >= 5.0 && p.y <= 75.0);
    }
}

#[test]
fn frame_draws_each_scene_into_its_surface() {
    let mut stage = default_stage();
    let mut surfaces = vec![RecordingSurface::new(), RecordingSurface::new(), RecordingSurface::new()];
    stage.frame(0.0, &mut surfaces);

    for surface in &surfaces {
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::Clear)), 1);
    }
    assert_eq!(surfaces[0].commands()[0], DrawCommand::Projection(Projection::Canvas { width: 400.0, height: 500.0 }));
    assert_eq!(
        surfaces[1].commands()[0],
        DrawCommand::Projection(Projection::Centered { width: 400.0, height: 600.0 })
    );
    // Three walls and ten cubes.
    assert_eq!(surfaces[1].count(|c| matches!(c, DrawCommand::FillRect { .. })), 13);
}

#[test]
fn params_route_to_scenes_that_have_them() {
    let mut stage = default_stage();
    assert!(stage.apply_param(SceneId(0), SceneParam::Speed(0.5)));
    assert!(!stage.apply_param(SceneId(1), SceneParam::Speed(0.5)));
    assert!(stage.apply_param(SceneId(1), SceneParam::GravityScale(3.0)));
    assert!(!stage.apply_param(SceneId(9), SceneParam::Count(1)));

    assert!(stage.apply_param(SceneId(2), SceneParam::Count(8)));
    assert_eq!(stage.object_count(SceneId(2)), 8);
}

#[test]
fn orientation_reaches_every_scene() {
    let mut stage = default_stage();
    stage.set_orientation(Some(Orientation::new(0.0, 0.0, 90.0)));
    assert_eq!(stage.orientation(), Some(Orientation::new(0.0, 0.0, 90.0)));

    // Full right tilt drifts bubbles right at g_strength * 0.5 px/s.
    let resting = PortalState {
        position: Vec2::new(200.0, 250.0),
        velocity: Vec2::zero(),
    };
    let id = stage.scene_mut(SceneId(0)).unwrap().admit(resting, ObjectStyle::default());
    stage.advance(0.0);
    stage.advance(10.0);
    let p = stage.scene(SceneId(0)).unwrap().portal_state(id).unwrap().position;
    assert!((p.x - 201.5).abs() < 1e-3, "x = {}", p.x);
    assert_eq!(p.y, 250.0);

    stage.set_orientation(None);
    assert_eq!(stage.orientation(), None);
}

#[test]
fn invalid_config_is_rejected() {
    let config = StageConfig {
        rules: vec![RuleSpec::new(0, Edge::Top, 7, Edge::Bottom)],
        ..StageConfig::default()
    };
    assert!(StageCore::new(&config, &[]).is_err());
}
