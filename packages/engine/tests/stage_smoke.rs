use crossfall_engine::{Bounds, RecordingSurface, SceneId, StageConfig, StageCore};

#[test]
fn stage_smoke_frames() {
    let sizes = [Bounds::new(320.0, 240.0), Bounds::new(320.0, 240.0), Bounds::new(320.0, 240.0)];
    let mut stage = StageCore::with_defaults(&sizes);
    let mut surfaces = vec![RecordingSurface::new(), RecordingSurface::new(), RecordingSurface::new()];

    for frame in 0..120 {
        stage.frame(frame as f64 * 16.7, &mut surfaces);
    }

    let stats = stage.stats();
    assert_eq!(stats.frame(), 120);
    assert!(stats.frame_ms() >= 0.0);
    assert_eq!(stats.objects() as usize, stage.total_objects());
    assert!(surfaces.iter().all(|s| !s.commands().is_empty()));
}

#[test]
fn config_json_smoke() {
    let json = r#"{
        "seed": 7,
        "cooldownMs": 250,
        "scenes": [
            { "kind": "triangles", "canvas": "top", "params": { "count": 5 } },
            { "kind": "cubes", "canvas": "middle", "params": { "count": 2, "gScale": 2.0 } }
        ],
        "rules": [
            { "from": 0, "exit": "bottom", "to": 1, "entry": "top", "color": "yellow" },
            { "from": 1, "exit": "bottom", "to": 0, "entry": "top" }
        ]
    }"#;
    let config = StageConfig::from_json(json).expect("config parses");
    let stage = StageCore::new(&config, &[Bounds::new(200.0, 200.0), Bounds::new(200.0, 200.0)]).expect("stage builds");

    assert_eq!(stage.scene_count(), 2);
    assert_eq!(stage.object_count(SceneId(0)), 5);
    assert_eq!(stage.object_count(SceneId(1)), 2);
    assert_eq!(stage.cooldown_ms(), 250.0);
    assert_eq!(stage.canvas_ids(), ["top".to_string(), "middle".to_string()]);
}
