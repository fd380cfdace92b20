//! Stage configuration: which scenes exist, their tunable parameters, and the
//! migration rules between them. Arrives from the host as JSON.

use serde::{Deserialize, Serialize};

use crate::domain::body::VelocitySpread;
use crate::domain::style::{Color, ObjectStyle};
use crate::migration::{Edge, EntryTransform, Heading, MigrationRule};
use crate::scenes::SceneId;

pub const DEFAULT_COOLDOWN_MS: f64 = 500.0;
pub const DEFAULT_SEED: u32 = 12345;

/// Allowed range of the cube scene's gravity multiplier
pub const G_SCALE_MIN: f32 = 0.5;
pub const G_SCALE_MAX: f32 = 10.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("stage has no scenes")]
    Empty,

    #[error("rule {rule} references unknown scene {scene}")]
    UnknownScene { rule: usize, scene: usize },

    #[error("rule {rule} migrates scene {scene} into itself")]
    SelfLoop { rule: usize, scene: usize },

    #[error("invalid {field}: {reason}")]
    InvalidParam { field: String, reason: &'static str },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    Bubbles,
    Triangles,
    Cubes,
}

/// Tunables of a bubble or triangle scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicParams {
    /// Time multiplier in [-1, 1]; negative runs the scene backwards
    pub speed: f32,
    /// Bubbles closer than this are joined by a line
    pub threshold: f32,
    /// Radius for bubbles, half-size for triangles
    pub size: f32,
    /// Population created by `generate`
    pub count: u32,
    /// Bias strength at full tilt, before the gravity reduction factor
    pub g_strength: f32,
    /// Draw proximity lines
    pub links: bool,
    pub spread: VelocitySpread,
}

impl KinematicParams {
    pub fn bubbles() -> Self {
        Self {
            speed: 1.0,
            threshold: 50.0,
            size: 5.0,
            count: 3,
            g_strength: 300.0,
            links: true,
            spread: VelocitySpread::BUBBLES,
        }
    }

    pub fn triangles() -> Self {
        Self {
            speed: 1.0,
            threshold: 50.0,
            size: 10.0,
            count: 3,
            g_strength: 300.0,
            links: false,
            spread: VelocitySpread::TRIANGLES,
        }
    }
}

/// Tunables of the physics-backed cube scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeParams {
    /// Gravity multiplier in [`G_SCALE_MIN`, `G_SCALE_MAX`]
    pub g_scale: f32,
    pub cube_size: f32,
    pub count: u32,
    pub wall_thickness: f32,
}

impl Default for CubeParams {
    fn default() -> Self {
        Self {
            g_scale: 1.0,
            cube_size: 50.0,
            count: 10,
            wall_thickness: 20.0,
        }
    }
}

/// Per-scene overrides; anything left out keeps the kind's default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g_strength: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_thickness: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSpec {
    pub kind: SceneKind,
    /// DOM id of the canvas this scene draws into
    #[serde(default)]
    pub canvas: String,
    #[serde(default)]
    pub params: ParamOverrides,
}

impl SceneSpec {
    pub fn new(kind: SceneKind, canvas: &str) -> Self {
        Self {
            kind,
            canvas: canvas.to_string(),
            params: ParamOverrides::default(),
        }
    }

    pub fn kinematic_params(&self) -> KinematicParams {
        let base = match self.kind {
            SceneKind::Triangles => KinematicParams::triangles(),
            _ => KinematicParams::bubbles(),
        };
        let o = &self.params;
        KinematicParams {
            speed: o.speed.unwrap_or(base.speed).clamp(-1.0, 1.0),
            threshold: o.threshold.unwrap_or(base.threshold),
            size: o.size.unwrap_or(base.size),
            count: o.count.unwrap_or(base.count),
            g_strength: o.g_strength.unwrap_or(base.g_strength),
            links: o.links.unwrap_or(base.links),
            spread: base.spread,
        }
    }

    pub fn cube_params(&self) -> CubeParams {
        let base = CubeParams::default();
        let o = &self.params;
        CubeParams {
            g_scale: o.g_scale.unwrap_or(base.g_scale).clamp(G_SCALE_MIN, G_SCALE_MAX),
            cube_size: o.size.unwrap_or(base.cube_size),
            count: o.count.unwrap_or(base.count),
            wall_thickness: o.wall_thickness.unwrap_or(base.wall_thickness),
        }
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let o = &self.params;
        let checks = [
            ("speed", o.speed, false),
            ("threshold", o.threshold, true),
            ("size", o.size, true),
            ("gStrength", o.g_strength, false),
            ("gScale", o.g_scale, true),
            ("wallThickness", o.wall_thickness, true),
        ];
        for (name, value, non_negative) in checks {
            let Some(v) = value else {
                continue;
            };
            if !v.is_finite() {
                return Err(invalid(format!("scenes[{}].params.{}", index, name), "must be finite"));
            }
            if non_negative && v < 0.0 {
                return Err(invalid(format!("scenes[{}].params.{}", index, name), "must not be negative"));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    pub from: usize,
    pub exit: Edge,
    pub to: usize,
    pub entry: Edge,
    /// Defaults to moving inward from the entry edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<Heading>,
    #[serde(default = "unit_scale")]
    pub vertical_scale: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

fn unit_scale() -> f32 {
    1.0
}

impl RuleSpec {
    pub fn new(from: usize, exit: Edge, to: usize, entry: Edge) -> Self {
        Self {
            from,
            exit,
            to,
            entry,
            heading: None,
            vertical_scale: 1.0,
            color: None,
        }
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn to_rule(&self) -> MigrationRule {
        let entry = EntryTransform {
            edge: self.entry,
            heading: self.heading.unwrap_or_else(|| self.entry.inward()),
            vertical_scale: self.vertical_scale,
        };
        MigrationRule::new(SceneId(self.from), self.exit, SceneId(self.to), entry)
            .with_style(ObjectStyle { color: self.color })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageConfig {
    #[serde(default = "default_seed")]
    pub seed: u32,
    #[serde(default = "default_cooldown")]
    pub cooldown_ms: f64,
    #[serde(default = "default_scenes")]
    pub scenes: Vec<SceneSpec>,
    /// Evaluated in this order every frame
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleSpec>,
}

fn default_seed() -> u32 {
    DEFAULT_SEED
}

fn default_cooldown() -> f64 {
    DEFAULT_COOLDOWN_MS
}

/// Bubbles on top, cubes in the middle, bubbles at the bottom.
fn default_scenes() -> Vec<SceneSpec> {
    vec![
        SceneSpec::new(SceneKind::Bubbles, "canvas-scene-1"),
        SceneSpec::new(SceneKind::Cubes, "canvas-scene-2"),
        SceneSpec::new(SceneKind::Bubbles, "canvas-scene-3"),
    ]
}

/// Vertical ring through the three default scenes, wrapping top to bottom.
fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::new(0, Edge::Bottom, 1, Edge::Top).colored(Color::Yellow),
        RuleSpec::new(1, Edge::Bottom, 2, Edge::Top),
        RuleSpec::new(2, Edge::Top, 1, Edge::Bottom).colored(Color::Blue),
        RuleSpec::new(1, Edge::Top, 0, Edge::Bottom),
        RuleSpec::new(0, Edge::Top, 2, Edge::Bottom),
        RuleSpec::new(2, Edge::Bottom, 0, Edge::Top),
    ]
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            scenes: default_scenes(),
            rules: default_rules(),
        }
    }
}

impl StageConfig {
    /// Parse and validate a JSON stage description
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: StageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scenes.is_empty() {
            return Err(ConfigError::Empty);
        }
        if !self.cooldown_ms.is_finite() || self.cooldown_ms < 0.0 {
            return Err(invalid("cooldownMs".to_string(), "must be a finite, non-negative duration"));
        }
        for (i, scene) in self.scenes.iter().enumerate() {
            scene.validate(i)?;
        }
        for (i, rule) in self.rules.iter().enumerate() {
            for scene in [rule.from, rule.to] {
                if scene >= self.scenes.len() {
                    return Err(ConfigError::UnknownScene { rule: i, scene });
                }
            }
            if rule.from == rule.to {
                return Err(ConfigError::SelfLoop { rule: i, scene: rule.from });
            }
            if !rule.vertical_scale.is_finite() || rule.vertical_scale < 0.0 {
                return Err(invalid(format!("rules[{}].verticalScale", i), "must be finite and non-negative"));
            }
        }
        Ok(())
    }

    pub fn migration_rules(&self) -> Vec<MigrationRule> {
        self.rules.iter().map(RuleSpec::to_rule).collect()
    }
}

fn invalid(field: String, reason: &'static str) -> ConfigError {
    ConfigError::InvalidParam { field, reason }
}
