use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::domain::style::ObjectStyle;
use crate::scenes::{PortalState, SceneId};

/// Horizontal edge of a scene, in canvas convention (top is `y = 0`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    /// Has a canvas-convention `y` left the scene through this edge?
    #[inline]
    pub fn is_past(&self, y: f32, height: f32) -> bool {
        match self {
            Edge::Top => y < 0.0,
            Edge::Bottom => y > height,
        }
    }

    /// Canvas-convention `y` of the edge itself
    #[inline]
    pub fn y(&self, height: f32) -> f32 {
        match self {
            Edge::Top => 0.0,
            Edge::Bottom => height,
        }
    }

    /// Direction that carries a body away from this edge into the scene
    pub fn inward(&self) -> Heading {
        match self {
            Edge::Top => Heading::Down,
            Edge::Bottom => Heading::Up,
        }
    }
}

/// Vertical direction on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    /// Sign of canvas-convention `vy` for this heading
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Heading::Up => -1.0,
            Heading::Down => 1.0,
        }
    }
}

/// How a departing object re-enters the destination scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryTransform {
    pub edge: Edge,
    pub heading: Heading,
    /// Multiplier on `|vy|`
    pub vertical_scale: f32,
}

impl EntryTransform {
    /// Enter through `edge`, moving inward at the same speed.
    pub fn through(edge: Edge) -> Self {
        Self {
            edge,
            heading: edge.inward(),
            vertical_scale: 1.0,
        }
    }

    /// Entry state in the destination, still in canvas convention.
    ///
    /// `x` and `vx` carry over unchanged; `y` snaps to the entry edge and `vy`
    /// takes the configured heading and scale.
    pub fn apply(&self, exit: PortalState, dest_height: f32) -> PortalState {
        let vy = self.heading.sign() * exit.velocity.y.abs() * self.vertical_scale;
        PortalState {
            position: Vec2::new(exit.position.x, self.edge.y(dest_height)),
            velocity: Vec2::new(exit.velocity.x, vy),
        }
    }
}

/// One `(source, exit, dest, entry)` hand-off, evaluated once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MigrationRule {
    pub source: SceneId,
    pub exit: Edge,
    pub dest: SceneId,
    pub entry: EntryTransform,
    pub style: ObjectStyle,
}

impl MigrationRule {
    pub fn new(source: SceneId, exit: Edge, dest: SceneId, entry: EntryTransform) -> Self {
        Self {
            source,
            exit,
            dest,
            entry,
            style: ObjectStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ObjectStyle) -> Self {
        self.style = style;
        self
    }

    /// Cooldown key shared by every rule over the same scene pair
    #[inline]
    pub fn pair(&self) -> (SceneId, SceneId) {
        (self.source, self.dest)
    }
}
