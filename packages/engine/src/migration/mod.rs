//! Cross-scene migration.
//!
//! Once per frame the coordinator walks the rule table in order. A rule whose
//! scene pair is still cooling down is skipped; otherwise every object past
//! its exit edge moves to the destination scene in one pass, and the pair's
//! timestamp is refreshed whether or not anything moved.

mod rule;

pub use rule::{Edge, EntryTransform, Heading, MigrationRule};

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};

use crate::scenes::{ObjectId, PortalState, Scene, SceneId};

/// Last transition time per `(source, dest)` pair, in host milliseconds.
///
/// Never reset. A pair with no entry counts as having transitioned at `0`.
#[derive(Clone, Debug, Default)]
pub struct MigrationState {
    last: HashMap<(SceneId, SceneId), f64>,
}

impl MigrationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_transition(&self, pair: (SceneId, SceneId)) -> f64 {
        self.last.get(&pair).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn is_cooling_down(&self, pair: (SceneId, SceneId), now_ms: f64, cooldown_ms: f64) -> bool {
        now_ms - self.last_transition(pair) <= cooldown_ms
    }

    fn record(&mut self, pair: (SceneId, SceneId), now_ms: f64) {
        self.last.insert(pair, now_ms);
    }
}

/// One object moved by one rule
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Migration {
    /// Index into the rule table
    pub rule: usize,
    pub source: SceneId,
    pub dest: SceneId,
    /// Id in the source scene (no longer valid)
    pub departed: ObjectId,
    /// Id in the destination scene
    pub arrived: ObjectId,
    /// Entry state handed to the destination, canvas convention
    pub entry: PortalState,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MigrationReport {
    pub migrated: Vec<Migration>,
    /// Rules skipped because their pair was cooling down
    pub cooling: Vec<usize>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.migrated.is_empty()
    }
}

/// Run every rule once against `scenes` at host time `now_ms`.
///
/// Objects that arrive in a scene during this call are not eligible to leave
/// it again until the next call.
pub fn run(
    scenes: &mut [Box<dyn Scene>],
    rules: &[MigrationRule],
    state: &mut MigrationState,
    now_ms: f64,
    cooldown_ms: f64,
) -> MigrationReport {
    let mut report = MigrationReport::default();
    let mut arrived: HashSet<(SceneId, ObjectId)> = HashSet::new();

    for (index, rule) in rules.iter().enumerate() {
        let SceneId(src) = rule.source;
        let SceneId(dst) = rule.dest;
        if src >= scenes.len() || dst >= scenes.len() || src == dst {
            warn!(rule = index, source = src, dest = dst, "migration rule ignored: bad scene pair");
            continue;
        }

        let pair = rule.pair();
        if state.is_cooling_down(pair, now_ms, cooldown_ms) {
            trace!(rule = index, "migration rule cooling down");
            report.cooling.push(index);
            continue;
        }

        let leaving: Vec<ObjectId> = scenes[src]
            .exiting(rule.exit)
            .into_iter()
            .filter(|id| !arrived.contains(&(rule.source, *id)))
            .collect();

        let mut departures = Vec::with_capacity(leaving.len());
        for id in leaving {
            if let Some(portal) = scenes[src].remove_object(id) {
                departures.push((id, portal));
            }
        }

        let dest_height = scenes[dst].bounds().height;
        for (departed, portal) in departures {
            let entry = rule.entry.apply(portal, dest_height);
            let new_id = scenes[dst].admit(entry, rule.style);
            arrived.insert((rule.dest, new_id));
            debug!(
                rule = index,
                source = src,
                dest = dst,
                x = entry.position.x,
                vy = entry.velocity.y,
                "object migrated"
            );
            report.migrated.push(Migration {
                rule: index,
                source: rule.source,
                dest: rule.dest,
                departed,
                arrived: new_id,
                entry,
            });
        }

        state.record(pair, now_ms);
    }

    report
}
