use crate::{MatchSummary, ParticipantId, TeamSide, Timeline};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TeamObjectiveCounts {
    /// Keyed by `monsterSubType`, e.g. "FIRE_DRAGON", "ELDER_DRAGON".
    pub dragons_by_type: BTreeMap<String, u32>,
    pub dragons: u32,
    // Read from the end-of-game objectives block.
    pub grubs: u32,
    pub heralds: u32,
    pub barons: u32,
}

/// A destroyed turret, inhibitor or turret plate with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureKill {
    pub timestamp: u64,
    /// Side that lost the structure.
    pub team: Option<TeamSide>,
    pub killer_id: Option<ParticipantId>,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectiveTally {
    pub blue: TeamObjectiveCounts,
    pub red: TeamObjectiveCounts,
    pub atakhan: Option<TeamSide>,
    pub structures: Vec<StructureKill>,
}

impl ObjectiveTally {
    pub fn team(&self, side: TeamSide) -> &TeamObjectiveCounts {
        match side {
            TeamSide::Blue => &self.blue,
            TeamSide::Red => &self.red,
        }
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut TeamObjectiveCounts {
        match side {
            TeamSide::Blue => &mut self.blue,
            TeamSide::Red => &mut self.red,
        }
    }
}

const UNKNOWN_DRAGON: &str = "UNKNOWN_DRAGON";

/// Fold monster and structure events into per-team counters.
pub fn tally(summary: &MatchSummary, timeline: &Timeline) -> ObjectiveTally {
    let mut tally = ObjectiveTally::default();

    for event in timeline.events() {
        if let Some(kill) = event.monster_kill() {
            match kill.monster_type {
                // Last kill decides ownership, even if a malformed timeline
                // carries more than one.
                "ATAKHAN" => tally.atakhan = kill.killer_team,
                "DRAGON" => {
                    let Some(side) = kill.killer_team else {
                        log::debug!("dragon at {} has no killer team", event.timestamp);
                        continue;
                    };
                    let counts = tally.team_mut(side);
                    let sub_type = kill.sub_type.unwrap_or(UNKNOWN_DRAGON);
                    *counts.dragons_by_type.entry(sub_type.to_owned()).or_default() += 1;
                    counts.dragons += 1;
                }
                _ => {}
            }
        } else if let Some(hit) = event.structure_hit() {
            let label = match hit.building_type {
                Some(building_type) => building_label(building_type, hit.lane_type, hit.tower_type),
                None => format!("{} Turret Plate", lane_label(hit.lane_type)),
            };
            tally.structures.push(StructureKill {
                timestamp: event.timestamp,
                team: hit.team,
                killer_id: hit.killer_id,
                label,
            });
        }
    }

    for side in [TeamSide::Blue, TeamSide::Red] {
        if let Some(team) = summary.team(side) {
            let counts = tally.team_mut(side);
            counts.grubs = team.objectives.horde;
            counts.heralds = team.objectives.rift_herald;
            counts.barons = team.objectives.baron;
        }
    }

    tally
}

fn lane_label(lane_type: &str) -> &'static str {
    match lane_type {
        "TOP_LANE" => "Top",
        "MID_LANE" => "Mid",
        "BOT_LANE" => "Bot",
        _ => "Unknown",
    }
}

fn building_label(building_type: &str, lane_type: &str, tower_type: Option<&str>) -> String {
    let lane = lane_label(lane_type);
    match (building_type, tower_type) {
        ("TOWER_BUILDING", Some("NEXUS_TURRET")) => "Nexus Turret".to_owned(),
        ("TOWER_BUILDING", Some(tower)) => {
            let tier = match tower {
                "OUTER_TURRET" => "Outer",
                "INNER_TURRET" => "Inner",
                "BASE_TURRET" => "Base",
                _ => "Unknown",
            };
            format!("{lane} {tier} Turret")
        }
        ("TOWER_BUILDING", None) => format!("{lane} Turret"),
        ("INHIBITOR_BUILDING", _) => format!("{lane} Inhibitor"),
        (other, _) => format!("{lane} {other}"),
    }
}
