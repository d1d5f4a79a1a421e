pub mod classify;
pub mod loader;
pub mod objectives;
pub mod order;
pub mod partition;
pub mod rates;
pub mod riot;
pub mod snapshot;
pub mod support;

#[cfg(test)]
mod testutil;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;

pub type ParticipantId = u8;
pub type ItemId = u32;

pub const MS_PER_MINUTE: u64 = 60_000;

// ---------------------------------------------------------------------------
// Domain types, independent of the Riot wire format
// ---------------------------------------------------------------------------

/// The two sides of the map. Riot encodes them as team ids 100 and 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TeamSide {
    #[default]
    Blue,
    Red,
}

impl TeamSide {
    pub fn from_id(id: u16) -> Option<Self> {
        match id {
            100 => Some(TeamSide::Blue),
            200 => Some(TeamSide::Red),
            _ => None,
        }
    }

    pub fn id(self) -> u16 {
        match self {
            TeamSide::Blue => 100,
            TeamSide::Red => 200,
        }
    }

    /// Multiplier that turns a blue-minus-red statistic into this side's view.
    pub fn sign(self) -> i64 {
        match self {
            TeamSide::Blue => 1,
            TeamSide::Red => -1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamSide::Blue => TeamSide::Red,
            TeamSide::Red => TeamSide::Blue,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub team: TeamSide,
    pub puuid: String,
    pub riot_id: String,
    pub champion_name: String,
    pub team_position: String, // "TOP", "JUNGLE", "MIDDLE", "BOTTOM", "UTILITY"
    pub items: [ItemId; 7],    // item0..item6, 0 = empty slot
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub gold_earned: u32,
    pub vision_score: u32,
    pub champ_level: u8,
    pub win: bool,
}

impl Participant {
    pub fn total_cs(&self) -> u32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    /// First end-of-game inventory item inside `band`.
    pub fn held_item_in(&self, band: &Range<ItemId>) -> Option<ItemId> {
        self.items.iter().copied().find(|id| band.contains(id))
    }
}

/// End-of-game kill counters from a team's `objectives` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamObjectives {
    pub baron: u32,
    pub champion: u32,
    pub dragon: u32,
    pub horde: u32,
    pub inhibitor: u32,
    pub rift_herald: u32,
    pub tower: u32,
    pub atakhan: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamSummary {
    pub team: TeamSide,
    pub win: bool,
    pub objectives: TeamObjectives,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub game_creation: Option<DateTime<Utc>>,
    pub game_duration_secs: u64,
    pub queue_id: u32,
    pub game_version: String,
    /// Ordered by `participant_id`; `participants[id - 1]` is participant `id`.
    pub participants: Vec<Participant>,
    pub teams: Vec<TeamSummary>,
}

impl MatchSummary {
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        usize::from(id)
            .checked_sub(1)
            .and_then(|idx| self.participants.get(idx))
    }

    pub fn team_of(&self, id: ParticipantId) -> Option<TeamSide> {
        self.participant(id).map(|p| p.team)
    }

    pub fn team(&self, side: TeamSide) -> Option<&TeamSummary> {
        self.teams.iter().find(|t| t.team == side)
    }

    pub fn members(&self, side: TeamSide) -> impl Iterator<Item = &Participant> {
        self.participants.iter().filter(move |p| p.team == side)
    }

    pub fn game_minutes(&self) -> f64 {
        self.game_duration_secs as f64 / 60.0
    }
}

/// Cumulative per-participant counters as of a frame's timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParticipantFrame {
    pub minions_killed: u32,
    pub jungle_minions_killed: u32,
    pub total_gold: u32,
    pub xp: u32,
    pub level: u8,
}

impl ParticipantFrame {
    pub fn cs(&self) -> u32 {
        self.minions_killed + self.jungle_minions_killed
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    pub timestamp: u64,
    pub events: Vec<Event>,
    pub participant_frames: BTreeMap<ParticipantId, ParticipantFrame>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Timeline {
    pub match_id: String,
    pub frames: Vec<Frame>,
}

impl Timeline {
    /// Every event in frame order, then array order.
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.frames.iter().flat_map(|f| f.events.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Milliseconds since game start.
    pub timestamp: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl Event {
    pub fn minute(&self) -> u64 {
        self.timestamp / MS_PER_MINUTE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Actor ids are `None` when the wire value was absent or `0` (minions,
/// turrets and other non-champion sources).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum EventKind {
    ItemPurchased {
        participant_id: Option<ParticipantId>,
        item_id: ItemId,
    },
    ItemSold {
        participant_id: Option<ParticipantId>,
        item_id: ItemId,
    },
    ItemDestroyed {
        participant_id: Option<ParticipantId>,
        item_id: ItemId,
    },
    ItemUndo {
        participant_id: Option<ParticipantId>,
        before_id: ItemId,
        after_id: ItemId,
        gold_gain: i32,
    },
    SkillLevelUp {
        participant_id: Option<ParticipantId>,
        skill_slot: u8,
        level_up_type: String,
    },
    LevelUp {
        participant_id: Option<ParticipantId>,
        level: u8,
    },
    WardPlaced {
        creator_id: Option<ParticipantId>,
        ward_type: WardType,
    },
    WardKill {
        killer_id: Option<ParticipantId>,
        ward_type: WardType,
    },
    ChampionKill {
        killer_id: Option<ParticipantId>,
        victim_id: Option<ParticipantId>,
        assisting_participant_ids: Vec<ParticipantId>,
        bounty: u32,
        position: Option<Position>,
    },
    ChampionSpecialKill {
        killer_id: Option<ParticipantId>,
        kill_type: String,
        multi_kill_length: Option<u8>,
    },
    BuildingKill {
        killer_id: Option<ParticipantId>,
        /// Side that owned the destroyed building.
        team: Option<TeamSide>,
        building_type: String,
        lane_type: String,
        tower_type: Option<String>,
    },
    TurretPlateDestroyed {
        killer_id: Option<ParticipantId>,
        team: Option<TeamSide>,
        lane_type: String,
    },
    EliteMonsterKill {
        killer_id: Option<ParticipantId>,
        killer_team: Option<TeamSide>,
        monster_type: String,
        monster_sub_type: Option<String>,
    },
    ChampionTransform {
        participant_id: Option<ParticipantId>,
        transform_type: String,
    },
    DragonSoulGiven {
        team: Option<TeamSide>,
        name: String,
    },
    Other {
        event_type: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WardType {
    YellowTrinket,
    ControlWard,
    SightWard,
    BlueTrinket,
    TeemoMushroom,
    #[default]
    Undefined,
}

impl WardType {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "YELLOW_TRINKET" => WardType::YellowTrinket,
            "CONTROL_WARD" => WardType::ControlWard,
            "SIGHT_WARD" => WardType::SightWard,
            "BLUE_TRINKET" => WardType::BlueTrinket,
            "TEEMO_MUSHROOM" => WardType::TeemoMushroom,
            _ => WardType::Undefined,
        }
    }
}

/// Render an in-game timestamp as `mm:ss`.
pub fn format_clock(timestamp_ms: u64) -> String {
    let elapsed = i64::try_from(timestamp_ms)
        .ok()
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX);
    let minutes = elapsed.num_minutes();
    let seconds = elapsed.num_seconds() - minutes * 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn team_side_round_trips_riot_ids() {
        assert_eq!(TeamSide::from_id(100), Some(TeamSide::Blue));
        assert_eq!(TeamSide::from_id(200), Some(TeamSide::Red));
        assert_eq!(TeamSide::from_id(300), None);
        assert_eq!(TeamSide::Red.id(), 200);
        assert_eq!(TeamSide::Blue.opponent(), TeamSide::Red);
    }

    #[test]
    fn participant_lookup_is_one_based() {
        let summary = testutil::summary(1200);
        assert_eq!(summary.participant(1).map(|p| p.participant_id), Some(1));
        assert_eq!(summary.participant(10).map(|p| p.participant_id), Some(10));
        assert!(summary.participant(0).is_none());
        assert!(summary.participant(11).is_none());
        assert_eq!(summary.team_of(7), Some(TeamSide::Red));
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61_999), "01:01");
        assert_eq!(format_clock(15 * MS_PER_MINUTE + 5_000), "15:05");
        assert_eq!(format_clock(125 * MS_PER_MINUTE), "125:00");
    }

    #[test]
    fn event_minute_floors() {
        let e = testutil::purchase(119_999, 1, 1055);
        assert_eq!(e.minute(), 1);
    }

    #[test]
    fn ward_type_unknown_strings_are_undefined() {
        assert_eq!(WardType::from_wire("SIGHT_WARD"), WardType::SightWard);
        assert_eq!(WardType::from_wire("UNDEFINED"), WardType::Undefined);
        assert_eq!(WardType::from_wire(""), WardType::Undefined);
    }
}
