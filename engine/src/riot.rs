/// Riot match-v5 raw wire types: serde shapes for the match and timeline
/// documents handed over by the fetching layer. Mapped onto the domain types
/// in loader.rs.
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub match_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Match summary  (match-v5 /matches/{matchId})
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct MatchResponse {
    pub metadata: Option<Metadata>,
    pub info: Option<MatchInfo>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub game_creation: Option<i64>, // epoch millis
    pub game_duration: Option<u64>, // seconds
    pub queue_id: Option<u32>,
    pub game_version: Option<String>,
    #[serde(default)]
    pub participants: Vec<RawParticipant>,
    #[serde(default)]
    pub teams: Vec<RawTeam>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawParticipant {
    pub participant_id: Option<u8>,
    pub team_id: Option<u16>,
    pub puuid: Option<String>,
    pub riot_id_game_name: Option<String>,
    pub riot_id_tagline: Option<String>,
    pub summoner_name: Option<String>,
    pub champion_name: Option<String>,
    pub team_position: Option<String>,
    pub item0: Option<u32>,
    pub item1: Option<u32>,
    pub item2: Option<u32>,
    pub item3: Option<u32>,
    pub item4: Option<u32>,
    pub item5: Option<u32>,
    pub item6: Option<u32>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub total_minions_killed: Option<u32>,
    pub neutral_minions_killed: Option<u32>,
    pub gold_earned: Option<u32>,
    pub vision_score: Option<u32>,
    pub champ_level: Option<u8>,
    pub win: Option<bool>,
}

impl RawParticipant {
    pub fn items(&self) -> [u32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
        .map(Option::unwrap_or_default)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawTeam {
    pub team_id: Option<u16>,
    pub win: Option<bool>,
    pub objectives: Option<RawObjectives>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawObjectives {
    pub baron: Option<RawObjective>,
    pub champion: Option<RawObjective>,
    pub dragon: Option<RawObjective>,
    pub horde: Option<RawObjective>, // void grubs
    pub inhibitor: Option<RawObjective>,
    pub rift_herald: Option<RawObjective>,
    pub tower: Option<RawObjective>,
    pub atakhan: Option<RawObjective>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct RawObjective {
    pub first: Option<bool>,
    pub kills: Option<u32>,
}

// ---------------------------------------------------------------------------
// Match timeline  (match-v5 /matches/{matchId}/timeline)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TimelineResponse {
    pub metadata: Option<Metadata>,
    pub info: Option<TimelineInfo>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    pub frame_interval: Option<u64>,
    #[serde(default)]
    pub frames: Vec<RawFrame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawFrame {
    pub timestamp: Option<u64>,
    #[serde(default)]
    pub events: Vec<RawEvent>,
    /// Keyed "1".."10".
    #[serde(default)]
    pub participant_frames: HashMap<String, RawParticipantFrame>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawParticipantFrame {
    pub minions_killed: Option<u32>,
    pub jungle_minions_killed: Option<u32>,
    pub total_gold: Option<u32>,
    pub xp: Option<u32>,
    pub level: Option<u8>,
}

/// Union of every field any timeline event variant carries. Which ones are
/// populated depends on `type`.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub timestamp: Option<u64>,
    pub participant_id: Option<u8>,
    pub killer_id: Option<u8>,
    pub victim_id: Option<u8>,
    pub creator_id: Option<u8>,
    pub item_id: Option<u32>,
    pub before_id: Option<u32>,
    pub after_id: Option<u32>,
    pub gold_gain: Option<i32>,
    pub skill_slot: Option<u8>,
    pub level_up_type: Option<String>,
    pub level: Option<u8>,
    pub ward_type: Option<String>,
    pub assisting_participant_ids: Option<Vec<u8>>,
    pub bounty: Option<u32>,
    pub position: Option<RawPosition>,
    pub kill_type: Option<String>,
    pub multi_kill_length: Option<u8>,
    pub team_id: Option<u16>,
    pub killer_team_id: Option<u16>,
    pub building_type: Option<String>,
    pub lane_type: Option<String>,
    pub tower_type: Option<String>,
    pub monster_type: Option<String>,
    pub monster_sub_type: Option<String>,
    pub transform_type: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct RawPosition {
    pub x: Option<i32>,
    pub y: Option<i32>,
}
