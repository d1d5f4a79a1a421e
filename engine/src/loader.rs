use crate::riot::{
    MatchResponse, RawEvent, RawFrame, RawObjectives, RawParticipant, RawTeam, TimelineResponse,
};
use crate::{
    Event, EventKind, Frame, MatchSummary, Participant, ParticipantFrame, ParticipantId, Position,
    MS_PER_MINUTE, TeamObjectives, TeamSide, TeamSummary, Timeline, WardType,
};
use chrono::DateTime;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error, String),
    Parsing(serde_json::Error, String),
    Invalid(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e, path) => write!(f, "Could not read {path}: {e}"),
            LoadError::Parsing(e, source) => write!(f, "Parse error for {source}: {e}"),
            LoadError::Invalid(msg) => write!(f, "Invalid match data: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e, _) => Some(e),
            LoadError::Parsing(e, _) => Some(e),
            LoadError::Invalid(_) => None,
        }
    }
}

/// Parse a match-v5 summary document.
pub fn load_match(json: &str) -> LoadResult<MatchSummary> {
    let raw: MatchResponse =
        serde_json::from_str(json).map_err(|e| LoadError::Parsing(e, "match summary".into()))?;
    map_match(raw)
}

/// Parse a match-v5 timeline document.
pub fn load_timeline(json: &str) -> LoadResult<Timeline> {
    let raw: TimelineResponse =
        serde_json::from_str(json).map_err(|e| LoadError::Parsing(e, "match timeline".into()))?;
    Ok(map_timeline(raw))
}

pub fn load_match_from_path(path: impl AsRef<Path>) -> LoadResult<MatchSummary> {
    let path = path.as_ref();
    let content = read(path)?;
    let raw: MatchResponse = serde_json::from_str(&content)
        .map_err(|e| LoadError::Parsing(e, path.display().to_string()))?;
    map_match(raw)
}

pub fn load_timeline_from_path(path: impl AsRef<Path>) -> LoadResult<Timeline> {
    let path = path.as_ref();
    let content = read(path)?;
    let raw: TimelineResponse = serde_json::from_str(&content)
        .map_err(|e| LoadError::Parsing(e, path.display().to_string()))?;
    Ok(map_timeline(raw))
}

fn read(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|e| LoadError::Io(e, path.display().to_string()))
}

// ---------------------------------------------------------------------------
// Mapping: match summary
// ---------------------------------------------------------------------------

fn map_match(raw: MatchResponse) -> LoadResult<MatchSummary> {
    let match_id = raw.metadata.and_then(|m| m.match_id).unwrap_or_default();
    let info = raw.info.unwrap_or_default();

    let mut participants = info
        .participants
        .iter()
        .map(map_participant)
        .collect::<LoadResult<Vec<_>>>()?;
    participants.sort_by_key(|p| p.participant_id);

    // Derivations index participants by `participant_id - 1`.
    for (idx, p) in participants.iter().enumerate() {
        if usize::from(p.participant_id) != idx + 1 {
            return Err(LoadError::Invalid(format!(
                "participant ids must be dense from 1, found {} at position {}",
                p.participant_id,
                idx + 1
            )));
        }
    }

    let teams = info
        .teams
        .iter()
        .map(map_team)
        .collect::<LoadResult<Vec<_>>>()?;

    Ok(MatchSummary {
        match_id,
        game_creation: info.game_creation.and_then(DateTime::from_timestamp_millis),
        game_duration_secs: info.game_duration.unwrap_or_default(),
        queue_id: info.queue_id.unwrap_or_default(),
        game_version: info.game_version.unwrap_or_default(),
        participants,
        teams,
    })
}

fn team_side(team_id: Option<u16>, what: &str) -> LoadResult<TeamSide> {
    let id = team_id.unwrap_or_default();
    TeamSide::from_id(id).ok_or_else(|| LoadError::Invalid(format!("{what} has team id {id}")))
}

fn map_participant(p: &RawParticipant) -> LoadResult<Participant> {
    let participant_id = p.participant_id.unwrap_or_default();
    let team = team_side(p.team_id, &format!("participant {participant_id}"))?;

    let riot_id = match (&p.riot_id_game_name, &p.riot_id_tagline) {
        (Some(name), Some(tag)) if !name.is_empty() => format!("{name}#{tag}"),
        (Some(name), None) if !name.is_empty() => name.clone(),
        _ => p.summoner_name.clone().unwrap_or_default(),
    };

    Ok(Participant {
        participant_id,
        team,
        puuid: p.puuid.clone().unwrap_or_default(),
        riot_id,
        champion_name: p.champion_name.clone().unwrap_or_default(),
        team_position: p.team_position.clone().unwrap_or_default(),
        items: p.items(),
        kills: p.kills.unwrap_or_default(),
        deaths: p.deaths.unwrap_or_default(),
        assists: p.assists.unwrap_or_default(),
        total_minions_killed: p.total_minions_killed.unwrap_or_default(),
        neutral_minions_killed: p.neutral_minions_killed.unwrap_or_default(),
        gold_earned: p.gold_earned.unwrap_or_default(),
        vision_score: p.vision_score.unwrap_or_default(),
        champ_level: p.champ_level.unwrap_or_default(),
        win: p.win.unwrap_or(false),
    })
}

fn map_team(t: &RawTeam) -> LoadResult<TeamSummary> {
    Ok(TeamSummary {
        team: team_side(t.team_id, "team")?,
        win: t.win.unwrap_or(false),
        objectives: t.objectives.as_ref().map(map_objectives).unwrap_or_default(),
    })
}

fn map_objectives(o: &RawObjectives) -> TeamObjectives {
    let kills = |obj: &Option<crate::riot::RawObjective>| {
        obj.as_ref().and_then(|o| o.kills).unwrap_or_default()
    };
    TeamObjectives {
        baron: kills(&o.baron),
        champion: kills(&o.champion),
        dragon: kills(&o.dragon),
        horde: kills(&o.horde),
        inhibitor: kills(&o.inhibitor),
        rift_herald: kills(&o.rift_herald),
        tower: kills(&o.tower),
        atakhan: kills(&o.atakhan),
    }
}

// ---------------------------------------------------------------------------
// Mapping: timeline
// ---------------------------------------------------------------------------

fn map_timeline(raw: TimelineResponse) -> Timeline {
    let match_id = raw.metadata.and_then(|m| m.match_id).unwrap_or_default();
    let info = raw.info.unwrap_or_default();
    // Snapshot minutes index frames directly.
    if let Some(interval) = info.frame_interval.filter(|&ms| ms != MS_PER_MINUTE) {
        log::warn!("timeline {match_id} has a {interval}ms frame interval, expected {MS_PER_MINUTE}ms");
    }
    let frames = info.frames.into_iter().map(map_frame).collect();
    Timeline { match_id, frames }
}

fn map_frame(raw: RawFrame) -> Frame {
    let mut participant_frames = BTreeMap::new();
    for (key, pf) in &raw.participant_frames {
        match key.parse::<ParticipantId>() {
            Ok(id) if id != 0 => {
                participant_frames.insert(
                    id,
                    ParticipantFrame {
                        minions_killed: pf.minions_killed.unwrap_or_default(),
                        jungle_minions_killed: pf.jungle_minions_killed.unwrap_or_default(),
                        total_gold: pf.total_gold.unwrap_or_default(),
                        xp: pf.xp.unwrap_or_default(),
                        level: pf.level.unwrap_or_default(),
                    },
                );
            }
            _ => log::warn!("skipping participant frame with key {key:?}"),
        }
    }

    Frame {
        timestamp: raw.timestamp.unwrap_or_default(),
        events: raw.events.iter().map(map_event).collect(),
        participant_frames,
    }
}

/// Riot uses `0` for kills credited to minions, turrets or monsters.
fn actor(id: Option<u8>) -> Option<ParticipantId> {
    id.filter(|&id| id != 0)
}

fn team(id: Option<u16>) -> Option<TeamSide> {
    id.and_then(TeamSide::from_id)
}

fn text(s: &Option<String>) -> String {
    s.clone().unwrap_or_default()
}

fn map_event(e: &RawEvent) -> Event {
    let item_id = e.item_id.unwrap_or_default();
    let ward_type = e
        .ward_type
        .as_deref()
        .map(WardType::from_wire)
        .unwrap_or_default();

    let kind = match e.event_type.as_deref().unwrap_or_default() {
        "ITEM_PURCHASED" => EventKind::ItemPurchased {
            participant_id: actor(e.participant_id),
            item_id,
        },
        "ITEM_SOLD" => EventKind::ItemSold {
            participant_id: actor(e.participant_id),
            item_id,
        },
        "ITEM_DESTROYED" => EventKind::ItemDestroyed {
            participant_id: actor(e.participant_id),
            item_id,
        },
        "ITEM_UNDO" => EventKind::ItemUndo {
            participant_id: actor(e.participant_id),
            before_id: e.before_id.unwrap_or_default(),
            after_id: e.after_id.unwrap_or_default(),
            gold_gain: e.gold_gain.unwrap_or_default(),
        },
        "SKILL_LEVEL_UP" => EventKind::SkillLevelUp {
            participant_id: actor(e.participant_id),
            skill_slot: e.skill_slot.unwrap_or_default(),
            level_up_type: text(&e.level_up_type),
        },
        "LEVEL_UP" => EventKind::LevelUp {
            participant_id: actor(e.participant_id),
            level: e.level.unwrap_or_default(),
        },
        "WARD_PLACED" => EventKind::WardPlaced {
            creator_id: actor(e.creator_id),
            ward_type,
        },
        "WARD_KILL" => EventKind::WardKill {
            killer_id: actor(e.killer_id),
            ward_type,
        },
        "CHAMPION_KILL" => EventKind::ChampionKill {
            killer_id: actor(e.killer_id),
            victim_id: actor(e.victim_id),
            assisting_participant_ids: e.assisting_participant_ids.clone().unwrap_or_default(),
            bounty: e.bounty.unwrap_or_default(),
            position: e.position.map(|p| Position {
                x: p.x.unwrap_or_default(),
                y: p.y.unwrap_or_default(),
            }),
        },
        "CHAMPION_SPECIAL_KILL" => EventKind::ChampionSpecialKill {
            killer_id: actor(e.killer_id),
            kill_type: text(&e.kill_type),
            multi_kill_length: e.multi_kill_length,
        },
        "BUILDING_KILL" => EventKind::BuildingKill {
            killer_id: actor(e.killer_id),
            team: team(e.team_id),
            building_type: text(&e.building_type),
            lane_type: text(&e.lane_type),
            tower_type: e.tower_type.clone(),
        },
        "TURRET_PLATE_DESTROYED" => EventKind::TurretPlateDestroyed {
            killer_id: actor(e.killer_id),
            team: team(e.team_id),
            lane_type: text(&e.lane_type),
        },
        "ELITE_MONSTER_KILL" => EventKind::EliteMonsterKill {
            killer_id: actor(e.killer_id),
            killer_team: team(e.killer_team_id),
            monster_type: text(&e.monster_type),
            monster_sub_type: e.monster_sub_type.clone(),
        },
        "CHAMPION_TRANSFORM" => EventKind::ChampionTransform {
            participant_id: actor(e.participant_id),
            transform_type: text(&e.transform_type),
        },
        "DRAGON_SOUL_GIVEN" => EventKind::DragonSoulGiven {
            team: team(e.team_id),
            name: text(&e.name),
        },
        other => EventKind::Other {
            event_type: other.to_owned(),
        },
    };

    Event {
        timestamp: e.timestamp.unwrap_or_default(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE_MATCH: &str = include_str!("../fixtures/match.json");
    const FIXTURE_TIMELINE: &str = include_str!("../fixtures/timeline.json");

    #[test]
    fn fixture_match_parses() {
        let summary = load_match(FIXTURE_MATCH).expect("fixture match should parse");
        assert_eq!(summary.match_id, "EUW1_7000000001");
        assert_eq!(summary.game_duration_secs, 1200);
        assert_eq!(summary.participants.len(), 10);
        assert_eq!(summary.teams.len(), 2);
        assert!(summary.game_creation.is_some());
        let support = summary.participant(5).expect("participant 5");
        assert_eq!(support.team, TeamSide::Blue);
        assert_eq!(support.riot_id, "Warden#EUW");
        assert_eq!(support.items[1], 3869);
    }

    #[test]
    fn fixture_match_orders_participants_by_id() {
        let summary = load_match(FIXTURE_MATCH).expect("fixture match should parse");
        let ids: Vec<_> = summary.participants.iter().map(|p| p.participant_id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn fixture_timeline_parses() {
        let timeline = load_timeline(FIXTURE_TIMELINE).expect("fixture timeline should parse");
        assert_eq!(timeline.match_id, "EUW1_7000000001");
        assert_eq!(timeline.frames.len(), 3);
        assert!(timeline.frames[0].events.is_empty(), "frame without events maps to empty");
        assert_eq!(timeline.frames[2].participant_frames.len(), 10);
        let cs = timeline.frames[2].participant_frames[&1].cs();
        assert_eq!(cs, 16);
    }

    #[test]
    fn fixture_timeline_maps_event_variants() {
        let timeline = load_timeline(FIXTURE_TIMELINE).expect("fixture timeline should parse");
        let kinds: Vec<&EventKind> = timeline.events().map(|e| &e.kind).collect();
        assert!(matches!(
            kinds[0],
            EventKind::ItemPurchased { participant_id: Some(1), item_id: 1055 }
        ));
        assert!(kinds.iter().any(|k| matches!(
            k,
            EventKind::WardPlaced { creator_id: Some(5), ward_type: WardType::SightWard }
        )));
        assert!(kinds.iter().any(|k| matches!(
            k,
            EventKind::EliteMonsterKill { killer_team: Some(TeamSide::Red), .. }
        )));
        assert!(kinds.iter().any(|k| matches!(
            k,
            EventKind::Other { event_type } if event_type == "PAUSE_END"
        )));
    }

    #[test]
    fn zero_killer_id_means_no_actor() {
        let raw = RawEvent {
            event_type: Some("CHAMPION_KILL".into()),
            timestamp: Some(500_000),
            killer_id: Some(0),
            victim_id: Some(3),
            ..Default::default()
        };
        let event = map_event(&raw);
        assert!(matches!(
            event.kind,
            EventKind::ChampionKill { killer_id: None, victim_id: Some(3), .. }
        ));
    }

    #[test]
    fn missing_frames_map_to_empty_timeline() {
        let timeline = load_timeline(r#"{"metadata":{"matchId":"X"},"info":{}}"#)
            .expect("empty info should parse");
        assert!(timeline.frames.is_empty());
        let timeline = load_timeline("{}").expect("empty document should parse");
        assert!(timeline.frames.is_empty());
    }

    #[test]
    fn invalid_team_id_is_rejected() {
        let json = r#"{"info":{"participants":[{"participantId":1,"teamId":300}]}}"#;
        let err = load_match(json).expect_err("team 300 is not a side");
        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn gap_in_participant_ids_is_rejected() {
        let json = r#"{"info":{"participants":[
            {"participantId":1,"teamId":100},
            {"participantId":3,"teamId":200}
        ]}}"#;
        let err = load_match(json).expect_err("ids must be dense");
        assert!(err.to_string().contains("dense"));
    }

    #[test]
    fn malformed_json_reports_source() {
        let err = load_timeline("{not json").expect_err("malformed json");
        assert!(err.to_string().starts_with("Parse error for match timeline"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_match_from_path("/nonexistent/lanescope/match.json").expect_err("no file");
        assert!(matches!(err, LoadError::Io(_, _)));
    }
}
