//! Builders shared by the unit tests.

use crate::{
    Event, EventKind, Frame, MatchSummary, Participant, ParticipantFrame, ParticipantId, TeamSide,
    TeamSummary, Timeline, WardType,
};

pub fn purchase(timestamp: u64, pid: ParticipantId, item_id: u32) -> Event {
    Event {
        timestamp,
        kind: EventKind::ItemPurchased { participant_id: Some(pid), item_id },
    }
}

pub fn sold(timestamp: u64, pid: ParticipantId, item_id: u32) -> Event {
    Event {
        timestamp,
        kind: EventKind::ItemSold { participant_id: Some(pid), item_id },
    }
}

pub fn destroyed(timestamp: u64, pid: ParticipantId, item_id: u32) -> Event {
    Event {
        timestamp,
        kind: EventKind::ItemDestroyed { participant_id: Some(pid), item_id },
    }
}

pub fn skill(timestamp: u64, pid: ParticipantId, skill_slot: u8) -> Event {
    Event {
        timestamp,
        kind: EventKind::SkillLevelUp {
            participant_id: Some(pid),
            skill_slot,
            level_up_type: "NORMAL".into(),
        },
    }
}

pub fn level_up(timestamp: u64, pid: ParticipantId, level: u8) -> Event {
    Event {
        timestamp,
        kind: EventKind::LevelUp { participant_id: Some(pid), level },
    }
}

pub fn ward_placed(timestamp: u64, creator: ParticipantId, ward_type: WardType) -> Event {
    Event {
        timestamp,
        kind: EventKind::WardPlaced { creator_id: Some(creator), ward_type },
    }
}

pub fn ward_kill(timestamp: u64, killer: ParticipantId, ward_type: WardType) -> Event {
    Event {
        timestamp,
        kind: EventKind::WardKill { killer_id: Some(killer), ward_type },
    }
}

pub fn kill(timestamp: u64, killer: Option<ParticipantId>, victim: ParticipantId) -> Event {
    Event {
        timestamp,
        kind: EventKind::ChampionKill {
            killer_id: killer,
            victim_id: Some(victim),
            assisting_participant_ids: vec![],
            bounty: 300,
            position: None,
        },
    }
}

pub fn monster(timestamp: u64, team: TeamSide, monster_type: &str, sub_type: Option<&str>) -> Event {
    Event {
        timestamp,
        kind: EventKind::EliteMonsterKill {
            killer_id: Some(if team == TeamSide::Blue { 2 } else { 7 }),
            killer_team: Some(team),
            monster_type: monster_type.into(),
            monster_sub_type: sub_type.map(Into::into),
        },
    }
}

pub fn frame(timestamp: u64, events: Vec<Event>) -> Frame {
    Frame {
        timestamp,
        events,
        ..Default::default()
    }
}

pub fn timeline(frames: Vec<Frame>) -> Timeline {
    Timeline {
        match_id: "TEST_1".into(),
        frames,
    }
}

/// One frame per minute, 0..=minutes, with no events. Participant `i` has
/// `cs = 10 * minute + i`, `gold = 100 * minute + i`, `xp = 50 * minute + i`.
pub fn counting_frames(minutes: usize) -> Vec<Frame> {
    (0..=minutes)
        .map(|m| {
            let m32 = m as u32;
            let participant_frames = (1..=10u8)
                .map(|id| {
                    let i = u32::from(id);
                    (
                        id,
                        ParticipantFrame {
                            minions_killed: 10 * m32 + i,
                            jungle_minions_killed: 0,
                            total_gold: 100 * m32 + i,
                            xp: 50 * m32 + i,
                            level: 1,
                        },
                    )
                })
                .collect();
            Frame {
                timestamp: m as u64 * crate::MS_PER_MINUTE,
                events: vec![],
                participant_frames,
            }
        })
        .collect()
}

pub fn participant(participant_id: ParticipantId, team: TeamSide) -> Participant {
    Participant {
        participant_id,
        team,
        champion_name: format!("Champion{participant_id}"),
        ..Default::default()
    }
}

/// Ten participants: 1..=5 blue, 6..=10 red, with empty objectives.
pub fn summary(game_duration_secs: u64) -> MatchSummary {
    MatchSummary {
        match_id: "TEST_1".into(),
        game_duration_secs,
        participants: (1..=10)
            .map(|id| participant(id, if id <= 5 { TeamSide::Blue } else { TeamSide::Red }))
            .collect(),
        teams: vec![
            TeamSummary {
                team: TeamSide::Blue,
                ..Default::default()
            },
            TeamSummary {
                team: TeamSide::Red,
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
