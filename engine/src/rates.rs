use crate::{MatchSummary, ParticipantId};
use serde::Serialize;

/// `numerator / denominator`, or `0.0` when the result would be NaN or infinite.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() { value } else { 0.0 }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Kda {
    Ratio(f64),
    /// No deaths.
    Perfect,
}

impl Kda {
    pub fn new(kills: u32, deaths: u32, assists: u32) -> Self {
        if deaths == 0 {
            Kda::Perfect
        } else {
            Kda::Ratio(ratio(f64::from(kills + assists), f64::from(deaths)))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticipantRates {
    pub participant_id: ParticipantId,
    pub cs_per_min: f64,
    pub gold_per_min: f64,
    pub vision_per_min: f64,
    /// Share of the team's kills the participant killed or assisted, 0..=1.
    pub kill_participation: f64,
    pub kda: Kda,
}

pub fn participant_rates(summary: &MatchSummary, id: ParticipantId) -> Option<ParticipantRates> {
    let p = summary.participant(id)?;
    let minutes = summary.game_minutes();
    let team_kills: u32 = summary.members(p.team).map(|m| m.kills).sum();

    Some(ParticipantRates {
        participant_id: id,
        cs_per_min: ratio(f64::from(p.total_cs()), minutes),
        gold_per_min: ratio(f64::from(p.gold_earned), minutes),
        vision_per_min: ratio(f64::from(p.vision_score), minutes),
        kill_participation: ratio(f64::from(p.kills + p.assists), f64::from(team_kills)),
        kda: Kda::new(p.kills, p.deaths, p.assists),
    })
}

pub fn all_rates(summary: &MatchSummary) -> Vec<ParticipantRates> {
    summary
        .participants
        .iter()
        .filter_map(|p| participant_rates(summary, p.participant_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn ratio_guards_zero_and_non_finite() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_eq!(ratio(f64::MAX, f64::MIN_POSITIVE), 0.0);
        assert_eq!(ratio(9.0, 3.0), 3.0);
    }

    #[test]
    fn twenty_minute_game_cs_per_min() {
        let mut summary = testutil::summary(1200);
        for p in &mut summary.participants {
            p.total_minions_killed = 150 + u32::from(p.participant_id);
            p.neutral_minions_killed = 10;
        }
        let rates = all_rates(&summary);
        assert_eq!(rates.len(), 10);
        for (p, r) in summary.participants.iter().zip(&rates) {
            assert_eq!(r.cs_per_min, f64::from(p.total_cs()) / 20.0);
        }
    }

    #[test]
    fn zero_duration_yields_zero_rates() {
        let mut summary = testutil::summary(0);
        summary.participants[0].gold_earned = 500;
        summary.participants[0].total_minions_killed = 7;
        let r = participant_rates(&summary, 1).expect("participant 1");
        assert_eq!(r.cs_per_min, 0.0);
        assert_eq!(r.gold_per_min, 0.0);
        assert_eq!(r.vision_per_min, 0.0);
    }

    #[test]
    fn kill_participation_uses_team_kills() {
        let mut summary = testutil::summary(1800);
        summary.participants[0].kills = 3;
        summary.participants[0].assists = 2;
        summary.participants[1].kills = 5;
        summary.participants[6].kills = 20; // red, not counted
        let r = participant_rates(&summary, 1).expect("participant 1");
        assert_eq!(r.kill_participation, 5.0 / 8.0);
        let r = participant_rates(&summary, 3).expect("participant 3");
        assert_eq!(r.kill_participation, 0.0);
    }

    #[test]
    fn kill_participation_without_team_kills_is_zero() {
        let summary = testutil::summary(1800);
        let r = participant_rates(&summary, 6).expect("participant 6");
        assert_eq!(r.kill_participation, 0.0);
    }

    #[test]
    fn kda_is_perfect_without_deaths() {
        assert_eq!(Kda::new(4, 0, 6), Kda::Perfect);
        assert_eq!(Kda::new(4, 2, 6), Kda::Ratio(5.0));
        assert_eq!(Kda::new(0, 3, 0), Kda::Ratio(0.0));
    }

    #[test]
    fn unknown_participant_has_no_rates() {
        assert!(participant_rates(&testutil::summary(1200), 0).is_none());
    }
}
