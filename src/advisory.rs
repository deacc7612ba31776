// ABOUTME: Advisory composer - score-tier tips, compound warnings, pace guidance
// ABOUTME: Boldness shifts tier thresholds and gates which warnings surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! # Advisory Composition
//!
//! Turns a score breakdown plus the raw conditions into runner-facing text:
//! one tier-ladder tip crossed with run type, additive compound-condition
//! warnings, long-run notes, and a pace adjustment. Tips are ranked: the
//! tier tip always leads, warnings follow, notes trail.
//!
//! The runner's boldness notch (-2..=2) moves the tier thresholds and decides
//! how much warning text they see. Bold runners get danger-tier warnings
//! only; cautious runners get everything plus a shorten-the-run reminder.

use serde::{Deserialize, Serialize};

use crate::config::AdvisoryConfig;
use crate::psychrometrics::dew_point_f;
use crate::scoring::ScoreBreakdown;
use runcast_core::models::{RunType, WeatherSnapshot};

/// Apparent temperature at which long runs get a hydration-cadence note, °F
const HYDRATION_NOTE_APPARENT_F: f64 = 60.0;
/// Above this, the cadence tightens, °F
const HYDRATION_TIGHT_APPARENT_F: f64 = 75.0;
/// Lookahead apparent-temperature drift that earns a drift note, °F
const DRIFT_NOTE_F: f64 = 8.0;
/// Lookahead precipitation probability that earns an incoming-rain note
const INCOMING_RAIN_PROB_PCT: f64 = 40.0;

/// Score tier after boldness adjustment, best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    /// Nothing between the runner and a good day
    Excellent,
    /// Minor annoyances at most
    Good,
    /// Noticeably imperfect; plan around it
    Fair,
    /// Conditions will cost real effort
    Tough,
    /// Conditions degrade any run
    Harsh,
    /// Running outdoors is questionable
    Dangerous,
}

impl ScoreTier {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Tough => "tough",
            Self::Harsh => "harsh",
            Self::Dangerous => "dangerous",
        }
    }
}

/// Pace guidance attached to every advisory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceAdjustment {
    /// Suggested adjustment to goal pace; negative means conditions give
    /// pace back
    pub seconds_per_mile: i16,
    /// One-line rationale
    pub note: String,
}

/// Complete advisory output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    /// Tier the score landed in after the boldness shift
    pub tier: ScoreTier,
    /// Ranked tips: tier tip first, compound warnings, then notes
    pub tips: Vec<String>,
    /// Pace guidance for the tier
    pub pace: PaceAdjustment,
}

/// Stateless advisory composer configured once and reused across calls
#[derive(Debug, Clone, Default)]
pub struct AdvisoryComposer {
    config: AdvisoryConfig,
}

impl AdvisoryComposer {
    /// Composer with the stock tuning
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Composer with host-supplied tuning
    #[must_use]
    pub const fn with_config(config: AdvisoryConfig) -> Self {
        Self { config }
    }

    /// Compose an advisory from the current conditions only
    #[must_use]
    pub fn compose(
        &self,
        breakdown: &ScoreBreakdown,
        snapshot: &WeatherSnapshot,
        run_type: RunType,
        boldness: i8,
    ) -> Advisory {
        self.compose_with_lookahead(breakdown, snapshot, run_type, boldness, &[])
    }

    /// Compose an advisory with forecast hours for long-run drift and
    /// incoming-rain notes
    #[must_use]
    pub fn compose_with_lookahead(
        &self,
        breakdown: &ScoreBreakdown,
        snapshot: &WeatherSnapshot,
        run_type: RunType,
        boldness: i8,
        lookahead: &[WeatherSnapshot],
    ) -> Advisory {
        let snapshot = snapshot.normalized();
        let boldness = boldness.clamp(-2, 2);
        let tier = self.tier_for(breakdown.score, boldness);

        let mut tips = vec![tier_tip(tier, run_type).to_owned()];
        self.push_warnings(&mut tips, &snapshot, tier, boldness);
        if run_type == RunType::LongRun {
            push_long_run_notes(&mut tips, &snapshot, lookahead);
        }
        if boldness <= -1 {
            tips.push(
                "When in doubt, shorten the route and keep the bail-out options close.".to_owned(),
            );
        }

        Advisory {
            tier,
            tips,
            pace: pace_for(tier),
        }
    }

    /// Tier thresholds move down for bold runners and up for cautious ones
    fn tier_for(&self, score: u8, boldness: i8) -> ScoreTier {
        let shift = self.config.boldness_shift_per_notch * f64::from(boldness);
        let score = f64::from(score);
        if score >= 90.0 - shift {
            ScoreTier::Excellent
        } else if score >= 75.0 - shift {
            ScoreTier::Good
        } else if score >= 60.0 - shift {
            ScoreTier::Fair
        } else if score >= 40.0 - shift {
            ScoreTier::Tough
        } else if score >= 20.0 - shift {
            ScoreTier::Harsh
        } else {
            ScoreTier::Dangerous
        }
    }

    fn push_warnings(
        &self,
        tips: &mut Vec<String>,
        snapshot: &WeatherSnapshot,
        tier: ScoreTier,
        boldness: i8,
    ) {
        // Bold runners only hear about conditions that will hurt them.
        if boldness >= 1 && tier < ScoreTier::Harsh {
            return;
        }
        let config = &self.config;
        let dew_point = dew_point_f(snapshot.air_temp, snapshot.humidity);

        if snapshot.apparent_temp >= config.heat_warning_apparent_f
            && dew_point >= config.heat_warning_dew_point_f
        {
            tips.push(
                "Heat and humidity are compounding; slow down early and carry more fluid than feels necessary.".to_owned(),
            );
        }
        if snapshot.apparent_temp <= config.cold_warning_apparent_f
            && snapshot.wind_speed >= config.cold_warning_wind_mph
        {
            tips.push(
                "Wind is driving the cold through layers; cover exposed skin and start into the wind.".to_owned(),
            );
        }
        if snapshot.apparent_temp <= config.icy_warning_apparent_f
            && snapshot.precip_probability >= config.icy_warning_precip_pct
        {
            tips.push(
                "Freezing precipitation is possible; expect poor traction and shorten your stride on slick stretches.".to_owned(),
            );
        }
    }
}

/// The tier-by-run-type tip ladder
fn tier_tip(tier: ScoreTier, run_type: RunType) -> &'static str {
    match (tier, run_type) {
        (ScoreTier::Excellent, RunType::Easy) => {
            "Near-perfect running weather. Enjoy the miles."
        }
        (ScoreTier::Excellent, RunType::Workout) => {
            "Green light for a hard session; conditions will not be the limiter."
        }
        (ScoreTier::Excellent, RunType::LongRun) => {
            "Ideal long-run weather. Lock in your goal pace and go."
        }
        (ScoreTier::Good, RunType::Easy) => {
            "Good conditions with minor annoyances. Dress right and forget the weather."
        }
        (ScoreTier::Good, RunType::Workout) => {
            "Solid workout weather; expect paces close to normal."
        }
        (ScoreTier::Good, RunType::LongRun) => {
            "Good day to go long. Settle in and let the rhythm come."
        }
        (ScoreTier::Fair, RunType::Easy) => {
            "Runnable but imperfect. Keep the effort honest and the expectations modest."
        }
        (ScoreTier::Fair, RunType::Workout) => {
            "Conditions will blunt the sharp end; judge the session by effort, not splits."
        }
        (ScoreTier::Fair, RunType::LongRun) => {
            "Manageable for a long run if you respect the conditions from the first mile."
        }
        (ScoreTier::Tough, RunType::Easy) => {
            "Rough out there. Shorten or slow the run and call it a win."
        }
        (ScoreTier::Tough, RunType::Workout) => {
            "Consider moving the session or converting it to an easy effort."
        }
        (ScoreTier::Tough, RunType::LongRun) => {
            "Today favors a shorter long run; bank the volume another day."
        }
        (ScoreTier::Harsh, RunType::Easy) => {
            "Harsh conditions. Keep it short, stay close to home, and be ready to cut it."
        }
        (ScoreTier::Harsh, RunType::Workout) => {
            "Hard efforts magnify conditions like these; the treadmill is the better workout."
        }
        (ScoreTier::Harsh, RunType::LongRun) => {
            "A long run in this is a risk, not a workout. Split it up or move it."
        }
        (ScoreTier::Dangerous, RunType::Easy) => {
            "Conditions are hostile to running. Indoors is the right call."
        }
        (ScoreTier::Dangerous, RunType::Workout) => {
            "Do not race the weather. Take the session indoors."
        }
        (ScoreTier::Dangerous, RunType::LongRun) => {
            "No long run is worth these conditions. Reschedule."
        }
    }
}

/// Pace guidance per tier
fn pace_for(tier: ScoreTier) -> PaceAdjustment {
    let (seconds_per_mile, note) = match tier {
        ScoreTier::Excellent => (-5, "Conditions give a little pace back; take it if it comes."),
        ScoreTier::Good => (0, "Run your planned paces."),
        ScoreTier::Fair => (5, "Give back a few seconds per mile and hold effort steady."),
        ScoreTier::Tough => (15, "Ease off meaningfully; effort is the metric today."),
        ScoreTier::Harsh => (30, "Jog it. Pace targets do not apply."),
        ScoreTier::Dangerous => (60, "If you must run, shuffle and stay near shelter."),
    };
    PaceAdjustment {
        seconds_per_mile,
        note: note.to_owned(),
    }
}

fn push_long_run_notes(
    tips: &mut Vec<String>,
    snapshot: &WeatherSnapshot,
    lookahead: &[WeatherSnapshot],
) {
    if !lookahead.is_empty() {
        let peak = lookahead
            .iter()
            .map(|s| s.normalized().apparent_temp)
            .fold(f64::NEG_INFINITY, f64::max);
        let drift = peak - snapshot.apparent_temp;
        if drift >= DRIFT_NOTE_F {
            let rise = drift.round();
            tips.push(format!(
                "Temperatures climb roughly {rise} degrees before you finish; dress for the last hour, not the first."
            ));
        } else if drift <= -DRIFT_NOTE_F {
            tips.push(
                "Temperatures fall off noticeably mid-run; carry a layer you can add.".to_owned(),
            );
        }

        let rain_peak = lookahead
            .iter()
            .map(|s| s.normalized().precip_probability)
            .fold(f64::NEG_INFINITY, f64::max);
        if rain_peak > INCOMING_RAIN_PROB_PCT && snapshot.precip_rate <= 0.0 {
            tips.push("Rain moves in before you finish; pack a shell.".to_owned());
        }
    }

    if snapshot.apparent_temp >= HYDRATION_TIGHT_APPARENT_F {
        tips.push("Take fluid every 15 minutes from the start; thirst lags badly in this heat.".to_owned());
    } else if snapshot.apparent_temp >= HYDRATION_NOTE_APPARENT_F {
        tips.push("Plan fluid roughly every 20 minutes once you are past the first half hour.".to_owned());
    }
}
