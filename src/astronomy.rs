// ABOUTME: Astronomical primitives - NOAA solar events and Schlyter lunar position
// ABOUTME: Sunrise/sunset/twilight lists, solar elevation, moon altitude/phase/illumination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Runcast Weather Intelligence

//! Sun and moon geometry for a point on Earth.
//!
//! Solar events use the NOAA Solar Calculator equations (fractional-year
//! Fourier fits for the equation of time and declination). Lunar position
//! uses Paul Schlyter's simplified theory with the major perturbation terms,
//! good to a fraction of a degree over the decades this engine cares about.
//!
//! Polar latitudes are first-class: a date where the sun never crosses a
//! horizon altitude simply produces empty event lists, never an error.

use std::f64::consts::PI;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use runcast_core::constants::solar;
use runcast_core::errors::{EngineError, EngineResult};

/// Degree-argument sine, the natural unit for almanac formulas.
fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

fn atan2d(y: f64, x: f64) -> f64 {
    y.atan2(x).to_degrees()
}

fn asind(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}

/// Normalize an angle to [0, 360).
fn rev(deg: f64) -> f64 {
    deg - 360.0 * (deg / 360.0).floor()
}

/// Sunrise/sunset and civil twilight instants for one local calendar date.
///
/// Each list holds zero or one entries. An empty list means the sun never
/// crossed that altitude on the date in question: midnight sun leaves both
/// sunrise and sunset empty, and a high-latitude summer can leave the civil
/// twilight lists empty while sunrise and sunset are still present.
#[derive(Debug, Clone, PartialEq)]
pub struct SunEvents {
    /// Sunrise instants (solar altitude -0.833°, rising)
    pub sunrises: Vec<DateTime<Tz>>,
    /// Sunset instants (solar altitude -0.833°, setting)
    pub sunsets: Vec<DateTime<Tz>>,
    /// Civil dawn instants (solar altitude -6°, rising)
    pub civil_dawns: Vec<DateTime<Tz>>,
    /// Civil dusk instants (solar altitude -6°, setting)
    pub civil_dusks: Vec<DateTime<Tz>>,
}

impl SunEvents {
    /// True when the date has neither a sunrise nor a sunset.
    #[must_use]
    pub fn is_polar(&self) -> bool {
        self.sunrises.is_empty() && self.sunsets.is_empty()
    }
}

/// Solar elevation and azimuth at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Altitude above the horizon in degrees, negative below
    pub elevation_deg: f64,
    /// Compass azimuth in degrees, clockwise from north
    pub azimuth_deg: f64,
}

/// Topocentric lunar position plus phase information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPosition {
    /// Altitude above the horizon in degrees, parallax-corrected
    pub altitude_deg: f64,
    /// Compass azimuth in degrees, clockwise from north
    pub azimuth_deg: f64,
    /// Sunlit fraction of the visible disc, 0..1
    pub illuminated_fraction: f64,
    /// Named phase octant
    pub phase: MoonPhase,
}

/// The eight named phase octants, 45° of sun-moon elongation each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoonPhase {
    /// Elongation near 0°
    New,
    /// Elongation near 45°
    WaxingCrescent,
    /// Elongation near 90°
    FirstQuarter,
    /// Elongation near 135°
    WaxingGibbous,
    /// Elongation near 180°
    Full,
    /// Elongation near 225°
    WaningGibbous,
    /// Elongation near 270°
    LastQuarter,
    /// Elongation near 315°
    WaningCrescent,
}

impl MoonPhase {
    /// Human-readable phase name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase octant from the moon-minus-sun ecliptic longitude difference.
    fn from_elongation_deg(diff_deg: f64) -> Self {
        // Sector centers sit at 0°, 45°, ... so each octant spans ±22.5°
        let sector = (rev(diff_deg + 22.5) / 45.0) as u8 % 8;
        match sector {
            0 => Self::New,
            1 => Self::WaxingCrescent,
            2 => Self::FirstQuarter,
            3 => Self::WaxingGibbous,
            4 => Self::Full,
            5 => Self::WaningGibbous,
            6 => Self::LastQuarter,
            _ => Self::WaningCrescent,
        }
    }
}

/// NOAA fractional year in radians for a given day of year and hour.
fn fractional_year_rad(day_of_year: f64, hour: f64) -> f64 {
    2.0 * PI / 365.0 * (day_of_year - 1.0 + (hour - 12.0) / 24.0)
}

/// NOAA equation of time in minutes.
fn equation_of_time_min(gamma: f64) -> f64 {
    229.18
        * (0.000_075 + 0.001_868 * gamma.cos()
            - 0.032_077 * gamma.sin()
            - 0.014_615 * (2.0 * gamma).cos()
            - 0.040_849 * (2.0 * gamma).sin())
}

/// NOAA solar declination in radians.
fn solar_declination_rad(gamma: f64) -> f64 {
    0.006_918 - 0.399_912 * gamma.cos() + 0.070_257 * gamma.sin()
        - 0.006_758 * (2.0 * gamma).cos()
        + 0.000_907 * (2.0 * gamma).sin()
        - 0.002_697 * (3.0 * gamma).cos()
        + 0.001_48 * (3.0 * gamma).sin()
}

/// Half-day hour angle in degrees for a crossing altitude, or `None` when
/// the sun never reaches that altitude on this date (polar day/night).
fn crossing_hour_angle_deg(lat_deg: f64, decl_rad: f64, altitude_deg: f64) -> Option<f64> {
    let zenith_rad = (90.0 - altitude_deg).to_radians();
    let lat_rad = lat_deg.to_radians();
    let cos_ha =
        zenith_rad.cos() / (lat_rad.cos() * decl_rad.cos()) - lat_rad.tan() * decl_rad.tan();
    if cos_ha.abs() > 1.0 {
        None
    } else {
        Some(cos_ha.acos().to_degrees())
    }
}

/// UTC midnight of a calendar date as a `DateTime<Utc>`.
fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&NaiveDateTime::new(date, NaiveTime::MIN))
}

fn crossing_pair(
    date: NaiveDate,
    lat_deg: f64,
    lon_deg: f64,
    tz: Tz,
    altitude_deg: f64,
) -> (Vec<DateTime<Tz>>, Vec<DateTime<Tz>>) {
    let gamma = fractional_year_rad(f64::from(date.ordinal()), 12.0);
    let eqtime = equation_of_time_min(gamma);
    let decl = solar_declination_rad(gamma);

    match crossing_hour_angle_deg(lat_deg, decl, altitude_deg) {
        None => (Vec::new(), Vec::new()),
        Some(ha) => {
            // Longitude is east-positive; minutes are past 00:00 UTC.
            let rise_min = 720.0 - 4.0 * (lon_deg + ha) - eqtime;
            let set_min = 720.0 - 4.0 * (lon_deg - ha) - eqtime;
            let midnight = utc_midnight(date);
            let to_local = |minutes: f64| {
                let instant = midnight + Duration::milliseconds((minutes * 60_000.0) as i64);
                instant.with_timezone(&tz)
            };
            (vec![to_local(rise_min)], vec![to_local(set_min)])
        }
    }
}

/// Sun events for one local calendar date at a coordinate.
///
/// Polar day and polar night yield empty sunrise/sunset lists; the civil
/// twilight lists are computed independently, so white-night latitudes can
/// report sunsets while civil dusk never arrives.
#[must_use]
pub fn sun_events(date: NaiveDate, lat_deg: f64, lon_deg: f64, tz: Tz) -> SunEvents {
    let (sunrises, sunsets) =
        crossing_pair(date, lat_deg, lon_deg, tz, solar::HORIZON_ALTITUDE_DEG);
    let (civil_dawns, civil_dusks) =
        crossing_pair(date, lat_deg, lon_deg, tz, solar::CIVIL_TWILIGHT_ALTITUDE_DEG);
    SunEvents {
        sunrises,
        sunsets,
        civil_dawns,
        civil_dusks,
    }
}

/// Sun events for today and tomorrow, as seen from an instant.
///
/// The local calendar date of `now` in `tz` and the following date are both
/// computed and their event lists concatenated in order, so callers planning
/// a run in the next 24-48 hours get every crossing without date juggling.
#[must_use]
pub fn sun_events_window(now: DateTime<Utc>, lat_deg: f64, lon_deg: f64, tz: Tz) -> SunEvents {
    let today = now.with_timezone(&tz).date_naive();
    let mut events = sun_events(today, lat_deg, lon_deg, tz);
    if let Some(tomorrow) = today.succ_opt() {
        let next = sun_events(tomorrow, lat_deg, lon_deg, tz);
        events.sunrises.extend(next.sunrises);
        events.sunsets.extend(next.sunsets);
        events.civil_dawns.extend(next.civil_dawns);
        events.civil_dusks.extend(next.civil_dusks);
    }
    events
}

/// Sun events with the timezone given by IANA name.
///
/// # Errors
///
/// Returns [`EngineError::UnknownTimezone`] when the name is not in the
/// bundled tz database.
pub fn sun_events_named(
    date: NaiveDate,
    lat_deg: f64,
    lon_deg: f64,
    tz_name: &str,
) -> EngineResult<SunEvents> {
    let tz: Tz = tz_name.parse().map_err(|_| EngineError::UnknownTimezone {
        name: tz_name.to_owned(),
    })?;
    Ok(sun_events(date, lat_deg, lon_deg, tz))
}

/// Solar elevation and azimuth at an instant, NOAA true-solar-time method.
#[must_use]
pub fn solar_position(at: DateTime<Utc>, lat_deg: f64, lon_deg: f64) -> SolarPosition {
    let date = at.date_naive();
    let minutes_utc = (at - utc_midnight(date)).num_milliseconds() as f64 / 60_000.0;
    let gamma = fractional_year_rad(f64::from(date.ordinal()), minutes_utc / 60.0);
    let eqtime = equation_of_time_min(gamma);
    let decl = solar_declination_rad(gamma);

    // True solar time folds in the equation of time and the longitude offset.
    let tst = minutes_utc + eqtime + 4.0 * lon_deg;
    let ha_deg = tst / 4.0 - 180.0;

    let lat_rad = lat_deg.to_radians();
    let cos_zenith =
        lat_rad.sin() * decl.sin() + lat_rad.cos() * decl.cos() * ha_deg.to_radians().cos();
    let zenith_deg = cos_zenith.clamp(-1.0, 1.0).acos().to_degrees();
    let elevation_deg = 90.0 - zenith_deg;

    // Azimuth clockwise from north; flip around noon by hour-angle sign.
    let sin_zenith = sind(zenith_deg);
    let azimuth_deg = if sin_zenith.abs() < 1e-9 {
        180.0
    } else {
        let cos_az = (decl.sin() - lat_rad.sin() * cos_zenith) / (lat_rad.cos() * sin_zenith);
        let az = cos_az.clamp(-1.0, 1.0).acos().to_degrees();
        if ha_deg > 0.0 {
            360.0 - az
        } else {
            az
        }
    };

    SolarPosition {
        elevation_deg,
        azimuth_deg,
    }
}

/// Solar elevation only, for callers that do not need the azimuth.
#[must_use]
pub fn solar_elevation_deg(at: DateTime<Utc>, lat_deg: f64, lon_deg: f64) -> f64 {
    solar_position(at, lat_deg, lon_deg).elevation_deg
}

/// Days since 2000 Jan 0.0, the epoch of Schlyter's orbital elements.
fn schlyter_day(at: DateTime<Utc>) -> f64 {
    let jd = at.timestamp_millis() as f64 / 86_400_000.0 + 2_440_587.5;
    jd - 2_451_543.5
}

/// Sun state needed by the lunar theory: mean anomaly, argument of
/// perihelion, and true ecliptic longitude, all in degrees.
struct SunState {
    mean_anomaly: f64,
    arg_perihelion: f64,
    true_longitude: f64,
}

fn sun_state(d: f64) -> SunState {
    let w = rev(282.940_4 + 4.709_35e-5 * d);
    let e = 0.016_709 - 1.151e-9 * d;
    let m = rev(356.047_0 + 0.985_600_258_5 * d);

    // One Kepler step is enough at solar eccentricity.
    let e_anom = m + e.to_degrees() * sind(m) * (1.0 + e * cosd(m));
    let xv = cosd(e_anom) - e;
    let yv = (1.0 - e * e).sqrt() * sind(e_anom);
    let v = atan2d(yv, xv);

    SunState {
        mean_anomaly: m,
        arg_perihelion: w,
        true_longitude: rev(v + w),
    }
}

/// Topocentric moon position, illumination, and phase octant.
///
/// Schlyter's element set with the major longitude, latitude, and distance
/// perturbations; the parallax correction uses the instantaneous distance in
/// Earth radii, so the reported altitude is what an observer at sea level
/// actually sees (up to ~1° below the geocentric value).
#[must_use]
pub fn moon_position(at: DateTime<Utc>, lat_deg: f64, lon_deg: f64) -> MoonPosition {
    let d = schlyter_day(at);
    let sun = sun_state(d);

    // Lunar osculating elements, degrees and Earth radii.
    let n = rev(125.122_8 - 0.052_953_808_3 * d);
    let i = 5.145_4;
    let w = rev(318.063_4 + 0.164_357_322_3 * d);
    let a = 60.266_6;
    let e: f64 = 0.054_900;
    let m = rev(115.365_4 + 13.064_992_950_9 * d);

    // Kepler's equation, iterated to well under the theory's own accuracy.
    let mut e_anom = m + e.to_degrees() * sind(m) * (1.0 + e * cosd(m));
    for _ in 0..5 {
        let delta = (e_anom - e.to_degrees() * sind(e_anom) - m) / (1.0 - e * cosd(e_anom));
        e_anom -= delta;
        if delta.abs() < 0.000_5 {
            break;
        }
    }

    let xv = a * (cosd(e_anom) - e);
    let yv = a * (1.0 - e * e).sqrt() * sind(e_anom);
    let v = atan2d(yv, xv);
    let r = xv.hypot(yv);

    // Ecliptic coordinates from the orbital plane.
    let xh = r * (cosd(n) * cosd(v + w) - sind(n) * sind(v + w) * cosd(i));
    let yh = r * (sind(n) * cosd(v + w) + cosd(n) * sind(v + w) * cosd(i));
    let zh = r * sind(v + w) * sind(i);

    let mut lon_ecl = atan2d(yh, xh);
    let mut lat_ecl = atan2d(zh, xh.hypot(yh));
    let mut dist = r;

    // Fundamental arguments for the perturbation series.
    let ls = rev(sun.mean_anomaly + sun.arg_perihelion);
    let lm = rev(m + w + n);
    let ms = sun.mean_anomaly;
    let mm = m;
    let elong = rev(lm - ls);
    let f = rev(lm - n);

    lon_ecl += -1.274 * sind(mm - 2.0 * elong)
        + 0.658 * sind(2.0 * elong)
        - 0.186 * sind(ms)
        - 0.059 * sind(2.0 * mm - 2.0 * elong)
        - 0.057 * sind(mm - 2.0 * elong + ms)
        + 0.053 * sind(mm + 2.0 * elong)
        + 0.046 * sind(2.0 * elong - ms)
        + 0.041 * sind(mm - ms)
        - 0.035 * sind(elong)
        - 0.031 * sind(mm + ms)
        - 0.015 * sind(2.0 * f - 2.0 * elong)
        + 0.011 * sind(mm - 4.0 * elong);
    lat_ecl += -0.173 * sind(f - 2.0 * elong)
        - 0.055 * sind(mm - f - 2.0 * elong)
        - 0.046 * sind(mm + f - 2.0 * elong)
        + 0.033 * sind(f + 2.0 * elong)
        + 0.017 * sind(2.0 * mm + f);
    dist += -0.58 * cosd(mm - 2.0 * elong) - 0.46 * cosd(2.0 * elong);

    // Rotate to equatorial coordinates.
    let obliquity = 23.439_3 - 3.563e-7 * d;
    let xg = dist * cosd(lon_ecl) * cosd(lat_ecl);
    let yg = dist * sind(lon_ecl) * cosd(lat_ecl);
    let zg = dist * sind(lat_ecl);
    let xe = xg;
    let ye = yg * cosd(obliquity) - zg * sind(obliquity);
    let ze = yg * sind(obliquity) + zg * cosd(obliquity);

    let ra = rev(atan2d(ye, xe));
    let decl = atan2d(ze, xe.hypot(ye));

    // Local sidereal time from the sun's mean longitude. The epoch offset
    // ends in .5, so the day fraction of `d` is the UTC day fraction.
    let ut_hours = (d - d.floor()) * 24.0;
    let gmst0_hours = rev(ls + 180.0) / 15.0;
    let lst_hours = gmst0_hours + ut_hours + lon_deg / 15.0;
    let ha = rev(lst_hours * 15.0 - ra);

    let x = cosd(ha) * cosd(decl);
    let y = sind(ha) * cosd(decl);
    let z = sind(decl);
    let xhor = x * sind(lat_deg) - z * cosd(lat_deg);
    let yhor = y;
    let zhor = x * cosd(lat_deg) + z * sind(lat_deg);

    let azimuth_deg = rev(atan2d(yhor, xhor) + 180.0);
    let geocentric_alt = atan2d(zhor, xhor.hypot(yhor));

    // Parallax: the moon is close enough that topocentric altitude matters.
    let altitude_deg = geocentric_alt - asind(1.0 / dist) * cosd(geocentric_alt);

    // Phase from sun-moon elongation on the ecliptic.
    let elongation = (cosd(lon_ecl - sun.true_longitude) * cosd(lat_ecl))
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees();
    let phase_angle = 180.0 - elongation;
    let illuminated_fraction = (1.0 + cosd(phase_angle)) / 2.0;
    let phase = MoonPhase::from_elongation_deg(lon_ecl - sun.true_longitude);

    MoonPosition {
        altitude_deg,
        azimuth_deg,
        illuminated_fraction,
        phase,
    }
}
