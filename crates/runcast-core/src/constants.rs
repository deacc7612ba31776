// ABOUTME: Physical and meteorological constants organized by domain
// ABOUTME: Magnus, NWS wind chill, Rothfusz, radiant budget, UTCI domain, solar geometry

//! Physical and meteorological constants used across the engine
//!
//! This module contains established constants from atmospheric physics and
//! biometeorology, organized by domain. Values marked with a reference come
//! from the cited publication; the rest are standard handbook values.

/// Fundamental physical constants
pub mod physics {
    /// Stefan-Boltzmann constant (W·m⁻²·K⁻⁴)
    /// CODATA 2018 recommended value
    pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

    /// Offset between Celsius and Kelvin scales
    pub const KELVIN_OFFSET: f64 = 273.15;

    /// Standard sea-level pressure (hPa), substituted when a snapshot
    /// omits its pressure reading
    pub const STANDARD_PRESSURE_HPA: f64 = 1013.25;
}

/// Magnus-form saturation vapor pressure coefficients
///
/// References:
/// - Alduchov, O.A. & Eskridge, R.E. (1996). Improved Magnus form approximation
///   of saturation vapor pressure. Journal of Applied Meteorology, 35(4)
pub mod magnus {
    /// Magnus coefficient a (dimensionless)
    pub const COEFF_A: f64 = 17.625;

    /// Magnus coefficient b (°C)
    pub const COEFF_B: f64 = 243.04;

    /// Saturation vapor pressure at 0 °C (hPa)
    pub const E0_HPA: f64 = 6.1094;

    /// Relative-humidity floor applied before taking logarithms, so a
    /// zero-humidity reading degrades to a very dry answer instead of -∞
    pub const MIN_HUMIDITY_PCT: f64 = 0.1;
}

/// NWS wind chill model coefficients and applicability bounds
///
/// References:
/// - Osczevski, R. & Bluestein, M. (2005). The New Wind Chill Equivalent
///   Temperature Chart. Bulletin of the American Meteorological Society, 86(10)
/// - https://www.weather.gov/media/epz/wxcalc/windChill.pdf
pub mod wind_chill {
    /// Constant term of the NWS 2001 regression (°F)
    pub const C0: f64 = 35.74;
    /// Linear air-temperature term
    pub const C1: f64 = 0.6215;
    /// Wind-speed power term
    pub const C2: f64 = -35.75;
    /// Temperature × wind-speed cross term
    pub const C3: f64 = 0.4275;
    /// Exponent applied to wind speed (mph)
    pub const WIND_EXPONENT: f64 = 0.16;

    /// Wind chill applies at or below this air temperature (°F)
    pub const MAX_TEMP_F: f64 = 50.0;
    /// Wind chill applies above this wind speed (mph)
    pub const MIN_WIND_MPH: f64 = 3.0;
}

/// Rothfusz heat index regression coefficients and applicability bounds
///
/// References:
/// - Rothfusz, L.P. (1990). The Heat Index "Equation". NWS Southern Region
///   Technical Attachment SR 90-23
/// - https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml
pub mod heat_index {
    /// Rothfusz regression coefficients, constant term first
    pub const C: [f64; 9] = [
        -42.379,
        2.049_015_23,
        10.143_331_27,
        -0.224_755_41,
        -6.837_83e-3,
        -5.481_717e-2,
        1.228_74e-3,
        8.528_2e-4,
        -1.99e-6,
    ];

    /// Heat index applies at or above this air temperature (°F)
    pub const MIN_TEMP_F: f64 = 80.0;
    /// Heat index applies at or above this relative humidity (%)
    pub const MIN_HUMIDITY_PCT: f64 = 40.0;
}

/// Radiative-budget constants for the mean radiant temperature estimate
///
/// References:
/// - Brutsaert, W. (1975). On a derivable formula for long-wave radiation from
///   clear skies. Water Resources Research, 11(5)
/// - Crawford, T.M. & Duchon, C.E. (1999). An improved parameterization for
///   estimating effective atmospheric emissivity. Journal of Applied Meteorology, 38(4)
/// - VDI 3787 Part 2 (2008), projected area factor for a standing person
pub mod radiant {
    /// Brutsaert clear-sky emissivity coefficient
    pub const BRUTSAERT_COEFF: f64 = 1.24;
    /// Brutsaert exponent applied to (vapor pressure / air temperature)
    pub const BRUTSAERT_EXPONENT: f64 = 1.0 / 7.0;

    /// Lower clamp for cloud-corrected sky emissivity
    pub const SKY_EMISSIVITY_MIN: f64 = 0.6;
    /// Upper clamp for cloud-corrected sky emissivity
    pub const SKY_EMISSIVITY_MAX: f64 = 1.0;

    /// Ground is modeled this many Kelvin warmer than the air
    pub const GROUND_TEMP_EXCESS_K: f64 = 2.0;
    /// Longwave emissivity of natural ground cover
    pub const GROUND_EMISSIVITY: f64 = 0.95;
    /// Shortwave reflectance (albedo) of typical running surfaces
    pub const GROUND_REFLECTANCE: f64 = 0.2;

    /// Fraction of global radiation arriving as direct beam under clear sky
    pub const CLEAR_SKY_DIRECT_FRACTION: f64 = 0.8;
    /// Cap on reconstructed beam-normal irradiance (W/m²), near the solar
    /// constant after atmospheric attenuation
    pub const BEAM_NORMAL_CAP_WM2: f64 = 1000.0;

    /// Shortwave absorptivity of clothed skin
    pub const BODY_SHORTWAVE_ABSORPTIVITY: f64 = 0.7;
    /// Longwave emissivity of clothed skin
    pub const BODY_LONGWAVE_EMISSIVITY: f64 = 0.97;

    /// View factor from an upright body to the sky hemisphere
    pub const VIEW_FACTOR_SKY: f64 = 0.5;
    /// View factor from an upright body to the ground
    pub const VIEW_FACTOR_GROUND: f64 = 0.5;

    /// Lowest plausible radiant enhancement relative to air temperature (°F)
    pub const MIN_DELTA_F: f64 = -20.0;
    /// Highest plausible radiant enhancement relative to air temperature (°F)
    pub const MAX_DELTA_F: f64 = 60.0;
}

/// Validated input domain of the UTCI polynomial
///
/// The sixth-order approximation is only defined over this region; inputs are
/// clamped to it before evaluation.
///
/// References:
/// - Bröde, P. et al. (2012). Deriving the operational procedure for the
///   Universal Thermal Climate Index (UTCI). International Journal of
///   Biometeorology, 56(3)
pub mod utci_domain {
    /// Minimum air temperature (°C)
    pub const AIR_TEMP_MIN_C: f64 = -50.0;
    /// Maximum air temperature (°C)
    pub const AIR_TEMP_MAX_C: f64 = 50.0;

    /// Minimum 10 m wind speed (m/s)
    pub const WIND_MIN_MS: f64 = 0.5;
    /// Maximum 10 m wind speed (m/s)
    pub const WIND_MAX_MS: f64 = 17.0;

    /// Minimum radiant excess over air temperature (K)
    pub const DELTA_MRT_MIN_K: f64 = -30.0;
    /// Maximum radiant excess over air temperature (K)
    pub const DELTA_MRT_MAX_K: f64 = 70.0;

    /// Minimum vapor pressure (hPa)
    pub const VAPOR_MIN_HPA: f64 = 0.0;
    /// Maximum vapor pressure (hPa)
    pub const VAPOR_MAX_HPA: f64 = 50.0;

    /// Index magnitudes beyond this (°F) are treated as polynomial blowup
    /// and trigger the linear fallback
    pub const SANITY_LIMIT_F: f64 = 200.0;
}

/// Precipitation intensity cut points
pub mod precip {
    /// Rates below this are light precipitation (in/hr)
    pub const LIGHT_MAX_IN_HR: f64 = 0.1;
    /// Rates below this (and at or above light) are moderate (in/hr)
    pub const MODERATE_MAX_IN_HR: f64 = 0.3;
}

/// Solar geometry constants
///
/// References:
/// - NOAA Global Monitoring Division solar calculator,
///   https://gml.noaa.gov/grad/solcalc/calcdetails.html
pub mod solar {
    /// Solar altitude at sunrise/sunset: refraction plus half the solar disk (degrees)
    pub const HORIZON_ALTITUDE_DEG: f64 = -0.833;

    /// Solar altitude bounding civil twilight (degrees)
    pub const CIVIL_TWILIGHT_ALTITUDE_DEG: f64 = -6.0;
}
