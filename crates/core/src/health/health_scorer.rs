//! Site health scoring.
//!
//! Score = 50, adjusted by lifecycle status and by days to greenlight, then
//! clamped to [0, 100]. Everything but the trend is a pure function of
//! `(status, days_to_greenlight)`.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use super::health_model::*;
use crate::sites::Site;

pub const BASE_SCORE: i64 = 50;

const ACTIVE: &str = "active__v";
const COMPLETED: &str = "completed__v";
const ON_HOLD: &str = "on_hold__v";
const SUSPENDED: &str = "suspended__v";
const TERMINATED: &str = "terminated__v";

fn status_adjustment(status: Option<&str>) -> i64 {
    match status {
        Some(ACTIVE) => 30,
        Some(COMPLETED) => 40,
        Some(ON_HOLD) => -10,
        Some(SUSPENDED) => -20,
        Some(TERMINATED) => -30,
        _ => 0,
    }
}

fn greenlight_adjustment(days_to_greenlight: Option<i64>) -> i64 {
    match days_to_greenlight {
        Some(days) if days <= 30 => 10,
        Some(days) if days > 60 => -10,
        _ => 0,
    }
}

/// Health score in [0, 100].
pub fn calculate_health_score(status: Option<&str>, days_to_greenlight: Option<i64>) -> u8 {
    let score = BASE_SCORE + status_adjustment(status) + greenlight_adjustment(days_to_greenlight);
    score.clamp(0, 100) as u8
}

/// Issues for a scored site; never empty.
pub fn identify_issues(
    status: Option<&str>,
    days_to_greenlight: Option<i64>,
    score: u8,
) -> Vec<String> {
    let mut issues = Vec::new();

    if score < 60 {
        issues.push(ISSUE_LOW_HEALTH_INDEX.to_string());
    }

    match status {
        Some(ON_HOLD) => issues.push(ISSUE_SITE_ON_HOLD.to_string()),
        Some(SUSPENDED) => issues.push(ISSUE_SITE_SUSPENDED.to_string()),
        Some(TERMINATED) => issues.push(ISSUE_SITE_TERMINATED.to_string()),
        _ => {}
    }

    if days_to_greenlight.is_some_and(|days| days > 60) {
        issues.push(ISSUE_SLOW_STARTUP.to_string());
    }

    if issues.is_empty() {
        issues.push(ISSUE_NONE.to_string());
    }
    issues
}

/// Scores a site using the current time and the thread-local RNG.
pub fn score_site(site: &Site) -> SiteHealth {
    score_site_with(site, Utc::now(), &mut rand::thread_rng())
}

/// Scores a site with an explicit clock reading and trend RNG.
pub fn score_site_with<R: Rng + ?Sized>(
    site: &Site,
    now: DateTime<Utc>,
    rng: &mut R,
) -> SiteHealth {
    let status = site.status.as_deref();
    let health_score = calculate_health_score(status, site.days_to_greenlight);

    SiteHealth {
        id: site.id.clone(),
        name: site.name.clone(),
        number: site.number.clone(),
        status: site.status.clone(),
        country_id: site.country_id.clone(),
        country: site.country.clone(),
        health_score,
        health_status: HealthStatus::from_score(health_score),
        trend: *Trend::ALL.choose(rng).unwrap_or(&Trend::Stable),
        issues: identify_issues(status, site.days_to_greenlight, health_score),
        last_updated: now,
        vault_url: site.vault_url.clone(),
    }
}
