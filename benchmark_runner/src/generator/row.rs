//!
//! The generated row types.
//!

use chrono::Duration;
use chrono::NaiveDate;
use rand::Rng;
use rand_distr::Distribution;
use rand_distr::Exp;
use rand_distr::LogNormal;

use super::reference;

/// The date format shared by ClickHouse `Date` columns and Elasticsearch
/// date fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The timestamp format shared by ClickHouse `DateTime` columns and the
/// Elasticsearch `strict_date_optional_time` parser.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

///
/// A patient record.
///
#[derive(Debug, serde::Serialize)]
pub struct Patient {
    /// The patient identifier.
    pub patient_id: u64,
    /// The age in years.
    pub age: u32,
    /// The gender.
    pub gender: &'static str,
    /// The blood type.
    pub blood_type: &'static str,
    /// The primary diagnosed condition.
    pub primary_condition: &'static str,
    /// The insurance type.
    pub insurance_type: &'static str,
    /// The registration date, within the last ten years.
    pub registration_date: String,
}

///
/// A medical event record, keyed to a patient.
///
#[derive(Debug, serde::Serialize)]
pub struct MedicalEvent {
    /// The event identifier.
    pub event_id: u64,
    /// The patient the event belongs to.
    pub patient_id: u64,
    /// The department that handled the event.
    pub department: &'static str,
    /// The event type.
    pub event_type: &'static str,
    /// The severity.
    pub severity: &'static str,
    /// The cost in US dollars.
    pub cost_usd: f64,
    /// The duration in minutes.
    pub duration_minutes: u32,
    /// The event timestamp, weighted towards recent dates.
    pub timestamp: String,
}

///
/// A prescription record, keyed to a patient.
///
#[derive(Debug, serde::Serialize)]
pub struct Prescription {
    /// The prescription identifier.
    pub prescription_id: u64,
    /// The patient the prescription belongs to.
    pub patient_id: u64,
    /// The medication name.
    pub medication: &'static str,
    /// The dosage.
    pub dosage: &'static str,
    /// The intake frequency.
    pub frequency: &'static str,
    /// The course duration in days.
    pub duration_days: u32,
    /// The number of refills.
    pub refills: u32,
    /// The cost in US dollars.
    pub cost_usd: f64,
    /// The prescription date, within the last three years.
    pub prescribed_date: String,
}

impl Patient {
    ///
    /// Samples a patient with the given identifier.
    ///
    pub fn sample<R: Rng>(rng: &mut R, patient_id: u64) -> Self {
        let base_date = NaiveDate::from_ymd_opt(2015, 1, 1).expect("Always valid");
        let registration_date = base_date + Duration::days(rng.gen_range(0..3650));
        Self {
            patient_id,
            age: rng.gen_range(1..100),
            gender: pick(rng, &reference::GENDERS),
            blood_type: pick(rng, &reference::BLOOD_TYPES),
            primary_condition: pick(rng, &reference::CONDITIONS),
            insurance_type: pick(rng, &reference::INSURANCE_TYPES),
            registration_date: registration_date.format(DATE_FORMAT).to_string(),
        }
    }
}

impl MedicalEvent {
    ///
    /// Samples a medical event with the given identifier, attached to a
    /// uniformly random patient below `patient_count`.
    ///
    /// Costs follow a log-normal distribution clamped to 50..50000 USD.
    /// Timestamps decay exponentially from 2020-01-01, capped at five years.
    ///
    pub fn sample<R: Rng>(rng: &mut R, event_id: u64, patient_count: u64) -> Self {
        let cost_distribution = LogNormal::new(5.5, 1.2).expect("Always valid");
        let recency_distribution = Exp::new(1.0 / 365.0).expect("Always valid");

        let cost_usd = round_cents(cost_distribution.sample(rng)).clamp(50.0, 50000.0);
        let days = (recency_distribution.sample(rng) as i64).min(1825);

        let base_date = NaiveDate::from_ymd_opt(2020, 1, 1).expect("Always valid");
        let timestamp = base_date
            .and_hms_opt(0, 0, 0)
            .expect("Always valid")
            + Duration::days(days)
            + Duration::hours(rng.gen_range(0..24))
            + Duration::minutes(rng.gen_range(0..60));

        Self {
            event_id,
            patient_id: rng.gen_range(0..patient_count),
            department: pick(rng, &reference::DEPARTMENTS),
            event_type: pick(rng, &reference::EVENT_TYPES),
            severity: pick(rng, &reference::SEVERITIES),
            cost_usd,
            duration_minutes: rng.gen_range(15..480),
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl Prescription {
    ///
    /// Samples a prescription with the given identifier, attached to a
    /// uniformly random patient below `patient_count`.
    ///
    pub fn sample<R: Rng>(rng: &mut R, prescription_id: u64, patient_count: u64) -> Self {
        let cost_distribution = LogNormal::new(3.5, 0.8).expect("Always valid");
        let cost_usd = round_cents(cost_distribution.sample(rng)).clamp(5.0, 500.0);

        let base_date = NaiveDate::from_ymd_opt(2022, 1, 1).expect("Always valid");
        let prescribed_date = base_date + Duration::days(rng.gen_range(0..1095));

        Self {
            prescription_id,
            patient_id: rng.gen_range(0..patient_count),
            medication: pick(rng, &reference::MEDICATIONS),
            dosage: pick(rng, &reference::DOSAGES),
            frequency: pick(rng, &reference::FREQUENCIES),
            duration_days: rng.gen_range(7..365),
            refills: rng.gen_range(0..13),
            cost_usd,
            prescribed_date: prescribed_date.format(DATE_FORMAT).to_string(),
        }
    }
}

///
/// Picks a uniformly random element from a vocabulary.
///
fn pick<R: Rng>(rng: &mut R, vocabulary: &[&'static str]) -> &'static str {
    vocabulary[rng.gen_range(0..vocabulary.len())]
}

///
/// Rounds a cost to whole cents.
///
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn patient_fields_are_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for patient_id in 0..1000 {
            let patient = super::Patient::sample(&mut rng, patient_id);
            assert!((1..100).contains(&patient.age));
            assert!(patient.registration_date.starts_with("201")
                || patient.registration_date.starts_with("202"));
        }
    }

    #[test]
    fn event_costs_are_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for event_id in 0..1000 {
            let event = super::MedicalEvent::sample(&mut rng, event_id, 100);
            assert!((50.0..=50000.0).contains(&event.cost_usd));
            assert!((15..480).contains(&event.duration_minutes));
            assert!(event.patient_id < 100);
        }
    }

    #[test]
    fn prescription_costs_are_clamped() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for prescription_id in 0..1000 {
            let prescription = super::Prescription::sample(&mut rng, prescription_id, 100);
            assert!((5.0..=500.0).contains(&prescription.cost_usd));
            assert!((0..13).contains(&prescription.refills));
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let mut first = ChaCha8Rng::seed_from_u64(42);
        let mut second = ChaCha8Rng::seed_from_u64(42);
        for patient_id in 0..100 {
            let one = super::Patient::sample(&mut first, patient_id);
            let other = super::Patient::sample(&mut second, patient_id);
            assert_eq!(one.age, other.age);
            assert_eq!(one.primary_condition, other.primary_condition);
            assert_eq!(one.registration_date, other.registration_date);
        }
    }
}
