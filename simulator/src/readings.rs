use rand::Rng;
use serde::Serialize;

/// One simulated monitor reading, shaped like an element of the cloud
/// API's current-measures response.
#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    #[serde(rename = "locationId")]
    pub location_id: i64,
    #[serde(rename = "locationName")]
    pub location_name: String,
    pub pm01: f64,
    pub pm02: f64,
    pub pm10: f64,
    #[serde(rename = "pm003Count")]
    pub pm003_count: f64,
    pub atmp: f64,
    pub rhum: f64,
    pub rco2: f64,
    pub atmp_corrected: f64,
    pub rhum_corrected: f64,
    pub rco2_corrected: f64,
    pub tvoc: f64,
    pub wifi: f64,
    pub serialno: String,
    pub model: String,
    #[serde(rename = "firmwareVersion")]
    pub firmware_version: String,
    #[serde(rename = "tvocIndex")]
    pub tvoc_index: f64,
    #[serde(rename = "noxIndex")]
    pub nox_index: f64,
}

pub fn generate_reading(rng: &mut impl Rng, index: usize) -> Reading {
    let indoor = index % 2 == 0;

    let pm02 = if rng.gen_bool(0.05) {
        rng.gen_range(50.0..300.0) // 5% pollution spikes
    } else {
        rng.gen_range(1.0..25.0)
    };

    let rco2 = if rng.gen_bool(0.05) {
        rng.gen_range(1500.0..3000.0) // 5% stale-air spikes
    } else {
        rng.gen_range(400.0..1200.0)
    };

    let atmp = rng.gen_range(15.0..35.0);
    let rhum = rng.gen_range(30.0..80.0);

    Reading {
        location_id: index as i64 + 1,
        location_name: format!("Simulated location {}", index + 1),
        pm01: pm02 * rng.gen_range(0.5..0.9),
        pm02,
        pm10: pm02 * rng.gen_range(1.1..1.6),
        pm003_count: pm02 * rng.gen_range(30.0..80.0),
        atmp,
        rhum,
        rco2,
        atmp_corrected: atmp - rng.gen_range(0.5..2.0),
        rhum_corrected: rhum + rng.gen_range(-3.0..3.0),
        rco2_corrected: rco2,
        tvoc: rng.gen_range(50.0..450.0),
        wifi: rng.gen_range(-90.0..-30.0),
        serialno: format!("airgradient-sim-{}", index),
        model: if indoor { "I-9PSL INDOOR" } else { "O-1PST" }.to_string(),
        firmware_version: "3.1.1".to_string(),
        tvoc_index: rng.gen_range(30.0..300.0),
        nox_index: rng.gen_range(1.0..100.0),
    }
}
