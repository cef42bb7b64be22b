use serde::Deserialize;

/// One AirGradient monitor's latest measurement snapshot, as returned by
/// the cloud API's current-measures endpoint.
///
/// Measurement fields are required; a payload missing any of them fails
/// decoding. The location metadata and `rco2_corrected` are carried along
/// but feed no gauge, so they default when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceReading {
    #[serde(rename = "locationId", default)]
    pub location_id: i64,
    #[serde(rename = "locationName", default)]
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
    #[serde(default)]
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

impl DeviceReading {
    /// Indoor monitors advertise an INDOOR marker in their model string;
    /// every other model is classified as an outdoor unit.
    pub fn device_type(&self) -> DeviceType {
        if self.model.contains("INDOOR") {
            DeviceType::OneIndoor
        } else {
            DeviceType::Outdoor
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    OneIndoor,
    Outdoor,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::OneIndoor => "ONE_INDOOR",
            DeviceType::Outdoor => "OUTDOOR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "serialno": "ABC123",
        "model": "I-9PSL INDOOR",
        "wifi": -60,
        "pm02": 5.2,
        "rco2": 410,
        "atmp": 21.5,
        "rhum": 45,
        "tvoc": 120,
        "tvocIndex": 100,
        "noxIndex": 1,
        "pm01": 3.1,
        "pm10": 7.0,
        "pm003Count": 300,
        "atmp_corrected": 21.0,
        "rhum_corrected": 44,
        "firmwareVersion": "3.1.1"
    }"#;

    #[test]
    fn test_decode_reading() {
        let reading: DeviceReading = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(reading.serialno, "ABC123");
        assert_eq!(reading.model, "I-9PSL INDOOR");
        assert_eq!(reading.firmware_version, "3.1.1");
        assert_eq!(reading.wifi, -60.0);
        assert_eq!(reading.pm01, 3.1);
        assert_eq!(reading.pm02, 5.2);
        assert_eq!(reading.pm10, 7.0);
        assert_eq!(reading.pm003_count, 300.0);
        assert_eq!(reading.rco2, 410.0);
        assert_eq!(reading.atmp, 21.5);
        assert_eq!(reading.atmp_corrected, 21.0);
        assert_eq!(reading.rhum, 45.0);
        assert_eq!(reading.rhum_corrected, 44.0);
        assert_eq!(reading.tvoc, 120.0);
        assert_eq!(reading.tvoc_index, 100.0);
        assert_eq!(reading.nox_index, 1.0);
    }

    #[test]
    fn test_missing_measurement_field_fails() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("pm02");

        let result: Result<DeviceReading, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_location_metadata_is_ok() {
        let reading: DeviceReading = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(reading.location_id, 0);
        assert_eq!(reading.location_name, "");
        assert_eq!(reading.rco2_corrected, 0.0);
    }

    #[test]
    fn test_indoor_model_classifies_as_one_indoor() {
        let reading: DeviceReading = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(reading.device_type(), DeviceType::OneIndoor);
        assert_eq!(reading.device_type().as_str(), "ONE_INDOOR");
    }

    #[test]
    fn test_other_model_classifies_as_outdoor() {
        let mut reading: DeviceReading = serde_json::from_str(SAMPLE).unwrap();
        reading.model = "O-1PST".to_string();

        assert_eq!(reading.device_type(), DeviceType::Outdoor);
        assert_eq!(reading.device_type().as_str(), "OUTDOOR");
    }
}
