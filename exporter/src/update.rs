use crate::metrics::{
    CO2, CONFIG_OK, HUMIDITY, HUMIDITY_COMPENSATED, INFO, NOX_INDEX, NOX_RAW, PM0D3, PM1, PM10,
    PM2D5, POST_OK, TEMPERATURE, TEMPERATURE_COMPENSATED, TVOC_INDEX, TVOC_RAW, WIFI_RSSI,
};
use crate::model::DeviceReading;

/// Projects device readings onto the gauge registry. Only the info series
/// is dimensioned per device; the measurement gauges are unlabeled, so with
/// several monitors upstream the last element of the array wins.
///
/// This is the only routine that mutates gauge state from input data.
pub fn update_metrics(readings: &[DeviceReading]) {
    for device in readings {
        let device_type = device.device_type();

        INFO.with_label_values(&[
            &device.serialno,
            device_type.as_str(),
            &device.firmware_version,
        ])
        .set(1.0);

        WIFI_RSSI.set(device.wifi);
        PM1.set(device.pm01);
        PM2D5.set(device.pm02);
        PM10.set(device.pm10);
        PM0D3.set(device.pm003_count);
        TVOC_INDEX.set(device.tvoc_index);
        TVOC_RAW.set(device.tvoc);
        NOX_INDEX.set(device.nox_index);
        // Upstream does not report the raw NOx signal.
        NOX_RAW.set(0.0);
        CO2.set(device.rco2);
        TEMPERATURE.set(device.atmp);
        TEMPERATURE_COMPENSATED.set(device.atmp_corrected);
        HUMIDITY.set(device.rhum);
        HUMIDITY_COMPENSATED.set(device.rhum_corrected);
    }

    mark_scrape_ok();
}

/// Flags the device-health gauges healthy after a successful fetch.
pub fn mark_scrape_ok() {
    CONFIG_OK.set(1.0);
    POST_OK.set(1.0);
}

/// Flags the device-health gauges unhealthy so scrape consumers observe
/// the failure instead of stale data labeled healthy.
pub fn mark_scrape_failed() {
    CONFIG_OK.set(0.0);
    POST_OK.set(0.0);
}
