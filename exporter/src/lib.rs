//! Prometheus metrics exporter for the AirGradient cloud API.
//!
//! Every scrape of `/metrics` fetches the latest measurement snapshot for
//! each monitor visible to the configured token and republishes it as
//! gauges. The exported series include:
//!
//! * `airgradient_info{airgradient_serial_number, airgradient_device_type, airgradient_library_version}` - Device metadata.
//! * `airgradient_config_ok` / `airgradient_post_ok` - 1 while fetches from the AirGradient API succeed, 0 after a failure.
//! * `airgradient_pm1_ugm3` / `airgradient_pm2d5_ugm3` / `airgradient_pm10_ugm3` / `airgradient_pm0d3_p100ml` - Particulate matter.
//! * `airgradient_co2_ppm`, `airgradient_tvoc_index`, `airgradient_tvoc_raw`, `airgradient_nox_index`, `airgradient_nox_raw` - Gas sensors.
//! * `airgradient_temperature_celsius` / `airgradient_humidity_percent` (plus `_compensated` variants) - Environment.
//! * `airgradient_wifi_rssi_dbm` - Device WiFi signal strength.
//!
//! There is no background polling loop: each scrape triggers one upstream
//! request, and the gauges always hold the last observed values.

pub mod errors;
pub mod fetch;
pub mod metrics;
pub mod model;
pub mod server;
pub mod update;
