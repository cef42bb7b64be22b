use lazy_static::lazy_static;
use prometheus::{Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder};

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();
    pub static ref INFO: GaugeVec = GaugeVec::new(
        Opts::new("airgradient_info", "AirGradient device information"),
        &[
            "airgradient_serial_number",
            "airgradient_device_type",
            "airgradient_library_version"
        ]
    )
    .unwrap();
    pub static ref CONFIG_OK: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_config_ok",
        "1 if the AirGradient device was able to successfully fetch its configuration from the server"
    ))
    .unwrap();
    pub static ref POST_OK: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_post_ok",
        "1 if the AirGradient device was able to successfully send to the server"
    ))
    .unwrap();
    pub static ref WIFI_RSSI: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_wifi_rssi_dbm",
        "WiFi signal strength from the AirGradient device perspective, in dBm"
    ))
    .unwrap();
    pub static ref PM1: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_pm1_ugm3",
        "PM1.0 concentration as measured by the AirGradient PMS sensor, in micrograms per cubic meter"
    ))
    .unwrap();
    pub static ref PM2D5: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_pm2d5_ugm3",
        "PM2.5 concentration as measured by the AirGradient PMS sensor, in micrograms per cubic meter"
    ))
    .unwrap();
    pub static ref PM10: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_pm10_ugm3",
        "PM10 concentration as measured by the AirGradient PMS sensor, in micrograms per cubic meter"
    ))
    .unwrap();
    pub static ref PM0D3: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_pm0d3_p100ml",
        "PM0.3 concentration as measured by the AirGradient PMS sensor, in number of particules per 100 milliliters"
    ))
    .unwrap();
    pub static ref TVOC_INDEX: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_tvoc_index",
        "The processed Total Volatile Organic Compounds (TVOC) index as measured by the AirGradient SGP sensor"
    ))
    .unwrap();
    pub static ref TVOC_RAW: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_tvoc_raw",
        "The raw input value to the Total Volatile Organic Compounds (TVOC) index as measured by the AirGradient SGP sensor"
    ))
    .unwrap();
    pub static ref NOX_INDEX: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_nox_index",
        "The processed Nitrous Oxide (NOx) index as measured by the AirGradient SGP sensor"
    ))
    .unwrap();
    pub static ref NOX_RAW: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_nox_raw",
        "The raw input value to the Nitrous Oxide (NOx) index as measured by the AirGradient SGP sensor"
    ))
    .unwrap();
    pub static ref CO2: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_co2_ppm",
        "Carbon dioxide concentration as measured by the AirGradient S8 sensor, in parts per million"
    ))
    .unwrap();
    pub static ref TEMPERATURE: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_temperature_celsius",
        "The ambient temperature as measured by the AirGradient SHT / PMS sensor, in degrees Celsius"
    ))
    .unwrap();
    pub static ref TEMPERATURE_COMPENSATED: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_temperature_compensated_celsius",
        "The compensated ambient temperature as measured by the AirGradient SHT / PMS sensor, in degrees Celsius"
    ))
    .unwrap();
    pub static ref HUMIDITY: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_humidity_percent",
        "The relative humidity as measured by the AirGradient SHT sensor"
    ))
    .unwrap();
    pub static ref HUMIDITY_COMPENSATED: Gauge = Gauge::with_opts(Opts::new(
        "airgradient_humidity_compensated_percent",
        "The compensated relative humidity as measured by the AirGradient SHT / PMS sensor"
    ))
    .unwrap();
}

pub fn init_metrics() {
    REGISTRY.register(Box::new(INFO.clone())).unwrap();
    REGISTRY.register(Box::new(CONFIG_OK.clone())).unwrap();
    REGISTRY.register(Box::new(POST_OK.clone())).unwrap();
    REGISTRY.register(Box::new(WIFI_RSSI.clone())).unwrap();
    REGISTRY.register(Box::new(PM1.clone())).unwrap();
    REGISTRY.register(Box::new(PM2D5.clone())).unwrap();
    REGISTRY.register(Box::new(PM10.clone())).unwrap();
    REGISTRY.register(Box::new(PM0D3.clone())).unwrap();
    REGISTRY.register(Box::new(TVOC_INDEX.clone())).unwrap();
    REGISTRY.register(Box::new(TVOC_RAW.clone())).unwrap();
    REGISTRY.register(Box::new(NOX_INDEX.clone())).unwrap();
    REGISTRY.register(Box::new(NOX_RAW.clone())).unwrap();
    REGISTRY.register(Box::new(CO2.clone())).unwrap();
    REGISTRY.register(Box::new(TEMPERATURE.clone())).unwrap();
    REGISTRY
        .register(Box::new(TEMPERATURE_COMPENSATED.clone()))
        .unwrap();
    REGISTRY.register(Box::new(HUMIDITY.clone())).unwrap();
    REGISTRY
        .register(Box::new(HUMIDITY_COMPENSATED.clone()))
        .unwrap();
}

pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}
