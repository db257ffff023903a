#[derive(Debug, Clone, Copy)]
pub struct Tag {
    pub key: &'static str,
    pub label: &'static str,
}

pub const TEMPERATURE_C: Tag = Tag {
    key: "temperature",
    label: "Temp (°C)",
};

pub const SPO2_PERCENT: Tag = Tag {
    key: "spo2",
    label: "SpO2 (%)",
};

pub const EMG_MV: Tag = Tag {
    key: "emg",
    label: "EMG (mV)",
};

pub const HEART_RATE_BPM: Tag = Tag {
    key: "heartRate",
    label: "Heart Rate (BPM)",
};

/// Console order of the four metrics.
pub const ALL: [Tag; 4] = [TEMPERATURE_C, SPO2_PERCENT, EMG_MV, HEART_RATE_BPM];
