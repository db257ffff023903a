use crate::tags;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// One cycle's worth of converted readings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VitalsReading {
    pub timestamp_us: u64,
    pub temperature: f32,
    pub spo2: f32,
    pub emg: f64,
    #[serde(rename = "heartRate")]
    pub heart_rate: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleFormat {
    /// Four `label: value` lines per cycle.
    #[default]
    Text,
    /// One JSON object per cycle.
    Json,
}

impl FromStr for ConsoleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(other.to_string()),
        }
    }
}

impl VitalsReading {
    pub fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    pub fn write_json<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)
    }

    pub fn write_to<W: Write + ?Sized>(&self, format: ConsoleFormat, out: &mut W) -> io::Result<()> {
        match format {
            ConsoleFormat::Text => self.write_text(out)?,
            ConsoleFormat::Json => self.write_json(out)?,
        }
        out.flush()
    }
}

/// Four `label: value` lines. Floats use two decimals except EMG, which uses three.
impl fmt::Display for VitalsReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:.2}", tags::TEMPERATURE_C.label, self.temperature)?;
        writeln!(f, "{}: {:.2}", tags::SPO2_PERCENT.label, self.spo2)?;
        writeln!(f, "{}: {:.3}", tags::EMG_MV.label, self.emg)?;
        writeln!(f, "{}: {}", tags::HEART_RATE_BPM.label, self.heart_rate)
    }
}
