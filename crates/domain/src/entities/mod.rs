//! Domain entities - Weather records and the reports built from them

mod report_payload;
mod weather_record;

pub use report_payload::{Field, Panel, PanelColor, Report, ReportPayload};
pub use weather_record::{FEET_PER_METER, ForecastPeriod, MetarRecord, TafRecord, WeatherRecord};
