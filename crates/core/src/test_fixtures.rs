//! Shared dataset fixtures for unit tests.
//!
//! Oslo (0301), Bergen (4601) and Utsira (1151) are present in all three
//! datasets. Nullby (9999) exists only in the population dataset and has a
//! zero population in 2016.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use crate::constants::DETAIL_YEARS;
use crate::dataset::{Dataset, DatasetContext, DatasetKind, Readiness, StaticDatasetSource};

/// Yearly series ending at `latest` in 2017 and growing by `step` per year.
pub(crate) fn yearly(latest: f64, step: f64) -> Value {
    let mut series = Map::new();
    for year in DETAIL_YEARS {
        let value = latest - f64::from(DETAIL_YEARS.end() - year) * step;
        series.insert(year.to_string(), json!(value));
    }
    Value::Object(series)
}

pub(crate) fn population_json() -> String {
    json!({
        "elementer": {
            "Oslo": {
                "kommunenummer": "0301",
                "Menn": yearly(300000.0, 5000.0),
                "Kvinner": yearly(320000.0, 15000.0)
            },
            "Bergen": {
                "kommunenummer": "4601",
                "Menn": yearly(140000.0, 1000.0),
                "Kvinner": yearly(145000.0, 1000.0)
            },
            "Utsira": {
                "kommunenummer": "1151",
                "Menn": yearly(110.0, 0.0),
                "Kvinner": yearly(90.0, 0.0)
            },
            "Nullby": {
                "kommunenummer": "9999",
                "Menn": { "2016": 0, "2017": 10 },
                "Kvinner": { "2016": 0, "2017": 5 }
            }
        },
        "datasett": { "navn": "Befolkning" }
    })
    .to_string()
}

pub(crate) fn employment_json() -> String {
    json!({
        "elementer": {
            "Oslo": {
                "kommunenummer": "0301",
                "Begge kjønn": yearly(66.5, 0.5),
                "Menn": yearly(68.0, 0.5),
                "Kvinner": yearly(65.0, 0.5)
            },
            "Bergen": {
                "kommunenummer": "4601",
                "Begge kjønn": yearly(68.25, 0.25),
                "Menn": yearly(70.0, 0.25),
                "Kvinner": yearly(66.5, 0.25)
            },
            "Utsira": {
                "kommunenummer": "1151",
                "Begge kjønn": yearly(70.0, 0.0),
                "Menn": yearly(71.0, 0.0),
                "Kvinner": yearly(69.0, 0.0)
            }
        }
    })
    .to_string()
}

/// Category values as (men, women), constant over the years.
fn education_record(id: &str, values: [(&str, f64, f64); 5]) -> Value {
    let mut record = Map::new();
    record.insert("kommunenummer".to_string(), json!(id));
    for (code, men, women) in values {
        record.insert(
            code.to_string(),
            json!({ "Menn": yearly(men, 0.0), "Kvinner": yearly(women, 0.0) }),
        );
    }
    Value::Object(record)
}

pub(crate) fn education_json() -> String {
    let oslo = [
        ("01", 25.0, 22.0),
        ("02a", 35.0, 30.0),
        ("11", 2.5, 1.5),
        ("03a", 20.5, 25.25),
        ("04a", 12.0, 11.0),
    ];
    let bergen = [
        ("01", 26.0, 22.0),
        ("02a", 38.0, 33.0),
        ("11", 3.0, 1.0),
        ("03a", 19.0, 24.0),
        ("04a", 10.0, 9.5),
    ];

    json!({
        "elementer": {
            "Oslo": education_record("0301", oslo),
            "Bergen": education_record("4601", bergen),
            "Utsira": education_record("1151", oslo)
        },
        "datasett": {
            "kategorier": {
                "01": "Grunnskolenivå",
                "02a": "Videregående skolenivå",
                "11": "Fagskolenivå",
                "03a": "Universitets- og høgskolenivå kort",
                "04a": "Universitets- og høgskolenivå lang"
            }
        }
    })
    .to_string()
}

pub(crate) fn static_dataset(kind: DatasetKind, body: String) -> Dataset {
    Dataset::new(kind, Arc::new(StaticDatasetSource::new(body)))
}

/// Context with all three fixture datasets loaded.
pub(crate) async fn fixture_context() -> DatasetContext {
    let context = DatasetContext::new(
        static_dataset(DatasetKind::Population, population_json()),
        static_dataset(DatasetKind::Employment, employment_json()),
        static_dataset(DatasetKind::Education, education_json()),
    );
    assert_eq!(context.load_all().await, Readiness::Ready);
    context
}
