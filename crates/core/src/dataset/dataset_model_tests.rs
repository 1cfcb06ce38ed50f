//! Tests for dataset documents, identifiers and lookups.

#[cfg(test)]
mod tests {
    use crate::dataset::{DatasetKind, LoadedDataset, MetricNode, MunicipalityId};
    use crate::errors::Error;
    use crate::test_fixtures::{education_json, population_json};

    fn population() -> LoadedDataset {
        LoadedDataset::from_json(DatasetKind::Population, &population_json()).unwrap()
    }

    // ==================== MunicipalityId ====================

    #[test]
    fn test_id_accepts_text_and_numbers() {
        let text: MunicipalityId = serde_json::from_str("\"0301\"").unwrap();
        let number: MunicipalityId = serde_json::from_str("301").unwrap();
        assert_eq!(text.as_str(), "0301");
        assert_eq!(number.as_str(), "301");
        assert_ne!(text, number);
    }

    #[test]
    fn test_id_orders_numerically() {
        let mut ids: Vec<MunicipalityId> = ["1201", "301", "0101", "99", "abc", "0301"]
            .into_iter()
            .map(MunicipalityId::from)
            .collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(MunicipalityId::as_str).collect();
        // Lexicographic order would put "1201" before "301" and "99".
        assert_eq!(sorted, vec!["99", "0101", "0301", "301", "1201", "abc"]);
    }

    #[test]
    fn test_id_serializes_as_plain_text() {
        let id = MunicipalityId::from(4601u32);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"4601\"");
    }

    // ==================== Document parsing ====================

    #[test]
    fn test_parses_nested_metrics() {
        let dataset = population();
        let oslo = dataset.record("Oslo").unwrap();
        assert_eq!(oslo.identifier.as_str(), "0301");
        assert_eq!(oslo.value(&["Menn", "2017"]), Some(300000.0));
        assert_eq!(oslo.value(&["Kvinner", "2016"]), Some(305000.0));
        assert_eq!(oslo.value(&["Kvinner", "1999"]), None);
        assert_eq!(oslo.value(&["Begge kjønn", "2017"]), None);
        assert_eq!(oslo.value(&[]), None);
    }

    #[test]
    fn test_non_numeric_leaves_are_kept_but_not_values() {
        let body = r#"{
            "elementer": {
                "Oslo": {
                    "kommunenummer": 301,
                    "navn": "Oslo kommune",
                    "Menn": { "2017": null, "2016": 10 }
                }
            }
        }"#;
        let dataset = LoadedDataset::from_json(DatasetKind::Population, body).unwrap();
        let oslo = dataset.info("301").unwrap();
        assert!(matches!(oslo.metrics.get("navn"), Some(MetricNode::Other(_))));
        assert_eq!(oslo.value(&["Menn", "2017"]), None);
        assert_eq!(oslo.value(&["Menn", "2016"]), Some(10.0));
        assert_eq!(oslo.value(&["navn"]), None);
    }

    #[test]
    fn test_category_labels_from_education_metadata() {
        let dataset = LoadedDataset::from_json(DatasetKind::Education, &education_json()).unwrap();
        assert_eq!(dataset.categories().len(), 5);
        assert_eq!(
            dataset.categories().get("03a").map(String::as_str),
            Some("Universitets- og høgskolenivå kort")
        );
        // Population metadata has no categories.
        assert!(population().categories().is_empty());
    }

    #[test]
    fn test_malformed_body_is_parse_error() {
        let err = LoadedDataset::from_json(DatasetKind::Employment, "{\"data\": []}").unwrap_err();
        assert!(matches!(err, Error::Parse { ref dataset, .. } if dataset == "employment"));
    }

    // ==================== Lookups ====================

    #[test]
    fn test_names_are_sorted() {
        assert_eq!(
            population().names(),
            vec!["Bergen", "Nullby", "Oslo", "Utsira"]
        );
    }

    #[test]
    fn test_ids_are_sorted_numerically() {
        let ids: Vec<String> = population()
            .ids()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["0301", "1151", "4601", "9999"]);
    }

    #[test]
    fn test_info_and_name_agree() {
        let dataset = population();
        for id in dataset.ids() {
            let name = dataset.name_of(id.as_str()).unwrap();
            let record = dataset.info(id.as_str()).unwrap();
            assert_eq!(dataset.record(name).unwrap(), record);
            assert_eq!(record.identifier, id);
        }
    }

    #[test]
    fn test_info_is_exact_text_match() {
        let dataset = population();
        assert!(dataset.info("0301").is_ok());
        assert_eq!(
            dataset.info("301").unwrap_err(),
            Error::NotFound {
                dataset: "population".to_string(),
                key: "301".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_identifier_keeps_first_name() {
        let body = r#"{
            "elementer": {
                "Alpha": { "kommunenummer": "0101" },
                "Beta": { "kommunenummer": "0101" }
            }
        }"#;
        let dataset = LoadedDataset::from_json(DatasetKind::Population, body).unwrap();
        assert_eq!(dataset.name_of("0101").unwrap(), "Alpha");
        assert_eq!(dataset.ids().len(), 1);
        assert_eq!(dataset.len(), 2);
    }
}
