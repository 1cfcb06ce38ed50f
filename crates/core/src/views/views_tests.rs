#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::statistics::StatisticsService;
    use crate::test_fixtures::fixture_context;
    use crate::views::{compare, messages, municipality_details, overview, ComparisonOutcome};

    async fn service() -> StatisticsService {
        StatisticsService::new(Arc::new(fixture_context().await))
    }

    #[tokio::test]
    async fn test_overview_rows() {
        let service = service().await;
        let rows = overview(&service).unwrap();

        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Bergen", "Nullby", "Oslo", "Utsira"]);

        let oslo = &rows[2];
        assert_eq!(oslo.id.as_str(), "0301");
        assert_eq!(oslo.population, Some(620000));
        assert_eq!(oslo.population_change, Some(dec!(3.33)));

        // Zero population in 2016
        let nullby = &rows[1];
        assert_eq!(nullby.population, Some(15));
        assert_eq!(nullby.population_change, None);
    }

    #[tokio::test]
    async fn test_details() {
        let service = service().await;
        let details = municipality_details(&service, "0301").unwrap();

        let summary = &details.summary;
        assert_eq!(summary.name, "Oslo");
        assert_eq!(summary.population, 620000);
        assert_eq!(summary.higher_education_short.count, 283650);
        assert_eq!(summary.higher_education_short.percent, dec!(45.75));
        assert_eq!(summary.higher_education_long.percent, dec!(23.00));
        assert_eq!(summary.employment.count, 412300);
        assert_eq!(summary.employment.percent, dec!(66.50));

        assert_eq!(details.history.len(), 11);
        let first = &details.history[0];
        assert_eq!(first.year, 2007);
        // 250000 men plus 170000 women
        assert_eq!(first.population, 420000);
        assert_eq!(first.employment_rate, dec!(61.50));
        assert_eq!(first.education.primary, dec!(47.00));
        assert_eq!(first.education.vocational, dec!(4.00));
        assert_eq!(details.history[10].year, 2017);
    }

    #[tokio::test]
    async fn test_details_rejects_unknown_number() {
        let service = service().await;
        assert_eq!(
            municipality_details(&service, "9999").unwrap_err(),
            Error::InvalidMunicipality("9999".to_string())
        );
        assert!(matches!(
            municipality_details(&service, "oslo"),
            Err(Error::InvalidMunicipality(_))
        ));
    }

    #[tokio::test]
    async fn test_compare_counts_wins_numerically() {
        let service = service().await;
        let comparison = compare(&service, "0301", "4601").unwrap();

        assert_eq!(comparison.rows.len(), 5);
        assert_eq!(comparison.first_wins, 5);
        assert_eq!(comparison.second_wins, 4);
        assert_eq!(comparison.outcome, ComparisonOutcome::FirstWins);
        assert_eq!(comparison.message, "Oslo slår Bergen i utdanning.");

        // 11 against 9.5 must favour Oslo
        let long = comparison
            .rows
            .iter()
            .find(|row| row.category == "04a")
            .unwrap();
        assert!(long.women[0].winner);
        assert!(!long.women[1].winner);
        assert_eq!(long.label, "Universitets- og høgskolenivå lang");

        // Equal women's primary rates mark nobody
        let primary = &comparison.rows[0];
        assert_eq!(primary.category, "01");
        assert!(!primary.women[0].winner && !primary.women[1].winner);
    }

    #[tokio::test]
    async fn test_compare_reversed_and_tied() {
        let service = service().await;

        let reversed = compare(&service, "4601", "0301").unwrap();
        assert_eq!(reversed.outcome, ComparisonOutcome::SecondWins);
        assert_eq!(reversed.message, "Oslo slår Bergen i utdanning.");

        let tie = compare(&service, "0301", "1151").unwrap();
        assert_eq!(tie.outcome, ComparisonOutcome::Tie);
        assert_eq!((tie.first_wins, tie.second_wins), (0, 0));
        assert_eq!(tie.message, "Uavgjort mellom Oslo og Utsira i utdanning.");
    }

    #[tokio::test]
    async fn test_compare_rejects_invalid_input() {
        let service = service().await;
        assert_eq!(
            compare(&service, "0301", "0301").unwrap_err(),
            Error::SameMunicipality("0301".to_string())
        );
        assert_eq!(
            compare(&service, "0301", "9999").unwrap_err(),
            Error::InvalidMunicipality("9999".to_string())
        );
        assert!(matches!(
            compare(&service, "", "4601"),
            Err(Error::InvalidMunicipality(_))
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(messages::SAME_NUMBERS, "Nummerne er like.");
        assert_eq!(
            ComparisonOutcome::SecondWins.message("Oslo", "Bergen"),
            "Bergen slår Oslo i utdanning."
        );
    }
}
