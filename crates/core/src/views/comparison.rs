use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::statistics::{Gender, Municipality, StatisticsServiceTrait};

use super::views_model::{Comparison, ComparisonCell, ComparisonOutcome, ComparisonRow};

#[derive(Default)]
struct Score {
    first: usize,
    second: usize,
}

impl Score {
    /// Marks the higher value of the pair as winner; equal values mark nobody.
    fn pair(&mut self, first: Decimal, second: Decimal) -> [ComparisonCell; 2] {
        let ordering = first.cmp(&second);
        match ordering {
            Ordering::Greater => self.first += 1,
            Ordering::Less => self.second += 1,
            Ordering::Equal => {}
        }
        [
            ComparisonCell {
                value: first,
                winner: ordering == Ordering::Greater,
            },
            ComparisonCell {
                value: second,
                winner: ordering == Ordering::Less,
            },
        ]
    }
}

/// Education rates of two municipalities, category by category.
///
/// Every category of the education dataset contributes one comparison for
/// women and one for men. The municipality with the most higher values wins.
pub fn compare(
    statistics: &dyn StatisticsServiceTrait,
    first: &str,
    second: &str,
) -> Result<Comparison> {
    if first == second {
        return Err(Error::SameMunicipality(first.to_string()));
    }
    for id in [first, second] {
        if !statistics.check_municipality_number(id) {
            return Err(Error::InvalidMunicipality(id.to_string()));
        }
    }

    let first = Municipality {
        id: first.into(),
        name: statistics.municipality_name(first)?,
    };
    let second = Municipality {
        id: second.into(),
        name: statistics.municipality_name(second)?,
    };

    let mut score = Score::default();
    let mut rows = Vec::new();
    for (category, label) in statistics.education_categories()? {
        let rate = |municipality: &Municipality, gender: Gender| {
            statistics.education_specific(municipality.id.as_str(), &category, gender, None)
        };

        let women = score.pair(
            rate(&first, Gender::Female)?,
            rate(&second, Gender::Female)?,
        );
        let men = score.pair(rate(&first, Gender::Male)?, rate(&second, Gender::Male)?);

        rows.push(ComparisonRow {
            category,
            label,
            women,
            men,
        });
    }

    let outcome = ComparisonOutcome::from_wins(score.first, score.second);
    let message = outcome.message(&first.name, &second.name);

    Ok(Comparison {
        first,
        second,
        rows,
        first_wins: score.first,
        second_wins: score.second,
        outcome,
        message,
    })
}
