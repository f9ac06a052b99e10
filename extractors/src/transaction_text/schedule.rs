use chrono::{Months, NaiveDate};

/// How a total is split across monthly installments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstallmentPlan {
    pub count: u32,
    pub total_amount: f64,
    pub per_installment_amount: f64,
}

impl InstallmentPlan {
    pub fn new(total_amount: f64, count: u32) -> Self {
        Self {
            count,
            total_amount,
            per_installment_amount: total_amount / f64::from(count),
        }
    }
}

/// Due dates for `count` monthly installments.
///
/// Installment `i` (1-based) falls `i` months after `base`. Every date is
/// computed from `base`, so a day 31 clamps to the end of short months
/// without drifting later ones.
pub fn installment_dates(base: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (1..=count)
        .filter_map(|i| base.checked_add_months(Months::new(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plan_divides_total() {
        let plan = InstallmentPlan::new(1200.0, 3);
        assert_eq!(plan.per_installment_amount, 400.0);
        assert_eq!(plan.total_amount, 1200.0);
    }

    #[test]
    fn test_dates_start_next_month() {
        let dates = installment_dates(date(2026, 3, 15), 3);
        assert_eq!(dates, vec![date(2026, 4, 15), date(2026, 5, 15), date(2026, 6, 15)]);
    }

    #[test]
    fn test_month_end_clamping() {
        let dates = installment_dates(date(2026, 1, 31), 4);
        assert_eq!(
            dates,
            vec![
                date(2026, 2, 28),
                date(2026, 3, 31),
                date(2026, 4, 30),
                date(2026, 5, 31),
            ]
        );

        let leap = installment_dates(date(2027, 12, 31), 2);
        assert_eq!(leap, vec![date(2028, 1, 31), date(2028, 2, 29)]);
    }

    #[test]
    fn test_crosses_year_boundary() {
        let dates = installment_dates(date(2026, 11, 10), 3);
        assert_eq!(dates.last(), Some(&date(2027, 2, 10)));
    }
}
