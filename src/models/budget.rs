use rust_decimal::Decimal;

use super::expense::Expense;

/// Spending totals against a fixed renovation budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSummary {
    pub total: Decimal,
    pub spent: Decimal,
}

impl BudgetSummary {
    pub fn new(total: Decimal, expenses: &[Expense]) -> Self {
        BudgetSummary {
            total,
            spent: expenses.iter().map(|e| e.amount).sum(),
        }
    }

    /// Negative once spending overshoots the budget.
    pub fn remaining(&self) -> Decimal {
        self.total - self.spent
    }

    /// `spent / total * 100`, unclamped. `None` for a zero budget.
    pub fn progress_percent(&self) -> Option<Decimal> {
        self.spent
            .checked_div(self.total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    }

    /// Gauge fill in `[0, 1]`.
    pub fn gauge_ratio(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;

        self.progress_percent()
            .and_then(|p| p.to_f64())
            .map(|p| (p / 100.0).clamp(0.0, 1.0))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample;
    use chrono::NaiveDate;

    fn expense(id: u32, amount: i64) -> Expense {
        Expense::new(id, "x", amount, "y", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
    }

    #[test]
    fn spent_is_sum_of_sample_expenses() {
        let summary = BudgetSummary::new(Decimal::from(150_000), &sample::expenses());
        assert_eq!(summary.spent, Decimal::from(69_250));
        assert_eq!(summary.remaining(), Decimal::from(80_750));
    }

    #[test]
    fn progress_is_percentage_of_total() {
        let summary = BudgetSummary::new(Decimal::from(1_000), &[expense(1, 250)]);
        assert_eq!(summary.progress_percent(), Some(Decimal::from(25)));
        assert!((summary.gauge_ratio() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn overspending_goes_negative_and_past_hundred() {
        let summary = BudgetSummary::new(Decimal::from(1_000), &[expense(1, 900), expense(2, 600)]);
        assert_eq!(summary.remaining(), Decimal::from(-500));
        assert_eq!(summary.progress_percent(), Some(Decimal::from(150)));
        assert_eq!(summary.gauge_ratio(), 1.0);
    }

    #[test]
    fn zero_budget_has_no_progress() {
        let summary = BudgetSummary::new(Decimal::ZERO, &[expense(1, 10)]);
        assert_eq!(summary.progress_percent(), None);
        assert_eq!(summary.gauge_ratio(), 0.0);
    }

    #[test]
    fn no_expenses_means_nothing_spent() {
        let summary = BudgetSummary::new(Decimal::from(500), &[]);
        assert_eq!(summary.spent, Decimal::ZERO);
        assert_eq!(summary.remaining(), Decimal::from(500));
    }
}
