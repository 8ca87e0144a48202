use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    balance_service::BalanceService,
    forecast_service::ForecastService,
    rates::{PredictionRate, PredictionRates},
    time::FixedClock,
    vat_service::VatService,
    CoreError,
};
use moneyflow_domain::{DateNotSet, Expense, Ledger, Revenue, VatRate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn revenue(value: f64) -> Revenue {
    Revenue::new(
        value,
        "Website development",
        "Milestone payment",
        Uuid::new_v4(),
        VatRate::default(),
    )
}

fn expense(value: f64) -> Expense {
    Expense::new(
        value,
        "WP theme purchase",
        "Storefront license",
        Uuid::new_v4(),
        VatRate::default(),
    )
}

#[test]
fn vat_is_zero_when_months_differ() {
    let item = revenue(100.0).with_real_date(date(2014, 4, 23));
    let vat = VatService::item_vat(&item, date(2014, 7, 1)).unwrap();
    assert_eq!(vat, 0.0);
}

#[test]
fn vat_is_zero_for_non_repeating_item_in_another_year() {
    let item = revenue(100.0).with_real_date(date(2015, 7, 23));
    let vat = VatService::item_vat(&item, date(2014, 7, 1)).unwrap();
    assert_eq!(vat, 0.0);
}

#[test]
fn vat_accrues_when_month_and_year_match() {
    let item = revenue(100.0).with_real_date(date(2014, 7, 23));
    let vat = VatService::item_vat(&item, date(2014, 7, 1)).unwrap();
    assert_eq!(vat, 22.0);
}

#[test]
fn repeating_item_ignores_the_year_check() {
    let item = revenue(100.0)
        .with_real_date(date(2015, 7, 23))
        .with_repeating();
    let vat = VatService::item_vat(&item, date(2014, 7, 1)).unwrap();
    assert_eq!(vat, 22.0);
}

#[test]
fn planned_dated_item_accrues_vat_too() {
    let item = expense(100.0).with_planned_date(date(2014, 7, 23));
    let vat = VatService::item_vat(&item, date(2014, 7, 1)).unwrap();
    assert_eq!(vat, 22.0);
}

#[test]
fn vat_query_fails_without_any_date() {
    let item = revenue(100.0);
    let err = VatService::item_vat(&item, date(2014, 7, 1)).unwrap_err();
    assert_eq!(err, CoreError::DateNotSet(DateNotSet));
}

#[test]
fn monthly_vat_nets_revenues_against_expenses() {
    let mut ledger = Ledger::new();
    ledger.add_revenue(revenue(1000.0).with_real_date(date(2024, 4, 11)));
    ledger.add_expense(expense(500.0).with_real_date(date(2024, 4, 11)));

    let net = VatService::monthly_vat(&ledger, date(2024, 4, 15)).unwrap();
    assert_eq!(net, 110.0);
}

#[test]
fn monthly_vat_skips_expense_from_an_earlier_month() {
    let mut ledger = Ledger::new();
    ledger.add_revenue(revenue(1000.0).with_real_date(date(2024, 4, 11)));
    ledger.add_expense(expense(500.0).with_real_date(date(2023, 12, 15)));

    let net = VatService::monthly_vat(&ledger, date(2024, 4, 15)).unwrap();
    assert_eq!(net, 220.0);
}

#[test]
fn balance_refuses_future_dates() {
    let ledger = Ledger::new();
    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let err = BalanceService::balance(&ledger, date(2024, 4, 22), &clock).unwrap_err();
    assert_eq!(err, CoreError::FutureDate(date(2024, 4, 22)));
}

#[test]
fn balance_nets_totals_within_the_same_month() {
    let mut ledger = Ledger::new();
    ledger.add_revenue(revenue(1000.0).with_real_date(date(2024, 4, 11)));
    ledger.add_expense(expense(500.0).with_real_date(date(2024, 4, 11)));

    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let balance = BalanceService::balance(&ledger, date(2024, 4, 14), &clock).unwrap();
    assert_eq!(balance, 610.0);
}

#[test]
fn balance_is_zero_before_anything_happened() {
    let mut ledger = Ledger::new();
    ledger.add_revenue(revenue(1000.0).with_real_date(date(2024, 4, 11)));
    ledger.add_expense(expense(500.0).with_real_date(date(2024, 4, 11)));

    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let balance = BalanceService::balance(&ledger, date(2024, 4, 1), &clock).unwrap();
    assert_eq!(balance, 0.0);
}

#[test]
fn balance_multiplies_by_elapsed_months_regardless_of_repeat() {
    let mut ledger = Ledger::new();
    // Dated five accounting months back; the flag below does not change the
    // multiplier, only VAT reads it.
    ledger.add_revenue(
        revenue(1000.0)
            .with_real_date(date(2023, 12, 15))
            .with_repeating(),
    );
    ledger.add_expense(expense(500.0).with_real_date(date(2024, 4, 11)));

    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let balance = BalanceService::balance(&ledger, date(2024, 4, 15), &clock).unwrap();
    assert_eq!(balance, 1220.0 * 5.0 - 610.0);
}

#[test]
fn undated_items_do_not_accrue_balance() {
    let mut ledger = Ledger::new();
    ledger.add_revenue(revenue(1000.0));

    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let balance = BalanceService::balance(&ledger, date(2024, 4, 14), &clock).unwrap();
    assert_eq!(balance, 0.0);
}

fn prediction_ledger() -> Ledger {
    let payment_id = Uuid::new_v4();

    let mut revenue = revenue(800.0).with_planned_date(date(2024, 4, 19));
    let first = revenue.record_inflow(500, date(2024, 4, 17), payment_id);
    let second = revenue.record_inflow(300, date(2024, 4, 21), payment_id);
    revenue.inflow_mut(first).unwrap().set_probability(Some(0.80));
    revenue.inflow_mut(second).unwrap().set_probability(Some(0.80));

    let mut expense = expense(300.0).with_planned_date(date(2024, 4, 19));
    let first = expense.record_outflow(100, date(2024, 4, 17), payment_id);
    let second = expense.record_outflow(200, date(2024, 4, 21), payment_id);
    expense.outflow_mut(first).unwrap().set_probability(Some(0.80));
    expense.outflow_mut(second).unwrap().set_probability(Some(0.80));

    let mut ledger = Ledger::new();
    ledger.add_revenue(revenue);
    ledger.add_expense(expense);
    ledger
}

#[test]
fn prediction_refuses_past_and_present_dates() {
    let ledger = Ledger::new();
    let rates = PredictionRates::default();
    let clock = FixedClock::at_midnight(date(2024, 4, 15));

    let err = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 8),
        PredictionRate::Realistic,
        &rates,
        &clock,
    )
    .unwrap_err();
    assert_eq!(err, CoreError::PastDate(date(2024, 4, 8)));

    let err = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 15),
        PredictionRate::Realistic,
        &rates,
        &clock,
    )
    .unwrap_err();
    assert_eq!(err, CoreError::PastDate(date(2024, 4, 15)));
}

#[test]
fn prediction_rejects_unconfigured_rate_selectors() {
    let ledger = Ledger::new();
    let rates = PredictionRates::empty().with_factor(PredictionRate::Realistic, 0.70);
    let clock = FixedClock::at_midnight(date(2024, 4, 15));

    let err = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 20),
        PredictionRate::Optimistic,
        &rates,
        &clock,
    )
    .unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidPredictionRate(PredictionRate::Optimistic)
    );
}

#[test]
fn prediction_includes_only_flows_due_within_the_window() {
    let ledger = prediction_ledger();
    let rates = PredictionRates::default();
    let clock = FixedClock::at_midnight(date(2024, 4, 15));

    let near = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 20),
        PredictionRate::Realistic,
        &rates,
        &clock,
    )
    .unwrap();
    assert_eq!(near, 280.0);

    let far = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 22),
        PredictionRate::Realistic,
        &rates,
        &clock,
    )
    .unwrap();
    assert_eq!(far, 350.0);
}

#[test]
fn prediction_scales_with_the_chosen_rate() {
    let ledger = prediction_ledger();
    let rates = PredictionRates::default();
    let clock = FixedClock::at_midnight(date(2024, 4, 15));

    let optimistic = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 22),
        PredictionRate::Optimistic,
        &rates,
        &clock,
    )
    .unwrap();
    assert_eq!(optimistic, 500.0 * 0.85);

    let pessimistic = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 22),
        PredictionRate::Pessimistic,
        &rates,
        &clock,
    )
    .unwrap();
    assert_eq!(pessimistic, 500.0 * 0.60);
}

#[test]
fn flows_without_probability_never_enter_predictions() {
    let payment_id = Uuid::new_v4();
    let mut item = revenue(800.0).with_planned_date(date(2024, 4, 19));
    // Certain inflow: no probability assigned.
    item.record_inflow(500, date(2024, 4, 17), payment_id);

    let mut ledger = Ledger::new();
    ledger.add_revenue(item);

    let rates = PredictionRates::default();
    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let predicted = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 20),
        PredictionRate::Realistic,
        &rates,
        &clock,
    )
    .unwrap();
    assert_eq!(predicted, 0.0);
}

#[test]
fn probability_magnitude_only_gates_inclusion() {
    let payment_id = Uuid::new_v4();
    let mut item = revenue(800.0).with_planned_date(date(2024, 4, 19));
    let id = item.record_inflow(500, date(2024, 4, 17), payment_id);
    // A tiny probability still includes the full amount; only the global
    // rate factor scales the sum.
    item.inflow_mut(id).unwrap().set_probability(Some(0.01));

    let mut ledger = Ledger::new();
    ledger.add_revenue(item);

    let rates = PredictionRates::default();
    let clock = FixedClock::at_midnight(date(2024, 4, 15));
    let predicted = ForecastService::balance_prediction(
        &ledger,
        date(2024, 4, 20),
        PredictionRate::Realistic,
        &rates,
        &clock,
    )
    .unwrap();
    assert_eq!(predicted, 350.0);
}
