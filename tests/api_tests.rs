use rentbook::init;
use rentbook_core::{api_annual_profit, api_fiscal_year_of, api_owner_expenses, api_property_profit};
use rentbook_domain::{DateValue, Payer, Property, Transaction};

#[test]
fn public_api_matches_reference_scenario() {
    init();

    let properties = vec![Property::new("A")
        .with_ibi(450.0, Payer::Owner)
        .with_garbage_tax(120.0, Payer::Owner)];
    let transactions = vec![
        Transaction::income("t1", 1200.0, "2024-03-01").for_property("A"),
        Transaction::expense("t2", 150.0, "2024-03-15").for_property("A"),
    ];

    let profit = api_annual_profit(&properties, &transactions, Some(2024));
    assert_eq!(profit.total_income, 1200.0);
    assert_eq!(profit.total_expenses, 720.0);
    assert_eq!(profit.net_profit, 480.0);

    let single = api_property_profit(&properties[0], &transactions, Some(2024));
    assert_eq!(single.expenses, 720.0);
    assert_eq!(api_owner_expenses(&properties[0], Some(2024)), 570.0);
}

#[test]
fn public_api_fiscal_year_handles_absent_dates() {
    let now = chrono::Local::now().format("%Y").to_string();
    let current: i32 = now.parse().expect("year");

    assert_eq!(api_fiscal_year_of(None), current);
    assert_eq!(api_fiscal_year_of(Some(&DateValue::from("2019-07-04"))), 2019);
    assert_eq!(api_fiscal_year_of(Some(&DateValue::from(""))), current);
}
