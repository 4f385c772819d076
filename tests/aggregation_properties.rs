use insurance_core::ledger::{Company, CustomerInfo};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cash_value_equals_the_premium_sum(
        amounts in prop::collection::vec(0i64..10_000, 0..32),
    ) {
        let mut company = Company::new();
        let customer = company.add_customer(CustomerInfo::default());
        for &amount in &amounts {
            company.collect(amount, &customer).unwrap();
        }
        let expected: i64 = amounts.iter().sum();
        prop_assert_eq!(company.cash_value_of(&customer), expected);
        prop_assert_eq!(company.pile_of_cash(), expected);
    }

    #[test]
    fn loans_succeed_exactly_up_to_the_cash_value(
        premium in 0i64..10_000,
        requested in 0i64..20_000,
    ) {
        let mut company = Company::new();
        let customer = company.add_customer(CustomerInfo::default());
        company.collect(premium, &customer).unwrap();

        let before = company.cash_value_of(&customer);
        let result = company.loan(requested, &customer);
        if requested <= before {
            prop_assert!(result.is_ok());
            prop_assert_eq!(company.cash_value_of(&customer), before - requested);
            prop_assert_eq!(company.loan_balance_of(&customer), requested);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(company.cash_value_of(&customer), before);
            prop_assert_eq!(company.loan_balance_of(&customer), 0);
        }
    }

    #[test]
    fn penalties_never_touch_the_loan_balance(
        premium in 0i64..10_000,
        penalty in 0i64..10_000,
    ) {
        let mut company = Company::new();
        let customer = company.add_customer(CustomerInfo::default());
        company.collect(premium, &customer).unwrap();
        company.penalize(penalty, &customer).unwrap();
        prop_assert_eq!(company.cash_value_of(&customer), premium - penalty);
        prop_assert_eq!(company.loan_balance_of(&customer), 0);
    }
}
