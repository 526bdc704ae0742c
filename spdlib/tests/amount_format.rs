use proptest::prelude::*;
use spdlib::{encode, PaymentRequest};

proptest! {
    #[test]
    fn amount_always_two_decimals(cents in 1u64..10_000_000_000) {
        let am = cents as f64 / 100.0;
        let spd = encode(&PaymentRequest::new("1/0800", am, "CZK")).unwrap();
        let field = spd.split('*').find_map(|s| s.strip_prefix("AM:")).unwrap();
        let (int, frac) = field.split_once('.').unwrap();
        prop_assert_eq!(frac.len(), 2);
        prop_assert_eq!(format!("{int}{frac}").parse::<u64>().unwrap(), cents);
    }
}
