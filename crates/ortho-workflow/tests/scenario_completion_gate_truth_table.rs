//! The completion gate must hold exactly when delivery is confirmed AND
//! (the payment method is not cash-on-delivery OR the cash was collected).
//! All four confirmation combinations are checked for every method.

use ortho_schemas::PaymentMethod;
use ortho_workflow::{can_complete, CompletionGate};

#[test]
fn cash_on_delivery_requires_both_confirmations() {
    let cases = [
        // (delivery_confirmation, payment_collected, expected)
        (false, false, false),
        (false, true, false),
        (true, false, false),
        (true, true, true),
    ];
    for (delivery_confirmation, payment_collected, expected) in cases {
        let gate = CompletionGate {
            delivery_confirmation,
            payment_collected,
        };
        assert_eq!(
            can_complete(gate, PaymentMethod::CashOnDelivery),
            expected,
            "delivery={delivery_confirmation} collected={payment_collected}"
        );
    }
}

#[test]
fn prepaid_methods_only_require_delivery_confirmation() {
    for method in [
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::Wallet,
    ] {
        for payment_collected in [false, true] {
            let confirmed = CompletionGate {
                delivery_confirmation: true,
                payment_collected,
            };
            assert!(can_complete(confirmed, method), "{method}");

            let unconfirmed = CompletionGate {
                delivery_confirmation: false,
                payment_collected,
            };
            assert!(!can_complete(unconfirmed, method), "{method}");
        }
    }
}
