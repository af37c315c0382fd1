//! End-to-end purchase flow against the in-memory collaborators.

use std::sync::Arc;

use boxoffice_core::{AccountId, DomainError};
use boxoffice_infra::{
    AdapterError, InMemoryPaymentGateway, InMemorySeatReservation, Payment, Reservation,
};
use boxoffice_ticketing::{
    InvalidPurchase, PurchaseError, PurchaseInput, TicketService, TicketType, TicketTypeRequest,
};
use proptest::prelude::*;

type Service = TicketService<Arc<InMemoryPaymentGateway>, Arc<InMemorySeatReservation>>;

struct Harness {
    payments: Arc<InMemoryPaymentGateway>,
    seats: Arc<InMemorySeatReservation>,
    service: Service,
}

impl Harness {
    fn with(payments: InMemoryPaymentGateway, seats: InMemorySeatReservation) -> Self {
        boxoffice_observability::init();

        let payments = Arc::new(payments);
        let seats = Arc::new(seats);
        let service = TicketService::new(Arc::clone(&payments), Arc::clone(&seats));
        Self {
            payments,
            seats,
            service,
        }
    }

    fn new() -> Self {
        Self::with(InMemoryPaymentGateway::new(), InMemorySeatReservation::new())
    }

    fn assert_untouched(&self) {
        assert!(self.payments.payments().is_empty());
        assert!(self.seats.reservations().is_empty());
    }
}

fn account(raw: i64) -> AccountId {
    AccountId::try_from(raw).unwrap()
}

fn adult(quantity: i64) -> Option<TicketTypeRequest> {
    Some(TicketTypeRequest::new(TicketType::Adult, quantity).unwrap())
}

fn child(quantity: i64) -> Option<TicketTypeRequest> {
    Some(TicketTypeRequest::new(TicketType::Child, quantity).unwrap())
}

fn infant(quantity: i64) -> Option<TicketTypeRequest> {
    Some(TicketTypeRequest::new(TicketType::Infant, quantity).unwrap())
}

fn invalid(result: Result<(), PurchaseError>) -> InvalidPurchase {
    match result {
        Err(err) => err
            .invalid_purchase()
            .cloned()
            .unwrap_or_else(|| panic!("expected InvalidPurchase, got {err:?}")),
        Ok(()) => panic!("expected InvalidPurchase, purchase succeeded"),
    }
}

#[test]
fn adult_purchase_charges_and_reserves_once() {
    let h = Harness::new();

    h.service.purchase_tickets(Some(1), &[adult(2)]).unwrap();

    assert_eq!(
        h.payments.payments(),
        vec![Payment {
            account_id: account(1),
            amount: 50
        }]
    );
    assert_eq!(
        h.seats.reservations(),
        vec![Reservation {
            account_id: account(1),
            seat_count: 2
        }]
    );
}

#[test]
fn family_purchase_charges_adults_and_children_only() {
    let h = Harness::new();

    h.service
        .purchase_tickets(Some(99), &[adult(1), child(2), infant(1)])
        .unwrap();

    assert_eq!(h.payments.payments()[0].amount, 55);
    assert_eq!(h.seats.seats_reserved(account(99)), 3);
}

#[test]
fn rule_violations_leave_collaborators_untouched() {
    let h = Harness::new();

    assert_eq!(
        invalid(h.service.purchase_tickets(Some(1), &[child(2)])),
        InvalidPurchase::AdultRequired
    );
    assert!(matches!(
        invalid(h.service.purchase_tickets(Some(10), &[adult(1), infant(2)])),
        InvalidPurchase::InfantsExceedAdults { .. }
    ));
    assert!(matches!(
        invalid(h.service.purchase_tickets(Some(1), &[adult(26)])),
        InvalidPurchase::TooManyTickets { .. }
    ));
    assert_eq!(
        invalid(h.service.purchase_tickets(None, &[adult(1)])),
        InvalidPurchase::InvalidAccount
    );
    assert_eq!(
        invalid(h.service.purchase_tickets(Some(1), &[])),
        InvalidPurchase::NoTicketRequests
    );
    assert_eq!(
        invalid(h.service.purchase_tickets(Some(1), &[None])),
        InvalidPurchase::MissingTicketRequest { index: 0 }
    );

    h.assert_untouched();
}

#[test]
fn construction_rejects_non_positive_quantities() {
    for quantity in [0, -1] {
        assert!(matches!(
            TicketTypeRequest::new(TicketType::Adult, quantity),
            Err(DomainError::InvalidArgument(_))
        ));
    }
}

#[test]
fn declined_payment_propagates_unchanged() {
    let h = Harness::with(
        InMemoryPaymentGateway::declining("card declined"),
        InMemorySeatReservation::new(),
    );

    let err = h.service.purchase_tickets(Some(5), &[adult(1)]).unwrap_err();

    match &err {
        PurchaseError::Payment(source) => {
            assert_eq!(
                source.downcast_ref::<AdapterError>(),
                Some(&AdapterError::Rejected("card declined".to_string()))
            );
        }
        other => panic!("expected payment failure, got {other:?}"),
    }
    assert_eq!(err.to_string(), "card declined");
    h.assert_untouched();
}

#[test]
fn refused_reservation_propagates_after_payment() {
    let h = Harness::with(
        InMemoryPaymentGateway::new(),
        InMemorySeatReservation::refusing("venue full"),
    );

    let err = h.service.purchase_tickets(Some(5), &[adult(2)]).unwrap_err();

    assert!(matches!(err, PurchaseError::Reservation(_)));
    assert_eq!(err.to_string(), "venue full");
    assert_eq!(h.payments.payments().len(), 1);
}

#[test]
fn json_input_flows_through_purchase() {
    let h = Harness::new();

    let input: PurchaseInput = serde_json::from_str(
        r#"{
            "account_id": 42,
            "requests": [
                {"type": "ADULT", "quantity": 2},
                {"type": "child", "quantity": 1},
                {"type": "Infant", "quantity": 2}
            ]
        }"#,
    )
    .unwrap();

    h.service.purchase(&input).unwrap();

    assert_eq!(h.payments.payments()[0].amount, 65);
    assert_eq!(h.seats.seats_reserved(account(42)), 3);
}

#[test]
fn json_input_with_null_account_is_rejected() {
    let h = Harness::new();

    let input: PurchaseInput =
        serde_json::from_str(r#"{"account_id": null, "requests": [{"type": "ADULT", "quantity": 1}]}"#)
            .unwrap();

    assert_eq!(invalid(h.service.purchase(&input)), InvalidPurchase::InvalidAccount);
    h.assert_untouched();
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: a purchase either reaches both collaborators with the tariff
    /// totals, or reaches neither.
    #[test]
    fn purchases_are_all_or_nothing(
        account_id in -3i64..50,
        adults in 0i64..15,
        children in 0i64..15,
        infants in 0i64..15,
    ) {
        let h = Harness::new();

        let mut requests = Vec::new();
        if adults > 0 {
            requests.push(adult(adults));
        }
        if children > 0 {
            requests.push(child(children));
        }
        if infants > 0 {
            requests.push(infant(infants));
        }

        let valid = account_id > 0
            && adults > 0
            && infants <= adults
            && adults + children + infants <= 25;

        let result = h.service.purchase_tickets(Some(account_id), &requests);

        if valid {
            prop_assert!(result.is_ok());
            prop_assert_eq!(
                h.payments.payments(),
                vec![Payment { account_id: account(account_id), amount: (25 * adults + 15 * children) as u64 }]
            );
            prop_assert_eq!(
                h.seats.reservations(),
                vec![Reservation { account_id: account(account_id), seat_count: (adults + children) as u64 }]
            );
        } else {
            prop_assert!(result.is_err_and(|e| e.is_invalid_purchase()));
            prop_assert!(h.payments.payments().is_empty());
            prop_assert!(h.seats.reservations().is_empty());
        }
    }
}
