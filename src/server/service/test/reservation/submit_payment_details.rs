use super::*;

fn card(number: &str, exp_year: i32) -> CardDetails {
    CardDetails {
        card_type: "Visa".to_string(),
        card_number: number.to_string(),
        exp_month: 12,
        exp_year,
    }
}

/// Tests submitting a card confirms a customer's reservation and keeps only the last digits.
///
/// Expected: Ok with reservation and payment `Confirmed`, stored last four `4242`
#[tokio::test]
async fn confirms_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    let next_year = Utc::now().year() + 1;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    let confirmed = service
        .submit_payment_details(reservation.id, card("4242 4242 4242 4242", next_year))
        .await?;

    assert_eq!(confirmed.reservation_status, ReservationStatus::Confirmed);
    assert_eq!(confirmed.payment_status, PaymentStatus::Confirmed);

    let stored = entity::prelude::ReservationPaymentDetails::find()
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.reservation_id, reservation.id);
    assert_eq!(stored.card_last_four, "4242");
    assert_eq!(stored.card_exp_year, next_year);

    Ok(())
}

/// Tests card details can only be submitted once per reservation.
///
/// Expected: Err(InvalidState) on the second submission
#[tokio::test]
async fn refuses_second_submission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    let next_year = Utc::now().year() + 1;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);
    service
        .submit_payment_details(reservation.id, card("4111111111111111", next_year))
        .await?;

    assert!(matches!(
        service
            .submit_payment_details(reservation.id, card("4111111111111111", next_year))
            .await,
        Err(AppError::InvalidState(_))
    ));
    assert_eq!(
        entity::prelude::ReservationPaymentDetails::find()
            .count(db)
            .await?,
        1
    );

    Ok(())
}

/// Tests malformed and expired cards are rejected without storing anything.
///
/// Expected: Err(Validation) for each
#[tokio::test]
async fn rejects_invalid_cards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_hotel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (branch, _room_type) = factory::helpers::create_hotel(db).await?;
    let customer = factory::create_customer(db).await?;
    let reservation = ReservationFactory::new(db, branch.id, customer.id)
        .status(ReservationStatus::NoShow)
        .build()
        .await?;
    let next_year = Utc::now().year() + 1;

    let policy = BookingPolicy::default();
    let service = ReservationService::new(db, &policy);

    for bad in [
        card("1234", next_year),
        card("4242-4242-4242-abcd", next_year),
        card("4242424242424242", 2020),
    ] {
        assert!(matches!(
            service.submit_payment_details(reservation.id, bad).await,
            Err(AppError::Validation(_))
        ));
    }
    assert_eq!(
        entity::prelude::ReservationPaymentDetails::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}
