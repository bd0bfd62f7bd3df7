use super::*;

fn guest(email: &str) -> GuestDetails {
    GuestDetails {
        full_name: " Jane Guest ".to_string(),
        email: email.to_string(),
        phone: Some("0771234567".to_string()),
        address: None,
    }
}

/// Tests a new guest is stored with a normalized email.
///
/// Expected: Ok with trimmed name and lowercase email
#[tokio::test]
async fn creates_customer_with_normalized_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo.find_or_create(&guest("  Jane@Example.COM ")).await?;

    assert_eq!(customer.full_name, "Jane Guest");
    assert_eq!(customer.email, "jane@example.com");
    assert_eq!(customer.phone.as_deref(), Some("0771234567"));

    Ok(())
}

/// Tests a returning guest is matched to the existing customer regardless of case.
///
/// Expected: Ok with the existing customer and no new row
#[tokio::test]
async fn reuses_existing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = CustomerFactory::new(db)
        .email("jane@example.com")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let customer = repo.find_or_create(&guest("JANE@example.com")).await?;

    assert_eq!(customer.id, existing.id);
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 1);

    Ok(())
}

/// Tests a customer stored with a mixed-case email is still matched.
///
/// Expected: Ok with the existing customer, its stored email untouched and no new row
#[tokio::test]
async fn matches_mixed_case_stored_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = CustomerFactory::new(db)
        .email("Jane.Doe@Example.com")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let customer = repo.find_or_create(&guest("jane.doe@example.com")).await?;

    assert_eq!(customer.id, existing.id);
    assert_eq!(customer.email, "Jane.Doe@Example.com");
    assert_eq!(entity::prelude::Customer::find().count(db).await?, 1);

    Ok(())
}
