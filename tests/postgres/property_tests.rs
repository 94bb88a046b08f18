//! Property repository behaviour against `PostgreSQL`.

use crate::postgres::helpers::{BoxError, CrmDatabase, crm_database, listing};
use crate::test_helpers::{FixedClock, date};
use realtyflow::property::{
    adapters::postgres::PostgresPropertyRepository,
    domain::{Address, GeoPoint, Property},
    ports::{PropertyRepository, PropertyRepositoryError},
};
use rstest::rstest;

fn furnished(property: &Property) -> Result<Property, BoxError> {
    let details = property
        .details()
        .clone()
        .with_description("Casa ampla com vista para o lago")
        .with_image_url("https://img.example.com/lago.jpg")
        .with_amenities(["Piscina".to_owned(), "Churrasqueira".to_owned()])
        .with_gallery([
            "https://img.example.com/lago-1.jpg".to_owned(),
            "https://img.example.com/lago-2.jpg".to_owned(),
        ])
        .with_location(GeoPoint::new(-23.5505, -46.6333)?)
        .with_address(Address {
            street: "Rua das Flores, 120".to_owned(),
            city: "São Paulo".to_owned(),
            state: "SP".to_owned(),
            zip_code: "01310-100".to_owned(),
        });
    let mut revised = property.clone();
    revised.revise(details, &FixedClock::on(date(2026, 4, 2)));
    Ok(revised)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_listing_reads_back_with_every_field(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresPropertyRepository::new(db.pool.clone());
    let property = furnished(&listing("Casa no Lago", 1_250_000, date(2026, 4, 1))?)?;

    repo.store(&property).await?;
    let found = repo.find_by_id(property.id()).await?;

    assert_eq!(found.as_ref(), Some(&property));
    let details = found.as_ref().map(Property::details).ok_or("listing missing")?;
    assert_eq!(details.address().city, "São Paulo");
    assert_eq!(details.amenities(), ["Piscina", "Churrasqueira"]);
    assert_eq!(details.gallery().len(), 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_the_same_listing_twice_is_a_duplicate(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresPropertyRepository::new(db.pool.clone());
    let property = listing("Apartamento Centro", 480_000, date(2026, 4, 1))?;

    repo.store(&property).await?;
    let result = repo.store(&property).await;

    assert!(matches!(
        result,
        Err(PropertyRepositoryError::DuplicateProperty(id)) if id == property.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_changes_and_rejects_unknown_listings(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresPropertyRepository::new(db.pool.clone());
    let stored = listing("Casa no Lago", 1_250_000, date(2026, 4, 1))?;
    repo.store(&stored).await?;

    let revised = furnished(&stored)?;
    repo.update(&revised).await?;
    assert_eq!(repo.find_by_id(stored.id()).await?, Some(revised));

    let unknown = listing("Cobertura Jardins", 2_900_000, date(2026, 4, 1))?;
    let result = repo.update(&unknown).await;
    assert!(matches!(
        result,
        Err(PropertyRepositoryError::NotFound(id)) if id == unknown.id()
    ));
    assert_eq!(repo.find_by_id(unknown.id()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_whether_a_row_was_removed(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresPropertyRepository::new(db.pool.clone());
    let property = listing("Casa no Lago", 1_250_000, date(2026, 4, 1))?;
    repo.store(&property).await?;

    assert!(repo.delete(property.id()).await?);
    assert!(!repo.delete(property.id()).await?);
    assert_eq!(repo.find_by_id(property.id()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_newest_listings_first(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresPropertyRepository::new(db.pool.clone());
    let oldest = listing("Casa no Lago", 1_250_000, date(2026, 3, 1))?;
    let newest = listing("Cobertura Jardins", 2_900_000, date(2026, 4, 10))?;
    let middle = listing("Apartamento Centro", 480_000, date(2026, 3, 20))?;
    for property in [&oldest, &newest, &middle] {
        repo.store(property).await?;
    }

    let titles: Vec<String> = repo
        .list()
        .await?
        .iter()
        .map(|property| property.title().to_owned())
        .collect();

    assert_eq!(
        titles,
        ["Cobertura Jardins", "Apartamento Centro", "Casa no Lago"]
    );
    Ok(())
}
