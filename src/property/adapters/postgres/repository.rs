//! `PostgreSQL` repository implementation for the property catalog.

use super::{
    models::{NewPropertyRow, PropertyRow},
    schema::properties,
};
use crate::pg::{CrmPgPool, get_conn_with, run_blocking_with};
use crate::property::{
    domain::{
        Address, GeoPoint, PersistedPropertyData, Price, Property, PropertyCategory,
        PropertyDetails, PropertyId,
    },
    ports::{PropertyRepository, PropertyRepositoryError, PropertyRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed property repository.
#[derive(Debug, Clone)]
pub struct PostgresPropertyRepository {
    pool: CrmPgPool,
}

impl PostgresPropertyRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CrmPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> PropertyRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> PropertyRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection =
                    get_conn_with(&pool, PropertyRepositoryError::persistence)?;
                f(&mut connection)
            },
            PropertyRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn store(&self, property: &Property) -> PropertyRepositoryResult<()> {
        let property_id = property.id();
        let new_row = to_new_row(property)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(properties::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        PropertyRepositoryError::DuplicateProperty(property_id)
                    }
                    _ => PropertyRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, property: &Property) -> PropertyRepositoryResult<()> {
        let property_id = property.id();
        let row = to_new_row(property)?;

        self.run_blocking(move |connection| {
            let updated = diesel::update(
                properties::table.filter(properties::id.eq(property_id.into_inner())),
            )
            .set(&row)
            .execute(connection)
            .map_err(PropertyRepositoryError::persistence)?;
            if updated == 0 {
                return Err(PropertyRepositoryError::NotFound(property_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: PropertyId) -> PropertyRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed =
                diesel::delete(properties::table.filter(properties::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(PropertyRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn find_by_id(&self, id: PropertyId) -> PropertyRepositoryResult<Option<Property>> {
        self.run_blocking(move |connection| {
            let row = properties::table
                .filter(properties::id.eq(id.into_inner()))
                .select(PropertyRow::as_select())
                .first::<PropertyRow>(connection)
                .optional()
                .map_err(PropertyRepositoryError::persistence)?;
            row.map(row_to_property).transpose()
        })
        .await
    }

    async fn list(&self) -> PropertyRepositoryResult<Vec<Property>> {
        self.run_blocking(move |connection| {
            let rows = properties::table
                .order((properties::created_at.desc(), properties::id.asc()))
                .select(PropertyRow::as_select())
                .load::<PropertyRow>(connection)
                .map_err(PropertyRepositoryError::persistence)?;
            rows.into_iter().map(row_to_property).collect()
        })
        .await
    }
}

pub(super) fn to_new_row(property: &Property) -> PropertyRepositoryResult<NewPropertyRow> {
    let details = property.details();
    let price = i64::try_from(details.price().value())
        .map_err(PropertyRepositoryError::persistence)?;
    let area_sqm =
        i32::try_from(details.area_sqm()).map_err(PropertyRepositoryError::persistence)?;
    let address =
        serde_json::to_value(details.address()).map_err(PropertyRepositoryError::persistence)?;

    Ok(NewPropertyRow {
        id: property.id().into_inner(),
        title: details.title().to_owned(),
        price,
        category: details.category().as_str().to_owned(),
        image_url: details.image_url().to_owned(),
        bedrooms: i16::from(details.bedrooms()),
        bathrooms: i16::from(details.bathrooms()),
        area_sqm,
        latitude: details.location().map(GeoPoint::latitude),
        longitude: details.location().map(GeoPoint::longitude),
        description: details.description().to_owned(),
        amenities: details.amenities().to_vec(),
        gallery: details.gallery().to_vec(),
        address,
        created_at: property.created_at(),
        updated_at: property.updated_at(),
    })
}

pub(super) fn row_to_property(row: PropertyRow) -> PropertyRepositoryResult<Property> {
    let PropertyRow {
        id,
        title,
        price: persisted_price,
        category: persisted_category,
        image_url,
        bedrooms,
        bathrooms,
        area_sqm,
        latitude,
        longitude,
        description,
        amenities,
        gallery,
        address: persisted_address,
        created_at,
        updated_at,
    } = row;

    let price = u64::try_from(persisted_price)
        .map_err(PropertyRepositoryError::persistence)
        .and_then(|value| Price::new(value).map_err(PropertyRepositoryError::persistence))?;
    let category = PropertyCategory::try_from(persisted_category.as_str())
        .map_err(PropertyRepositoryError::persistence)?;
    let address = serde_json::from_value::<Address>(persisted_address)
        .map_err(PropertyRepositoryError::persistence)?;

    let mut details = PropertyDetails::new(title, price, category)
        .map_err(PropertyRepositoryError::persistence)?
        .with_rooms(
            u8::try_from(bedrooms).map_err(PropertyRepositoryError::persistence)?,
            u8::try_from(bathrooms).map_err(PropertyRepositoryError::persistence)?,
        )
        .with_area(u32::try_from(area_sqm).map_err(PropertyRepositoryError::persistence)?)
        .with_description(description)
        .with_image_url(image_url)
        .with_amenities(amenities)
        .with_gallery(gallery)
        .with_address(address);
    if let (Some(lat), Some(lon)) = (latitude, longitude) {
        let location = GeoPoint::new(lat, lon).map_err(PropertyRepositoryError::persistence)?;
        details = details.with_location(location);
    }

    Ok(Property::from_persisted(PersistedPropertyData {
        id: PropertyId::from_uuid(id),
        details,
        created_at,
        updated_at,
    }))
}
