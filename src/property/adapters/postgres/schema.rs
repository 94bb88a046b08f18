//! Diesel schema for the property catalog.

diesel::table! {
    /// Property listings.
    properties (id) {
        /// Property identifier.
        id -> Uuid,
        /// Listing title.
        #[max_length = 255]
        title -> Varchar,
        /// Asking price in whole currency units.
        price -> Int8,
        /// Listing category.
        #[max_length = 50]
        category -> Varchar,
        /// Cover image reference.
        image_url -> Text,
        /// Bedroom count.
        bedrooms -> Int2,
        /// Bathroom count.
        bathrooms -> Int2,
        /// Floor area in square metres.
        area_sqm -> Int4,
        /// Optional latitude.
        latitude -> Nullable<Float8>,
        /// Optional longitude.
        longitude -> Nullable<Float8>,
        /// Free-text description.
        description -> Text,
        /// Amenity list.
        amenities -> Array<Text>,
        /// Gallery image references.
        gallery -> Array<Text>,
        /// Postal address payload.
        address -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
