//! Diesel schema for lead persistence.

diesel::table! {
    /// Lead records.
    leads (id) {
        /// Lead identifier.
        id -> Uuid,
        /// Contact name.
        #[max_length = 255]
        name -> Varchar,
        /// Phone number.
        #[max_length = 50]
        phone -> Varchar,
        /// Email address.
        #[max_length = 255]
        email -> Varchar,
        /// Pipeline status.
        #[max_length = 50]
        status -> Varchar,
        /// Last-contact date.
        last_contact -> Date,
        /// Optional property of interest. Not a foreign key: deleting a
        /// property leaves the reference dangling.
        property_of_interest_id -> Nullable<Uuid>,
        /// Client-needs narrative.
        client_needs -> Text,
        /// Optional acquisition source.
        #[max_length = 100]
        source -> Nullable<Varchar>,
        /// Optional responsible agent.
        #[max_length = 255]
        agent -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
