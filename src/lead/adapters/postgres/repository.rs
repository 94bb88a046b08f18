//! `PostgreSQL` repository implementation for lead storage.

use super::{
    models::{LeadRow, NewLeadRow},
    schema::leads,
};
use crate::lead::{
    domain::{Lead, LeadId, PersistedLeadData, PipelineStatus},
    ports::{LeadRepository, LeadRepositoryError, LeadRepositoryResult},
};
use crate::pg::{CrmPgPool, get_conn_with, run_blocking_with};
use crate::property::domain::PropertyId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL`-backed lead repository.
#[derive(Debug, Clone)]
pub struct PostgresLeadRepository {
    pool: CrmPgPool,
}

impl PostgresLeadRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CrmPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> LeadRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> LeadRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, LeadRepositoryError::persistence)?;
                f(&mut connection)
            },
            LeadRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn store(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        let lead_id = lead.id();
        let new_row = to_new_row(lead);

        self.run_blocking(move |connection| {
            diesel::insert_into(leads::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        LeadRepositoryError::DuplicateLead(lead_id)
                    }
                    _ => LeadRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, lead: &Lead) -> LeadRepositoryResult<()> {
        let lead_id = lead.id();
        let row = to_new_row(lead);

        self.run_blocking(move |connection| {
            let updated = diesel::update(leads::table.filter(leads::id.eq(lead_id.into_inner())))
                .set(&row)
                .execute(connection)
                .map_err(LeadRepositoryError::persistence)?;
            if updated == 0 {
                return Err(LeadRepositoryError::NotFound(lead_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: LeadId) -> LeadRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(leads::table.filter(leads::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(LeadRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn find_by_id(&self, id: LeadId) -> LeadRepositoryResult<Option<Lead>> {
        self.run_blocking(move |connection| {
            let row = leads::table
                .filter(leads::id.eq(id.into_inner()))
                .select(LeadRow::as_select())
                .first::<LeadRow>(connection)
                .optional()
                .map_err(LeadRepositoryError::persistence)?;
            row.map(row_to_lead).transpose()
        })
        .await
    }

    async fn list(&self) -> LeadRepositoryResult<Vec<Lead>> {
        self.run_blocking(move |connection| {
            let rows = leads::table
                .order((leads::created_at.desc(), leads::id.asc()))
                .select(LeadRow::as_select())
                .load::<LeadRow>(connection)
                .map_err(LeadRepositoryError::persistence)?;
            rows.into_iter().map(row_to_lead).collect()
        })
        .await
    }
}

pub(super) fn to_new_row(lead: &Lead) -> NewLeadRow {
    NewLeadRow {
        id: lead.id().into_inner(),
        name: lead.name().to_owned(),
        phone: lead.phone().to_owned(),
        email: lead.email().to_owned(),
        status: lead.status().as_str().to_owned(),
        last_contact: lead.last_contact(),
        property_of_interest_id: lead.property_of_interest().map(PropertyId::into_inner),
        client_needs: lead.client_needs().to_owned(),
        source: lead.source().map(str::to_owned),
        agent: lead.agent().map(str::to_owned),
        created_at: lead.created_at(),
        updated_at: lead.updated_at(),
    }
}

pub(super) fn row_to_lead(row: LeadRow) -> LeadRepositoryResult<Lead> {
    let LeadRow {
        id,
        name,
        phone,
        email,
        status: persisted_status,
        last_contact,
        property_of_interest_id,
        client_needs,
        source,
        agent,
        created_at,
        updated_at,
    } = row;

    let status = PipelineStatus::try_from(persisted_status.as_str())
        .map_err(LeadRepositoryError::persistence)?;

    Ok(Lead::from_persisted(PersistedLeadData {
        id: LeadId::from_uuid(id),
        name,
        phone,
        email,
        status,
        last_contact,
        property_of_interest: property_of_interest_id.map(PropertyId::from_uuid),
        client_needs,
        source,
        agent,
        created_at,
        updated_at,
    }))
}
