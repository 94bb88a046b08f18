//! Task repository behaviour against `PostgreSQL`.

use crate::postgres::helpers::{BoxError, CrmDatabase, crm_database};
use crate::test_helpers::{FixedClock, date};
use chrono::{NaiveDate, NaiveTime};
use realtyflow::lead::domain::LeadId;
use realtyflow::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{Task, TaskDraft, TaskType},
    ports::{TaskRepository, TaskRepositoryError},
};
use rstest::rstest;

fn at(hour: u32, minute: u32) -> Result<NaiveTime, BoxError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| "invalid time".into())
}

fn scheduled(task_type: TaskType, day: NaiveDate, time: NaiveTime) -> Result<Task, BoxError> {
    let draft = TaskDraft::new(task_type)
        .on(day)
        .at(time)
        .for_lead(LeadId::new())
        .validate()?;
    Ok(Task::create(draft, &FixedClock::on(date(2026, 4, 15))))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_task_reads_back_with_notes_and_schedule(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let draft = TaskDraft::new(TaskType::ContractSigning)
        .on(date(2026, 4, 20))
        .at(at(14, 30)?)
        .for_lead(LeadId::new())
        .with_notes("Levar duas vias do contrato")
        .validate()?;
    let task = Task::create(draft, &FixedClock::on(date(2026, 4, 15)));

    repo.store(&task).await?;
    let found = repo.find_by_id(task.id()).await?.ok_or("stored task missing")?;

    assert_eq!(found, task);
    assert_eq!(found.task_type(), TaskType::ContractSigning);
    assert_eq!(found.time(), at(14, 30)?);
    assert_eq!(found.notes(), Some("Levar duas vias do contrato"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_the_same_task_twice_is_a_duplicate(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let task = scheduled(TaskType::Call, date(2026, 4, 16), at(9, 0)?)?;

    repo.store(&task).await?;
    let result = repo.store(&task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_moves_a_task_and_rejects_unknown_tasks(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let task = scheduled(TaskType::Visit, date(2026, 4, 20), at(10, 0)?)?;
    repo.store(&task).await?;

    let draft = TaskDraft::editing(&task)
        .on(date(2026, 4, 22))
        .at(at(16, 0)?)
        .with_notes("Cliente pediu outro horário")
        .validate()?;
    let moved = task.revised(draft, &FixedClock::on(date(2026, 4, 18)));
    repo.update(&moved).await?;
    assert_eq!(repo.find_by_id(task.id()).await?, Some(moved));

    let unknown = scheduled(TaskType::Call, date(2026, 4, 16), at(9, 0)?)?;
    let result = repo.update(&unknown).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == unknown.id()
    ));
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
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let task = scheduled(TaskType::PaymentFollowUp, date(2026, 4, 30), at(11, 0)?)?;
    repo.store(&task).await?;

    assert!(repo.delete(task.id()).await?);
    assert!(!repo.delete(task.id()).await?);
    assert_eq!(repo.find_by_id(task.id()).await?, None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_date_then_time(
    #[future] crm_database: Result<Option<CrmDatabase>, BoxError>,
) -> Result<(), BoxError> {
    let Some(db) = crm_database.await? else {
        return Ok(());
    };
    let repo = PostgresTaskRepository::new(db.pool.clone());
    let late_call = scheduled(TaskType::Call, date(2026, 4, 16), at(17, 0)?)?;
    let next_week = scheduled(TaskType::Visit, date(2026, 4, 23), at(8, 0)?)?;
    let early_call = scheduled(TaskType::Call, date(2026, 4, 16), at(9, 15)?)?;
    for task in [&late_call, &next_week, &early_call] {
        repo.store(task).await?;
    }

    let ids: Vec<_> = repo.list().await?.iter().map(Task::id).collect();

    assert_eq!(ids, [early_call.id(), late_call.id(), next_week.id()]);
    Ok(())
}
