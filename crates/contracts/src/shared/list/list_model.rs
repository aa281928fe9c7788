use crate::domain::common::CollectionResource;
use crate::shared::api::ApiError;
use crate::shared::lifecycle::{FetchTicket, TicketCounter};

/// Фаза загрузки списка
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPhase {
    #[default]
    Idle,
    Fetching,
    Loaded,
    Failed,
}

/// Только активные записи, в порядке сервера
pub fn active_only<R: CollectionResource>(records: Vec<R>) -> Vec<R> {
    records.into_iter().filter(|r| r.is_active()).collect()
}

/// Состояние списка записей коллекции
#[derive(Debug, Clone)]
pub struct ListModel<R> {
    phase: ListPhase,
    rows: Vec<R>,
    error: Option<String>,
    fetches: TicketCounter,
}

impl<R> Default for ListModel<R> {
    fn default() -> Self {
        Self {
            phase: ListPhase::Idle,
            rows: Vec::new(),
            error: None,
            fetches: TicketCounter::default(),
        }
    }
}

impl<R: CollectionResource> ListModel<R> {
    /// Начать загрузку. Предыдущие строки остаются видимыми до ответа.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.phase = ListPhase::Fetching;
        self.fetches.next()
    }

    /// Применить ответ сервера. Ответ на устаревший запрос игнорируется.
    pub fn complete(&mut self, ticket: FetchTicket, result: Result<Vec<R>, ApiError>) -> bool {
        if !self.fetches.is_current(ticket) {
            log::debug!("{}: discarding stale list response", R::full_name());
            return false;
        }
        match result {
            Ok(records) => {
                self.rows = active_only(records);
                self.error = None;
                self.phase = ListPhase::Loaded;
            }
            Err(e) => {
                log::error!("{}: failed to load list: {}", R::full_name(), e);
                self.rows.clear();
                self.error = Some(e.to_string());
                self.phase = ListPhase::Failed;
            }
        }
        true
    }

    /// Ошибка операции над строкой (например, удаления); строки не меняются
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Fetching
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::aggregate::Asset;
    use crate::domain::common::{EntityId, RecordStatus};

    fn asset(id: &str, status: RecordStatus) -> Asset {
        Asset {
            id: Some(EntityId::new(id)),
            name: format!("Activo {id}"),
            status,
            ..Asset::default()
        }
    }

    #[test]
    fn test_complete_keeps_only_active_rows_in_server_order() {
        let mut model = ListModel::<Asset>::default();
        let ticket = model.begin_fetch();
        assert!(model.is_loading());
        let applied = model.complete(
            ticket,
            Ok(vec![
                asset("3", RecordStatus::Active),
                asset("1", RecordStatus::Archived),
                asset("2", RecordStatus::Active),
            ]),
        );
        assert!(applied);
        let ids: Vec<&str> = model.rows().iter().filter_map(|a| a.id.as_ref()).map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["3", "2"]);
        assert_eq!(model.phase(), ListPhase::Loaded);
    }

    #[test]
    fn test_failure_shows_empty_list_with_error() {
        let mut model = ListModel::<Asset>::default();
        let ticket = model.begin_fetch();
        model.complete(ticket, Ok(vec![asset("1", RecordStatus::Active)]));

        let ticket = model.begin_fetch();
        model.complete(ticket, Err(ApiError::Transport("connection refused".into())));
        assert!(model.is_empty());
        assert_eq!(model.phase(), ListPhase::Failed);
        assert!(model.error().unwrap().contains("connection refused"));
    }

    #[test]
    fn test_stale_response_does_not_overwrite_newer_one() {
        let mut model = ListModel::<Asset>::default();
        let slow = model.begin_fetch();
        let fast = model.begin_fetch();
        assert!(model.complete(fast, Ok(vec![asset("new", RecordStatus::Active)])));
        assert!(!model.complete(slow, Ok(vec![asset("old", RecordStatus::Active)])));
        assert_eq!(model.rows().len(), 1);
        assert_eq!(model.rows()[0].name, "Activo new");
    }
}
