//! Общая модель представления списка коллекции (активы, поставщики, группы)

use crate::shared::api_utils::collection_client;
use crate::system::auth::context::{use_session, SessionContext};
use contracts::domain::common::{CollectionResource, EntityId};
use contracts::shared::lifecycle::CancelToken;
use contracts::shared::list::ListModel;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel списка: состояние + команды fetch/delete.
///
/// Все запросы привязаны к жизни компонента: после `on_cleanup`
/// результаты не применяются.
pub struct ListViewModel<R: CollectionResource> {
    pub model: RwSignal<ListModel<R>>,
    cancel: StoredValue<CancelToken>,
    session: SessionContext,
}

impl<R: CollectionResource> Clone for ListViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CollectionResource> Copy for ListViewModel<R> {}

impl<R: CollectionResource> ListViewModel<R> {
    pub fn new() -> Self {
        let cancel = CancelToken::new();
        let on_unmount = cancel.clone();
        on_cleanup(move || on_unmount.cancel());

        Self {
            model: RwSignal::new(ListModel::default()),
            cancel: StoredValue::new(cancel),
            session: use_session(),
        }
    }

    /// Загрузить коллекцию; ответ устаревшего запроса отбрасывается
    pub fn fetch(&self) {
        let Some(ticket) = self.model.try_update(|m| m.begin_fetch()) else {
            return;
        };
        let model = self.model;
        let cancel = self.cancel.get_value();
        let session = self.session;
        let bearer = session.bearer_untracked();

        spawn_local(async move {
            let result = collection_client::<R>(bearer).list().await;
            if cancel.is_cancelled() {
                log::debug!("{}: list unmounted, dropping response", R::full_name());
                return;
            }
            if result.as_ref().is_err_and(|e| e.is_unauthorized()) {
                session.expire();
                return;
            }
            model.try_update(|m| m.complete(ticket, result));
        });
    }

    /// Удалить запись и перечитать список
    pub fn delete(&self, id: EntityId) {
        let this = *self;
        let cancel = self.cancel.get_value();
        let bearer = self.session.bearer_untracked();

        spawn_local(async move {
            let result = collection_client::<R>(bearer).delete(&id).await;
            if cancel.is_cancelled() {
                return;
            }
            match result {
                Ok(()) => {
                    log::info!("{}: deleted {}", R::full_name(), id);
                    this.fetch();
                }
                Err(e) => {
                    log::error!("{}: failed to delete {}: {}", R::full_name(), id, e);
                    this.model.try_update(|m| m.report_error(e.to_string()));
                }
            }
        });
    }

    pub fn dismiss_error(&self) {
        self.model.update(|m| m.dismiss_error());
    }

    pub fn is_loading(&self) -> bool {
        self.model.with(|m| m.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.model.with(|m| m.error().map(str::to_string))
    }

    pub fn rows(&self) -> Vec<R> {
        self.model.with(|m| m.rows().to_vec())
    }
}
