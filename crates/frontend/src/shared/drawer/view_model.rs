use crate::shared::api_utils::collection_client;
use crate::system::auth::context::{use_session, SessionContext};
use contracts::domain::common::{EditableResource, EntityId};
use contracts::shared::forms::{FormError, FormState};
use contracts::shared::lifecycle::CancelToken;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for the generic create/edit drawer
pub struct FormViewModel<R: EditableResource> {
    pub state: RwSignal<FormState<R>>,
    cancel: StoredValue<CancelToken>,
    session: SessionContext,
}

impl<R: EditableResource> Clone for FormViewModel<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: EditableResource> Copy for FormViewModel<R> {}

impl<R: EditableResource> FormViewModel<R> {
    pub fn new() -> Self {
        let cancel = CancelToken::new();
        let on_unmount = cancel.clone();
        on_cleanup(move || on_unmount.cancel());

        Self {
            state: RwSignal::new(FormState::default()),
            cancel: StoredValue::new(cancel),
            session: use_session(),
        }
    }

    pub fn open_create(&self) {
        self.state.update(|s| s.open_create());
    }

    /// Open the edit form and load the record by id
    pub fn open_edit(&self, id: EntityId) {
        let Some(ticket) = self.state.try_update(|s| s.open_edit(id.clone())) else {
            return;
        };
        let state = self.state;
        let cancel = self.cancel.get_value();
        let bearer = self.session.bearer_untracked();

        spawn_local(async move {
            let result = collection_client::<R>(bearer).get(&id).await;
            if cancel.is_cancelled() {
                return;
            }
            state.try_update(|s| s.finish_load(ticket, result));
        });
    }

    pub fn change(&self, name: &str, value: String) {
        self.state.update(|s| s.change(name, value));
    }

    pub fn set_field_error(&self, name: &str, message: String) {
        self.state.update(|s| s.set_field_error(name, message));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    /// Validate and send the record; `on_saved` runs after a successful save
    pub fn submit(&self, on_saved: Callback<()>) {
        let request = match self.state.try_update(|s| s.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(FormError::AlreadySubmitting)) => {
                log::debug!("{}: submit already in flight", R::full_name());
                return;
            }
            Some(Err(e)) => {
                log::debug!("{}: submit rejected: {}", R::full_name(), e);
                return;
            }
            None => return,
        };
        let state = self.state;
        let cancel = self.cancel.get_value();
        let bearer = self.session.bearer_untracked();

        spawn_local(async move {
            let result = collection_client::<R>(bearer).submit(&request).await;
            if cancel.is_cancelled() {
                return;
            }
            if state.try_update(|s| s.finish_submit(result)).unwrap_or(false) {
                log::info!("{}: record saved", R::full_name());
                on_saved.run(());
            }
        });
    }

    // ========================================================================
    // Reactive readers
    // ========================================================================

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn can_submit(&self) -> bool {
        self.state.with(|s| s.can_submit())
    }

    pub fn value(&self, name: &str) -> String {
        self.state.with(|s| s.value(name).to_string())
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.state.with(|s| s.error(name).map(str::to_string))
    }

    pub fn submit_error(&self) -> Option<String> {
        self.state.with(|s| s.submit_error().map(str::to_string))
    }

    pub fn title(&self) -> String {
        self.state.with(|s| s.title())
    }
}
