use thiserror::Error;

use super::field_spec::find_field;
use super::{validate_all, validate_field, FieldErrors, FieldValues};
use crate::domain::common::{EditableResource, EntityId};
use crate::shared::api::ApiError;
use crate::shared::lifecycle::{FetchTicket, TicketCounter};

/// Режим формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// Фаза формы
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Closed,
    /// Загрузка редактируемой записи
    Loading,
    Editing,
    /// Запрос на сохранение отправлен, повторная отправка запрещена
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Formulario con errores: {0}")]
    Invalid(FieldErrors),
    #[error("El formulario ya se está enviando")]
    AlreadySubmitting,
    #[error("El formulario no está abierto")]
    NotOpen,
    #[error("El registro todavía no se ha cargado")]
    NotLoaded,
}

/// Запись, готовая к отправке на сервер
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest<R> {
    pub mode: FormMode,
    pub record: R,
}

/// Состояние общей формы создания/редактирования записи типа `R`
#[derive(Debug, Clone)]
pub struct FormState<R: EditableResource> {
    phase: FormPhase,
    mode: FormMode,
    values: FieldValues,
    errors: FieldErrors,
    submit_error: Option<String>,
    /// Исходная запись; поля, которых нет в форме, уходят на сервер без изменений
    base: Option<R>,
    loads: TicketCounter,
}

impl<R: EditableResource> Default for FormState<R> {
    fn default() -> Self {
        Self {
            phase: FormPhase::Closed,
            mode: FormMode::Create,
            values: FieldValues::new(),
            errors: FieldErrors::new(),
            submit_error: None,
            base: None,
            loads: TicketCounter::default(),
        }
    }
}

impl<R: EditableResource> FormState<R> {
    // ============================================================================
    // Переходы
    // ============================================================================

    /// Открыть пустую форму создания
    pub fn open_create(&mut self) {
        self.reset();
        self.mode = FormMode::Create;
        self.values = R::blank_fields();
        self.base = Some(R::default());
        self.phase = FormPhase::Editing;
    }

    /// Открыть форму редактирования; запись загружается отдельно
    pub fn open_edit(&mut self, id: EntityId) -> FetchTicket {
        self.reset();
        self.mode = FormMode::Edit(id);
        self.phase = FormPhase::Loading;
        self.loads.next()
    }

    /// Результат загрузки записи. Устаревший результат игнорируется.
    pub fn finish_load(&mut self, ticket: FetchTicket, result: Result<R, ApiError>) -> bool {
        if self.phase != FormPhase::Loading || !self.loads.is_current(ticket) {
            log::debug!("{}: discarding stale record load", R::full_name());
            return false;
        }
        match result {
            Ok(record) => {
                self.values = record.to_fields();
                self.base = Some(record);
            }
            Err(e) => {
                log::warn!("{}: failed to load record: {}", R::full_name(), e);
                self.submit_error = Some(e.to_string());
            }
        }
        self.phase = FormPhase::Editing;
        true
    }

    /// Изменение поля; поле сразу перепроверяется
    pub fn change(&mut self, name: &str, value: impl Into<String>) {
        if self.phase != FormPhase::Editing {
            return;
        }
        self.values.set(name, value);
        if let Some(spec) = find_field(R::form_schema(), name) {
            match validate_field(spec, self.values.get(name)) {
                Some(message) => self.errors.insert(name, message),
                None => self.errors.remove(name),
            }
        }
    }

    /// Ошибка, найденная вне правил схемы (например, неподходящий файл)
    pub fn set_field_error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.insert(name, message);
    }

    /// Начать отправку: проверить все поля и собрать запись.
    ///
    /// Пока отправка не завершена, повторный вызов возвращает `AlreadySubmitting`.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest<R>, FormError> {
        match self.phase {
            FormPhase::Editing => {}
            FormPhase::Submitting => return Err(FormError::AlreadySubmitting),
            FormPhase::Closed | FormPhase::Loading => return Err(FormError::NotOpen),
        }
        let mut record = self.base.clone().ok_or(FormError::NotLoaded)?;

        self.errors = validate_all(R::form_schema(), &self.values);
        if !self.errors.is_empty() {
            return Err(FormError::Invalid(self.errors.clone()));
        }
        if let Err(errors) = record.apply_fields(&self.values) {
            self.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }

        self.submit_error = None;
        self.phase = FormPhase::Submitting;
        Ok(SubmitRequest {
            mode: self.mode.clone(),
            record,
        })
    }

    /// Завершить отправку. При успехе форма закрывается, при ошибке
    /// остаётся открытой с введёнными значениями и сообщением сервера.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        match result {
            Ok(()) => {
                self.reset();
                self.phase = FormPhase::Closed;
                true
            }
            Err(e) => {
                log::warn!("{}: save failed: {}", R::full_name(), e);
                self.submit_error = Some(e.to_string());
                self.phase = FormPhase::Editing;
                false
            }
        }
    }

    /// Закрыть форму без сохранения. Во время отправки не действует:
    /// форма закрывается только по её результату.
    pub fn close(&mut self) {
        if self.phase == FormPhase::Submitting {
            log::debug!("{}: close ignored while saving", R::full_name());
            return;
        }
        self.reset();
        self.phase = FormPhase::Closed;
    }

    fn reset(&mut self) {
        self.values = FieldValues::new();
        self.errors = FieldErrors::new();
        self.submit_error = None;
        self.base = None;
    }

    // ============================================================================
    // Чтение
    // ============================================================================

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.base.is_some()
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Заголовок формы, например "Nuevo Activo" / "Editar Activo"
    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("Nuevo {}", R::element_name()),
            FormMode::Edit(_) => format!("Editar {}", R::element_name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_supplier::aggregate::Supplier;
    use crate::domain::common::{CollectionResource, RecordStatus};

    fn filled_supplier_form() -> FormState<Supplier> {
        let mut form = FormState::<Supplier>::default();
        form.open_create();
        form.change("name", "Importadora Andina");
        form.change("address", "Av. Busch 123");
        form.change("phone", "70012345");
        form
    }

    #[test]
    fn test_open_create_starts_blank() {
        let mut form = FormState::<Supplier>::default();
        assert!(!form.is_open());
        form.open_create();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.value("name"), "");
        assert!(form.errors().is_empty());
        assert_eq!(form.title(), "Nuevo Proveedor");
    }

    #[test]
    fn test_change_validates_single_field() {
        let mut form = FormState::<Supplier>::default();
        form.open_create();
        form.change("name", "Ab");
        assert_eq!(form.error("name"), Some("Nombre debe tener al menos 3 caracteres"));
        assert_eq!(form.error("phone"), None);
        form.change("name", "Abc");
        assert_eq!(form.error("name"), None);
    }

    #[test]
    fn test_invalid_submit_reports_every_field() {
        let mut form = FormState::<Supplier>::default();
        form.open_create();
        let err = form.begin_submit().unwrap_err();
        match err {
            FormError::Invalid(errors) => {
                assert_eq!(errors.get("name"), Some("El campo Nombre es obligatorio"));
                assert_eq!(errors.get("address"), Some("El campo Dirección es obligatorio"));
                assert_eq!(errors.get("phone"), Some("El campo Celular es obligatorio"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_second_submit_is_rejected_while_pending() {
        let mut form = filled_supplier_form();
        let request = form.begin_submit().unwrap();
        assert_eq!(request.mode, FormMode::Create);
        assert_eq!(request.record.name, "Importadora Andina");
        assert_eq!(request.record.status, RecordStatus::Active);

        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_failed_submit_keeps_values_and_message() {
        let mut form = filled_supplier_form();
        form.begin_submit().unwrap();
        let saved = form.finish_submit(Err(ApiError::Status {
            status: 500,
            message: "Error interno".to_string(),
        }));
        assert!(!saved);
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.value("name"), "Importadora Andina");
        assert_eq!(form.submit_error(), Some("Error interno"));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_successful_submit_closes() {
        let mut form = filled_supplier_form();
        form.begin_submit().unwrap();
        assert!(form.finish_submit(Ok(())));
        assert!(!form.is_open());
        assert_eq!(form.value("name"), "");
    }

    #[test]
    fn test_edit_keeps_fields_outside_the_form() {
        let mut form = FormState::<Supplier>::default();
        let ticket = form.open_edit(EntityId::new("s1"));
        assert!(form.is_loading());
        assert_eq!(form.begin_submit(), Err(FormError::NotOpen));

        let existing = Supplier {
            id: Some(EntityId::new("s1")),
            name: "Ferreteria Sur".to_string(),
            address: "Calle 5".to_string(),
            phone: "7654321".to_string(),
            status: RecordStatus::Active,
        };
        assert!(form.finish_load(ticket, Ok(existing)));
        assert_eq!(form.value("phone"), "7654321");
        assert_eq!(form.title(), "Editar Proveedor");

        form.change("address", "Calle 6");
        let request = form.begin_submit().unwrap();
        assert_eq!(request.mode, FormMode::Edit(EntityId::new("s1")));
        assert_eq!(request.record.id(), Some(&EntityId::new("s1")));
        assert_eq!(request.record.address, "Calle 6");
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut form = FormState::<Supplier>::default();
        let first = form.open_edit(EntityId::new("s1"));
        let second = form.open_edit(EntityId::new("s2"));
        assert!(!form.finish_load(first, Ok(Supplier::default())));
        assert!(form.is_loading());
        assert!(form.finish_load(second, Err(ApiError::Transport("offline".into()))));
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(FormError::NotLoaded));
    }

    #[test]
    fn test_close_while_saving_waits_for_result() {
        let mut form = filled_supplier_form();
        form.begin_submit().unwrap();
        form.close();
        assert!(form.is_submitting());
        assert!(form.finish_submit(Ok(())));
        assert!(!form.is_open());
    }

    #[test]
    fn test_close_discards_input() {
        let mut form = filled_supplier_form();
        form.close();
        form.change("name", "Ignored");
        assert_eq!(form.value("name"), "");
        assert_eq!(form.begin_submit(), Err(FormError::NotOpen));
    }
}
