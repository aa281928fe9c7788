//! Generic create/edit drawer
//!
//! - frame.rs: overlay + side panel (без заголовка и кнопок)
//! - view_model.rs: FormViewModel поверх `FormState<R>`
//! - fields.rs: поля ввода по `FieldSpec` (текст, число, дата, справочник, изображение)
//! - view.rs: EntityDrawer - форма, построенная по схеме записи

mod fields;
mod frame;
mod view;
mod view_model;

pub use frame::DrawerFrame;
pub use view::EntityDrawer;
pub use view_model::FormViewModel;
