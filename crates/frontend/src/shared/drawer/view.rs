use super::fields::FieldInput;
use super::frame::DrawerFrame;
use super::view_model::FormViewModel;
use crate::shared::icons::icon;
use contracts::domain::common::EditableResource;
use leptos::prelude::*;
use thaw::*;

/// Форма создания/редактирования записи `R`, построенная по `R::form_schema()`.
///
/// Открытие и закрытие управляются через `vm`; после успешного сохранения
/// форма закрывается и вызывается `on_saved`.
#[component]
pub fn EntityDrawer<R: EditableResource>(vm: FormViewModel<R>, on_saved: Callback<()>) -> impl IntoView {
    let close = Callback::new(move |_| vm.close());

    view! {
        <Show when=move || vm.is_open()>
            <DrawerFrame on_close=close>
                <div class="details-container">
                    <div class="details-header">
                        <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                            <h3>{move || vm.title()}</h3>
                            <button
                                class="top-header__icon-btn"
                                title="Cerrar"
                                disabled=move || vm.is_submitting()
                                on:click=move |_| vm.close()
                            >
                                {icon("close")}
                            </button>
                        </Flex>
                    </div>

                    {move || vm.submit_error().map(|e| view! {
                        <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                            <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                            <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                        </div>
                    })}

                    <Show
                        when=move || !vm.is_loading()
                        fallback=|| view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                                <Spinner />
                                <span>"Cargando..."</span>
                            </Flex>
                        }
                    >
                        <div class="details-form">
                            {R::form_schema().iter().map(|spec| {
                                let name = spec.name;
                                view! {
                                    <FieldInput
                                        spec=spec
                                        value=Signal::derive(move || vm.value(name))
                                        error=Signal::derive(move || vm.error(name))
                                        on_change=Callback::new(move |value: String| vm.change(name, value))
                                        on_error=Callback::new(move |message: String| vm.set_field_error(name, message))
                                    />
                                }
                            }).collect_view()}

                            <div class="details-actions">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !vm.can_submit())
                                    on_click=move |_| vm.submit(on_saved)
                                >
                                    {move || if vm.is_submitting() { "Guardando..." } else { "Guardar" }}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=Signal::derive(move || vm.is_submitting())
                                    on_click=move |_| vm.close()
                                >
                                    "Cancelar"
                                </Button>
                            </div>
                        </div>
                    </Show>
                </div>
            </DrawerFrame>
        </Show>
    }
}
