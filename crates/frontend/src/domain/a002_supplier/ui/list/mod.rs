use crate::shared::collection::ListViewModel;
use crate::shared::drawer::{EntityDrawer, FormViewModel};
use crate::shared::icons::icon;
use contracts::domain::a002_supplier::aggregate::Supplier;
use contracts::domain::common::CollectionResource;
use leptos::prelude::*;
use thaw::*;

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("¿Eliminar el proveedor \"{}\"?", name))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList(
    /// Открыть форму создания сразу при открытии вкладки
    #[prop(optional)]
    open_create: bool,
) -> impl IntoView {
    let list = ListViewModel::<Supplier>::new();
    let form = FormViewModel::<Supplier>::new();

    list.fetch();
    if open_create {
        form.open_create();
    }

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Supplier::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=move |_| form.open_create()>
                        {icon("plus")}
                        "Nuevo Proveedor"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small on_click=move |_| list.fetch()>
                        {icon("refresh")}
                        "Actualizar"
                    </Button>
                </div>
            </div>

            {move || list.error().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Dirección"</th>
                            <th class="table__header-cell">"Celular"</th>
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.rows().into_iter().map(|supplier| {
                            let id_for_edit = supplier.id.clone();
                            let id_for_delete = supplier.id.clone();
                            let name_for_delete = supplier.name.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{supplier.name}</td>
                                    <td class="table__cell">{supplier.address}</td>
                                    <td class="table__cell">{supplier.phone}</td>
                                    <td class="table__cell">
                                        <Flex gap=FlexGap::Small>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    if let Some(id) = id_for_edit.clone() {
                                                        form.open_edit(id);
                                                    }
                                                }
                                            >
                                                {icon("edit")}
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| {
                                                    if let Some(id) = id_for_delete.clone() {
                                                        if confirm_delete(&name_for_delete) {
                                                            list.delete(id);
                                                        }
                                                    }
                                                }
                                            >
                                                {icon("delete")}
                                            </Button>
                                        </Flex>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <EntityDrawer vm=form on_saved=Callback::new(move |_| list.fetch()) />
        </div>
    }
}
