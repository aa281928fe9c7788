use crate::shared::collection::ListViewModel;
use crate::shared::drawer::{EntityDrawer, FormViewModel};
use crate::shared::icons::icon;
use crate::shared::list_utils::format_amount;
use contracts::domain::a003_depreciation_category::aggregate::DepreciationCategory;
use contracts::domain::common::CollectionResource;
use leptos::prelude::*;
use thaw::*;

/// Группы контабельные: только просмотр и создание
#[component]
#[allow(non_snake_case)]
pub fn DepreciationCategoryList() -> impl IntoView {
    let list = ListViewModel::<DepreciationCategory>::new();
    let form = FormViewModel::<DepreciationCategory>::new();

    list.fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{DepreciationCategory::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=move |_| form.open_create()>
                        {icon("plus")}
                        "Nuevo Grupo"
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
                            <th class="table__header-cell">"Grupo contable"</th>
                            <th class="table__header-cell">"Vida útil (años)"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.rows().into_iter().map(|category| view! {
                            <tr class="table__row">
                                <td class="table__cell">{category.asset_category}</td>
                                <td class="table__cell">{format_amount(category.useful_life)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <EntityDrawer vm=form on_saved=Callback::new(move |_| list.fetch()) />
        </div>
    }
}
