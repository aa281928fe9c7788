use crate::shared::collection::ListViewModel;
use crate::shared::date_utils::format_date;
use crate::shared::drawer::{EntityDrawer, FormViewModel};
use crate::shared::icons::icon;
use crate::shared::list_utils::{format_amount, truncate_text};
use contracts::domain::a001_asset::aggregate::Asset;
use contracts::domain::common::{CollectionResource, EntityId};
use contracts::shared::image::display_src;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AssetRow {
    pub id: Option<EntityId>,
    pub image: Option<String>,
    pub name: String,
    pub description_short: String,
    pub description: String,
    pub responsible: String,
    pub supplier: String,
    pub location: String,
    pub price: String,
    pub date_acquisition: String,
    pub warranty_expiration: String,
    pub category_short: String,
    pub category: String,
    pub depreciated_value: String,
    pub ufv3: String,
    pub ufv4: String,
}

impl From<Asset> for AssetRow {
    fn from(a: Asset) -> Self {
        Self {
            image: display_src(&a.file),
            description_short: truncate_text(&a.description, 15, ".."),
            category_short: truncate_text(&a.type_category_asset, 18, "..."),
            price: format_amount(a.price),
            date_acquisition: format_date(a.date_acquisition),
            warranty_expiration: format_date(a.warranty_expiration_date),
            depreciated_value: format_amount(a.depreciated_value),
            ufv3: format_amount(a.ufv3),
            ufv4: format_amount(a.ufv4),
            id: a.id,
            name: a.name,
            description: a.description,
            responsible: a.responsible,
            supplier: a.supplier,
            location: a.location,
            category: a.type_category_asset,
        }
    }
}

fn confirm_delete(name: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("¿Eliminar el activo \"{}\"?", name))
                .ok()
        })
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn AssetList(
    /// Открыть форму создания сразу при открытии вкладки
    #[prop(optional)]
    open_create: bool,
) -> impl IntoView {
    let list = ListViewModel::<Asset>::new();
    let form = FormViewModel::<Asset>::new();

    let on_saved = Callback::new(move |_| list.fetch());

    list.fetch();
    if open_create {
        form.open_create();
    }

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{Asset::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary size=ButtonSize::Small on_click=move |_| form.open_create()>
                        {icon("plus")}
                        "Nuevo Activo"
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
                    <button class="top-header__icon-btn" title="Cerrar" on:click=move |_| list.dismiss_error()>
                        {icon("close")}
                    </button>
                </div>
            })}

            <Show when=move || list.is_loading()>
                <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-md);">
                    <Spinner />
                    <span>"Cargando..."</span>
                </Flex>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Imagen"</th>
                            <th class="table__header-cell">"Nombre"</th>
                            <th class="table__header-cell">"Descripción"</th>
                            <th class="table__header-cell">"Responsable"</th>
                            <th class="table__header-cell">"Proveedor"</th>
                            <th class="table__header-cell">"Ubicación"</th>
                            <th class="table__header-cell">"Precio"</th>
                            <th class="table__header-cell">"Adquisición"</th>
                            <th class="table__header-cell">"Garantía"</th>
                            <th class="table__header-cell">"Valor depreciado"</th>
                            <th class="table__header-cell">"Grupo contable"</th>
                            <th class="table__header-cell">"UFV3"</th>
                            <th class="table__header-cell">"UFV4"</th>
                            <th class="table__header-cell">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || list.rows().into_iter().map(AssetRow::from).map(|row| {
                            let id_for_edit = row.id.clone();
                            let id_for_delete = row.id.clone();
                            let name_for_delete = row.name.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        {match row.image {
                                            Some(src) => view! {
                                                <img src=src alt=row.name.clone() style="width: 48px; height: 48px; object-fit: cover; border-radius: 4px;" />
                                            }.into_any(),
                                            None => icon("image"),
                                        }}
                                    </td>
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell" title=row.description>{row.description_short}</td>
                                    <td class="table__cell">{row.responsible}</td>
                                    <td class="table__cell">{row.supplier}</td>
                                    <td class="table__cell">{row.location}</td>
                                    <td class="table__cell">{row.price}</td>
                                    <td class="table__cell">{row.date_acquisition}</td>
                                    <td class="table__cell">{row.warranty_expiration}</td>
                                    <td class="table__cell">{row.depreciated_value}</td>
                                    <td class="table__cell" title=row.category>{row.category_short}</td>
                                    <td class="table__cell">{row.ufv3}</td>
                                    <td class="table__cell">{row.ufv4}</td>
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

            <EntityDrawer vm=form on_saved=on_saved />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_row_formats_asset() {
        let asset = Asset {
            id: Some(EntityId::new("1")),
            name: "Laptop".to_string(),
            description: "Equipo de oficina portátil".to_string(),
            type_category_asset: "Equipos de computación".to_string(),
            supplier: "Importadora Andina".to_string(),
            price: 4500.0,
            date_acquisition: Some(Utc.with_ymd_and_hms(2023, 5, 2, 0, 0, 0).unwrap()),
            ufv3: 2.5,
            ..Asset::default()
        };

        let row = AssetRow::from(asset);
        assert_eq!(row.description_short, "Equipo de ofici..");
        assert_eq!(row.category_short, "Equipos de computa...");
        assert_eq!(row.category, "Equipos de computación");
        assert_eq!(row.price, "4500");
        assert_eq!(row.date_acquisition, "02/05/2023");
        assert_eq!(row.warranty_expiration, "-");
        assert_eq!(row.supplier, "Importadora Andina");
        assert_eq!(row.ufv3, "2.50");
        assert_eq!(row.ufv4, "0");
        assert_eq!(row.image, None);
    }
}
