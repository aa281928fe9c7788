//! Sidebar component with collapsible menu groups.
//! Меню статическое и берётся из `contracts::shared::navigation::menu()`.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::shared::navigation::{menu, NavEntry, NavTarget};
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Группы изначально свёрнуты
    let expanded_groups = RwSignal::new(Vec::<String>::new());

    view! {
        <div class="app-sidebar__content">
            {menu().iter().map(|entry| {
                match entry.target {
                    NavTarget::Tab(tab_key) => view! {
                        <SidebarLeaf entry=*entry tab_key=tab_key padding="12px" ctx=ctx />
                    }.into_any(),
                    NavTarget::Group(children) => {
                        let group_id = entry.id.to_string();
                        let group_id_for_click = group_id.clone();
                        let group_id_for_exp = group_id.clone();
                        let group_id_for_show = group_id;

                        view! {
                            <div>
                                // Parent item
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        let gid = group_id_for_click.clone();
                                        expanded_groups.update(move |items| {
                                            if let Some(pos) = items.iter().position(|x| x == &gid) {
                                                items.remove(pos);
                                            } else {
                                                items.push(gid);
                                            }
                                        });
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(entry.icon)}
                                        <span>{entry.title}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>

                                // Children
                                <Show when=move || expanded_groups.get().contains(&group_id_for_show)>
                                    <div class="app-sidebar__children">
                                        {children.iter().filter_map(|child| match child.target {
                                            NavTarget::Tab(tab_key) => Some(view! {
                                                <SidebarLeaf entry=*child tab_key=tab_key padding="10px" ctx=ctx />
                                            }),
                                            // Меню двухуровневое
                                            NavTarget::Group(_) => None,
                                        }).collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }.into_any()
                    }
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn SidebarLeaf(
    entry: NavEntry,
    tab_key: &'static str,
    padding: &'static str,
    ctx: AppGlobalContext,
) -> impl IntoView {
    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(tab_key)
            style:padding-left=padding
            on:click=move |_| ctx.open_tab(tab_key, entry.title)
        >
            <div class="app-sidebar__item-content">
                {icon(entry.icon)}
                <span>{entry.title}</span>
            </div>
        </div>
    }
}
