pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |   Tabs content   |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Sidebar visibility follows ctx.left_open
                <div data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
                    {left()}
                </div>

                <div class="app-main">
                    <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
                        {center()}
                    </div>
                </div>
            </div>
        </div>
    }
}
