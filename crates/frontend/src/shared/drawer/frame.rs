use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Drawer frame container (overlay + panel docked to the right edge).
///
/// Header and actions are rendered by the form itself.
#[component]
pub fn DrawerFrame(
    /// Called when the drawer should close (overlay click).
    on_close: Callback<()>,
    /// Panel width (default: 480px).
    #[prop(optional, into)]
    width: Option<String>,
    children: Children,
) -> impl IntoView {
    let width = width.unwrap_or_else(|| "480px".to_string());
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: the overlay is removed during its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    view! {
        <div
            class="modal-overlay drawer-overlay"
            style="z-index: 1000; justify-content: flex-end; align-items: stretch;"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <aside
                class="drawer"
                style=format!("width: min({width}, 100vw); height: 100%; overflow-y: auto;")
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                {children()}
            </aside>
        </div>
    }
}
