use crate::shared::api_utils::{app_config, GlooTransport};
use crate::system::auth::context::use_session;
use contracts::shared::forms::{FieldKind, FieldSpec};
use contracts::shared::image::{display_src, encode_data_url};
use contracts::shared::lifecycle::CancelToken;
use contracts::shared::reference::{label_for, load_reference_options, ReferenceOption, ReferenceSource};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

/// Поле формы по описанию из схемы
#[component]
pub fn FieldInput(
    spec: &'static FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_change: Callback<String>,
    on_error: Callback<String>,
) -> impl IntoView {
    let input = match spec.kind {
        FieldKind::Text | FieldKind::Number | FieldKind::Date => view! {
            <input
                type=spec.input_type()
                id=spec.name
                placeholder=spec.placeholder
                step=(spec.kind == FieldKind::Number).then_some("any")
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                id=spec.name
                rows="3"
                placeholder=spec.placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Reference(source) => view! {
            <ReferenceSelect source=source name=spec.name value=value on_change=on_change />
        }
        .into_any(),
        FieldKind::Image => view! {
            <ImageInput name=spec.name value=value on_change=on_change on_error=on_error />
        }
        .into_any(),
    };

    view! {
        <div class="form-group" class:form-group--invalid=move || error.with(Option::is_some)>
            <label for=spec.name>
                {spec.label}
                {spec.is_required().then_some(" *")}
            </label>
            {input}
            {move || error.get().map(|e| view! { <div class="form-group__error">{e}</div> })}
        </div>
    }
}

/// Выбор из справочника. Варианты загружаются при открытии формы,
/// в черновик записывается подпись выбранного элемента.
#[component]
fn ReferenceSelect(
    source: ReferenceSource,
    name: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    let options = RwSignal::new(Vec::<ReferenceOption>::new());
    let load_error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);

    let cancel = CancelToken::new();
    let on_unmount = cancel.clone();
    on_cleanup(move || on_unmount.cancel());

    let bearer = use_session().bearer_untracked();
    spawn_local(async move {
        let result =
            load_reference_options(source, &app_config().api, GlooTransport, bearer).await;
        if cancel.is_cancelled() {
            return;
        }
        match result {
            Ok(loaded) => {
                options.set(loaded);
                load_error.set(None);
            }
            Err(e) => {
                log::error!("Failed to load options for {}: {}", name, e);
                load_error.set(Some(e.to_string()));
            }
        }
        loading.set(false);
    });

    let handle_change = move |ev| {
        let selected_id = event_target_value(&ev);
        let label = options.with_untracked(|opts| {
            label_for(opts, &selected_id)
                .map(str::to_string)
                .unwrap_or_default()
        });
        on_change.run(label);
    };

    view! {
        <select id=name on:change=handle_change disabled=move || loading.get()>
            <option value="" selected=move || value.with(String::is_empty)>
                {move || if loading.get() { "Cargando..." } else { source.prompt() }}
            </option>
            <For
                each=move || options.get()
                key=|option| option.id.clone()
                children=move |option: ReferenceOption| {
                    let label = option.label.clone();
                    view! {
                        <option
                            value=option.id.to_string()
                            selected=move || value.with(|current| current == &label)
                        >
                            {option.label}
                        </option>
                    }
                }
            />
        </select>
        {move || load_error.get().map(|e| view! {
            <div class="form-group__error">{format!("No se pudieron cargar las opciones: {}", e)}</div>
        })}
    }
}

/// Изображение: файл кодируется в data URL, превью показывает текущее значение
#[component]
fn ImageInput(
    name: &'static str,
    value: Signal<String>,
    on_change: Callback<String>,
    on_error: Callback<String>,
) -> impl IntoView {
    let handle_change = move |ev| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let mime = file.type_();
        spawn_local(async move {
            let bytes = match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => js_sys::Uint8Array::new(&buffer).to_vec(),
                Err(e) => {
                    log::error!("Failed to read file for {}: {:?}", name, e);
                    on_error.run("No se pudo leer el archivo".to_string());
                    return;
                }
            };
            match encode_data_url(&mime, &bytes) {
                Ok(data_url) => on_change.run(data_url),
                Err(e) => on_error.run(e.to_string()),
            }
        });
    };

    view! {
        <input type="file" id=name accept="image/*" on:change=handle_change />
        {move || value.with(|v| display_src(v)).map(|src| view! {
            <img class="form-group__preview" src=src alt="Vista previa" style="max-width: 160px; max-height: 120px; margin-top: 8px;" />
        })}
    }
}
